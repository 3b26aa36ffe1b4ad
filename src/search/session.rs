// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search box: debounced typing in, rendered results out.
//!
//! Keystrokes re-arm a debounce timer, so a burst of typing runs one search
//! once the user pauses. Each search that does run takes a request token; when
//! it finishes it only publishes if no newer search has started since. A slow
//! search that loses the race is dropped instead of overwriting newer results.

use crate::config::ArtifactPaths;
use crate::loader::IndexLoader;
use crate::render::ResultsView;
use crate::search::{is_searchable, search_view};
use crate::timer::TimerSlot;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Receives rendered results. Implemented by the adapter that owns the
/// results container.
pub trait ResultsSink: Send + Sync {
    fn publish(&self, view: ResultsView);
}

struct Inner {
    loader: IndexLoader,
    paths: ArtifactPaths,
    sink: Arc<dyn ResultsSink>,
    max_results: usize,
    debounce: Duration,
    latest: AtomicU64,
    timer: TimerSlot,
}

/// Debounced, race-safe search input.
#[derive(Clone)]
pub struct SearchBox {
    inner: Arc<Inner>,
}

impl SearchBox {
    pub fn new(
        loader: IndexLoader,
        paths: ArtifactPaths,
        sink: Arc<dyn ResultsSink>,
        max_results: usize,
        debounce: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                loader,
                paths,
                sink,
                max_results,
                debounce,
                latest: AtomicU64::new(0),
                timer: TimerSlot::new(),
            }),
        }
    }

    /// The input changed. Searches once typing pauses.
    pub fn input(&self, query: &str) {
        let query = query.to_string();
        let this = self.clone();
        self.inner.timer.arm(self.inner.debounce, move || async move {
            this.run(&query).await;
        });
    }

    /// The input gained focus: start loading the index early.
    pub fn prefetch(&self) {
        let loader = self.inner.loader.clone();
        tokio::spawn(async move {
            loader.load().await;
        });
    }

    /// Search now, publishing unless a newer search overtook this one.
    ///
    /// Returns the view if it was published.
    pub async fn run(&self, query: &str) -> Option<ResultsView> {
        let token = self.inner.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let view = if is_searchable(query) {
            let index = self.inner.loader.load().await;
            search_view(query, &index, &self.inner.paths, self.inner.max_results)
        } else {
            ResultsView::Cleared
        };

        if self.inner.latest.load(Ordering::SeqCst) != token {
            debug!(query, token, "dropping results overtaken by a newer search");
            return None;
        }
        self.inner.sink.publish(view.clone());
        Some(view)
    }

    /// Enter pressed: link of the best result for `query`, if any.
    pub async fn submit(&self, query: &str) -> Option<String> {
        self.inner.timer.cancel();
        let view = self.run(query).await?;
        view.first_href().map(str::to_string)
    }

    /// Drop any search still waiting on the debounce.
    pub fn cancel(&self) {
        self.inner.timer.cancel();
    }
}
