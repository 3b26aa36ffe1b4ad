// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fetching artifacts, and loading the search index exactly once.
//!
//! The index is static for the lifetime of a session, so the first successful
//! load is kept forever. While a load is in flight every caller attaches to the
//! same shared future instead of starting another fetch. A failed load leaves
//! the loader idle again so the next caller retries, and resolves every waiter
//! to an empty index.
//!
//! # States
//!
//! ```text
//! Idle ──load()──▶ Loading(shared) ──ok──▶ Ready(index)
//!   ▲                    │
//!   └────────err─────────┘
//! ```

use crate::error::ArtifactError;
use crate::types::SearchIndex;
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, warn};

/// Where pre-built artifacts come from: `fetch` in a browser, the filesystem
/// in a test harness, an HTTP client elsewhere.
pub trait ArtifactSource: Send + Sync {
    /// Fetch the artifact at `path` and return its body as text.
    fn fetch<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<String, ArtifactError>>;
}

/// Fetch `path` and parse it as the search index.
pub async fn fetch_index(
    source: &dyn ArtifactSource,
    path: &str,
) -> Result<SearchIndex, ArtifactError> {
    let body = source.fetch(path).await?;
    SearchIndex::from_json(&body).map_err(|e| ArtifactError::parse(path, e))
}

type PendingLoad = Shared<BoxFuture<'static, SearchIndex>>;

enum LoadState {
    Idle,
    Loading(PendingLoad),
    Ready(SearchIndex),
}

/// Memoizing, request-coalescing index loader.
///
/// Cheap to clone; clones share the cache.
#[derive(Clone)]
pub struct IndexLoader {
    source: Arc<dyn ArtifactSource>,
    path: Arc<str>,
    state: Arc<Mutex<LoadState>>,
}

impl IndexLoader {
    pub fn new(source: Arc<dyn ArtifactSource>, path: impl Into<String>) -> Self {
        Self {
            source,
            path: path.into().into(),
            state: Arc::new(Mutex::new(LoadState::Idle)),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The index, loading it on first use.
    ///
    /// Never fails: an unavailable index is an empty one.
    pub async fn load(&self) -> SearchIndex {
        let pending = {
            let mut state = self.state.lock();
            let joined = match &*state {
                LoadState::Ready(index) => return index.clone(),
                LoadState::Loading(pending) => Some(pending.clone()),
                LoadState::Idle => None,
            };
            match joined {
                Some(pending) => {
                    debug!(path = %self.path, "joining in-flight index load");
                    pending
                }
                None => {
                    let pending = self.start_load();
                    *state = LoadState::Loading(pending.clone());
                    pending
                }
            }
        };
        pending.await
    }

    /// The index if a load has already succeeded. Never starts a fetch.
    pub fn cached(&self) -> Option<SearchIndex> {
        match &*self.state.lock() {
            LoadState::Ready(index) => Some(index.clone()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(&*self.state.lock(), LoadState::Loading(_))
    }

    fn start_load(&self) -> PendingLoad {
        let source = Arc::clone(&self.source);
        let path = Arc::clone(&self.path);
        let state = Arc::clone(&self.state);

        async move {
            match fetch_index(source.as_ref(), &path).await {
                Ok(index) => {
                    debug!(path = %path, articles = index.len(), "search index loaded");
                    *state.lock() = LoadState::Ready(index.clone());
                    index
                }
                Err(err) => {
                    warn!(path = %path, error = %err, "search index unavailable");
                    *state.lock() = LoadState::Idle;
                    SearchIndex::empty()
                }
            }
        }
        .boxed()
        .shared()
    }
}
