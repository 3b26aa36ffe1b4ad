// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One page's worth of client state, in one place.
//!
//! A `Session` is built when the page starts and owns everything the page
//! keeps between events: the index cache, the search box, the popover slot and
//! the random navigator. Nothing is global, so two sessions (or two tests)
//! never see each other's state.

use crate::config::{ArtifactPaths, SiteConfig};
use crate::loader::{ArtifactSource, IndexLoader};
use crate::preview::{PopoverSurface, PreviewController, PreviewLink};
use crate::random::{Navigation, RandomNavigator, RandomOutcome};
use crate::search::{search_with_limit, ResultsSink, SearchBox};
use crate::types::{ScoredResult, SearchIndex};
use rand::rngs::StdRng;
use std::sync::Arc;

/// The host-side collaborators a session talks to.
pub struct Adapters {
    pub source: Arc<dyn ArtifactSource>,
    pub surface: Arc<dyn PopoverSurface>,
    pub navigation: Arc<dyn Navigation>,
    pub results: Arc<dyn ResultsSink>,
}

pub struct Session {
    paths: ArtifactPaths,
    max_results: usize,
    loader: IndexLoader,
    search_box: SearchBox,
    preview: PreviewController,
    random: RandomNavigator,
}

impl Session {
    /// Start a session for the page at `page_path`.
    pub fn new(config: &SiteConfig, page_path: &str, adapters: Adapters) -> Self {
        let paths = config.resolve(page_path);
        let loader = IndexLoader::new(adapters.source.clone(), paths.index.clone());
        let search_box = SearchBox::new(
            loader.clone(),
            paths.clone(),
            adapters.results,
            config.max_results,
            config.timing.search_debounce(),
        );
        let preview = PreviewController::new(
            adapters.source.clone(),
            adapters.surface,
            paths.clone(),
            config.timing,
            config.placement,
        );
        let random = RandomNavigator::new(
            adapters.source,
            loader.clone(),
            paths.clone(),
            adapters.navigation,
        );

        Self {
            paths,
            max_results: config.max_results,
            loader,
            search_box,
            preview,
            random,
        }
    }

    /// Seed the random navigator.
    pub fn with_rng(self, rng: StdRng) -> Self {
        self.random.set_rng(rng);
        self
    }

    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    // -------------------------------------------------------------------------
    // Entry points for external callers
    // -------------------------------------------------------------------------

    /// The search index, loaded once per session.
    pub async fn load_index(&self) -> SearchIndex {
        self.loader.load().await
    }

    /// Rank an explicit index with this session's result cap.
    pub fn search<'a>(&self, query: &str, index: &'a SearchIndex) -> Vec<ScoredResult<'a>> {
        search_with_limit(query, index, self.max_results)
    }

    pub async fn navigate_random(&self) -> RandomOutcome {
        self.random.navigate().await
    }

    // -------------------------------------------------------------------------
    // Event hooks for the adapter
    // -------------------------------------------------------------------------

    pub fn search_box(&self) -> &SearchBox {
        &self.search_box
    }

    pub fn preview(&self) -> &PreviewController {
        &self.preview
    }

    pub fn on_search_input(&self, query: &str) {
        self.search_box.input(query);
    }

    pub fn on_search_focus(&self) {
        self.search_box.prefetch();
    }

    pub fn on_link_enter(&self, link: PreviewLink) -> bool {
        self.preview.hover_enter(link)
    }

    pub fn on_link_leave(&self) {
        self.preview.leave_link();
    }

    pub fn on_popover_enter(&self) {
        self.preview.enter_popover();
    }

    pub fn on_popover_leave(&self) {
        self.preview.leave_popover();
    }

    pub fn on_escape(&self) {
        self.preview.escape();
    }

    /// Cancel every timer and take down any popover.
    pub fn shutdown(&self) {
        self.search_box.cancel();
        self.preview.hide();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}
