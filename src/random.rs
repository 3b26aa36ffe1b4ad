// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "Random page" navigation.
//!
//! Two sources, tried in order: the site's small random-candidate artifact,
//! then the full search index. The first non-empty one wins and a page is
//! drawn uniformly from it. If both come up empty the user is told, which is
//! the only failure in the crate that reaches the user directly.

use crate::config::ArtifactPaths;
use crate::error::ArtifactError;
use crate::loader::{ArtifactSource, IndexLoader};
use crate::types::RandomCandidates;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{info, warn};

/// Message shown when no page could be picked.
pub const UNAVAILABLE_NOTICE: &str =
    "Random page is unavailable right now. Please try again later.";

/// Where the browser goes. Implemented by the adapter.
pub trait Navigation: Send + Sync {
    fn navigate(&self, url: &str);
    /// Tell the user something went wrong.
    fn notify_unavailable(&self, message: &str);
}

/// Which source supplied the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    RandomArtifact,
    SearchIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomOutcome {
    Navigated { url: String, source: CandidateSource },
    Unavailable,
}

/// Uniform index in `[0, len)`, or `None` for an empty list.
pub fn pick_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Option<usize> {
    (len > 0).then(|| rng.gen_range(0..len))
}

pub struct RandomNavigator {
    source: Arc<dyn ArtifactSource>,
    loader: IndexLoader,
    paths: ArtifactPaths,
    navigation: Arc<dyn Navigation>,
    rng: Mutex<StdRng>,
}

impl RandomNavigator {
    pub fn new(
        source: Arc<dyn ArtifactSource>,
        loader: IndexLoader,
        paths: ArtifactPaths,
        navigation: Arc<dyn Navigation>,
    ) -> Self {
        Self {
            source,
            loader,
            paths,
            navigation,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Use a fixed random source (tests, reproducible demos).
    pub fn with_rng(self, rng: StdRng) -> Self {
        self.set_rng(rng);
        self
    }

    pub fn set_rng(&self, rng: StdRng) {
        *self.rng.lock() = rng;
    }

    /// Pick a page and navigate to it, or notify the user that none exists.
    pub async fn navigate(&self) -> RandomOutcome {
        let outcome = match self.from_random_artifact().await {
            Some(filename) => Some((filename, CandidateSource::RandomArtifact)),
            None => self
                .from_index()
                .await
                .map(|filename| (filename, CandidateSource::SearchIndex)),
        };

        match outcome {
            Some((filename, source)) => {
                let url = self.paths.page(&filename);
                info!(%url, ?source, "random navigation");
                self.navigation.navigate(&url);
                RandomOutcome::Navigated { url, source }
            }
            None => {
                warn!("no random page candidates available");
                self.navigation.notify_unavailable(UNAVAILABLE_NOTICE);
                RandomOutcome::Unavailable
            }
        }
    }

    async fn from_random_artifact(&self) -> Option<String> {
        let path = &self.paths.random;
        let candidates = match self.fetch_candidates(path).await {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(
                    path = %path,
                    error = %err,
                    "random candidates unavailable, falling back to index"
                );
                return None;
            }
        };
        let index = pick_index(&mut *self.rng.lock(), candidates.articles.len())?;
        Some(candidates.articles[index].filename.clone())
    }

    async fn from_index(&self) -> Option<String> {
        // Reuses the session's index if search already loaded it.
        let index = self.loader.load().await;
        let pick = pick_index(&mut *self.rng.lock(), index.len())?;
        Some(index[pick].filename.clone())
    }

    async fn fetch_candidates(&self, path: &str) -> Result<RandomCandidates, ArtifactError> {
        let body = self.source.fetch(path).await?;
        RandomCandidates::from_json(&body).map_err(|e| ArtifactError::parse(path, e))
    }
}
