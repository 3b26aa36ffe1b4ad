// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! `search` is a pure function of query and index. Same inputs, same
//! ordered output, no clocks or randomness involved. The stateful part
//! (debounced typing, racing requests) lives in `SearchBox`.

mod session;
pub mod utils;

pub use session::{ResultsSink, SearchBox};
pub use utils::{is_searchable, parse_query, MIN_QUERY_LEN};

use crate::config::ArtifactPaths;
use crate::render::{render, ResultsView};
use crate::scoring::score_article;
use crate::types::{ArticleRecord, ScoredResult};

/// Upper bound on results returned for one query.
pub const MAX_RESULTS: usize = 20;

/// Rank `index` against `query`, returning at most [`MAX_RESULTS`] hits.
///
/// Queries shorter than two characters (after trimming) return nothing.
pub fn search<'a>(query: &str, index: &'a [ArticleRecord]) -> Vec<ScoredResult<'a>> {
    search_with_limit(query, index, MAX_RESULTS)
}

/// [`search`] with a caller-chosen result cap.
///
/// Ties keep index order: the sort is stable.
pub fn search_with_limit<'a>(
    query: &str,
    index: &'a [ArticleRecord],
    limit: usize,
) -> Vec<ScoredResult<'a>> {
    if !is_searchable(query) {
        return Vec::new();
    }
    let terms = parse_query(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<ScoredResult<'a>> = index
        .iter()
        .filter_map(|article| {
            let score = score_article(article, &terms);
            (score > 0).then_some(ScoredResult { article, score })
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);
    results
}

/// Rank and render in one step: what the results container should show.
///
/// Queries too short to search clear the container instead of reporting
/// "no results".
pub fn search_view(
    query: &str,
    index: &[ArticleRecord],
    paths: &ArtifactPaths,
    limit: usize,
) -> ResultsView {
    if !is_searchable(query) {
        return ResultsView::Cleared;
    }
    render(&search_with_limit(query, index, limit), query, paths)
}
