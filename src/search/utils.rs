// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing shared by the ranker and the highlighter.

/// Minimum trimmed query length, in characters, before anything is searched.
pub const MIN_QUERY_LEN: usize = 2;

/// Split a query into lower-cased terms, dropping one-character terms.
///
/// # Example
///
/// ```ignore
/// let terms = parse_query("The Eiffel  a Tower");
/// assert_eq!(terms, vec!["the", "eiffel", "tower"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|term| term.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Is the raw query long enough to search at all?
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}
