// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Each query term is checked against every text field of an article and the
//! contributions are summed. Scores are integers, so ordering is exact.
//!
//! # Constants
//!
//! | Signal              | Score | Applied           |
//! |---------------------|-------|-------------------|
//! | Exact title         | 100   | per term          |
//! | Title prefix        | 50    | per term          |
//! | Title substring     | 20    | per term          |
//! | Keyword substring   | 10    | per term          |
//! | Summary substring   | 5     | per term          |
//! | Type equals a term  | 15    | once              |
//! | Category equals term| 15    | once              |
//! | Inbound links       | ≤ 10  | once, if matched  |
//!
//! The three title tiers are mutually exclusive for a given term: only the
//! strongest applies.

use crate::types::ArticleRecord;

/// Term equals the whole title.
pub const EXACT_TITLE_SCORE: u32 = 100;

/// Title starts with the term.
pub const TITLE_PREFIX_SCORE: u32 = 50;

/// Term occurs somewhere inside the title.
pub const TITLE_SUBSTRING_SCORE: u32 = 20;

/// Term occurs inside any keyword.
pub const KEYWORD_SCORE: u32 = 10;

/// Term occurs in the summary.
pub const SUMMARY_SCORE: u32 = 5;

/// A query term names the article's type.
pub const TYPE_MATCH_SCORE: u32 = 15;

/// A query term names the article's category.
pub const CATEGORY_MATCH_SCORE: u32 = 15;

/// Cap on the inbound-link boost.
pub const MAX_INLINK_BOOST: u32 = 10;

/// Lower-cased views of an article's searchable text, built once per article.
struct ArticleText {
    title: String,
    summary: String,
    keywords: Vec<String>,
    kind: Option<String>,
    category: Option<String>,
}

impl ArticleText {
    fn new(article: &ArticleRecord) -> Self {
        Self {
            title: article.title.to_lowercase(),
            summary: article.summary.as_deref().unwrap_or_default().to_lowercase(),
            keywords: article.keywords.iter().map(|k| k.to_lowercase()).collect(),
            kind: article.kind.as_deref().map(str::to_lowercase),
            category: article.category.as_deref().map(str::to_lowercase),
        }
    }
}

/// Title tier for one term: exact, else prefix, else substring, else nothing.
///
/// Both arguments must already be lower-cased.
pub fn title_score(term: &str, title: &str) -> u32 {
    if title == term {
        EXACT_TITLE_SCORE
    } else if title.starts_with(term) {
        TITLE_PREFIX_SCORE
    } else if title.contains(term) {
        TITLE_SUBSTRING_SCORE
    } else {
        0
    }
}

/// Inbound-link boost: one point per link, capped.
pub fn inlink_boost(inlinks: u32) -> u32 {
    inlinks.min(MAX_INLINK_BOOST)
}

/// Score one article against normalized query terms.
///
/// Terms must come from `parse_query` (lower-cased, longer than one char).
/// Articles that match no term score zero even if they have inbound links;
/// the link boost only reorders articles that matched.
pub fn score_article(article: &ArticleRecord, terms: &[String]) -> u32 {
    if terms.is_empty() {
        return 0;
    }

    let text = ArticleText::new(article);
    let mut score = 0;

    for term in terms {
        score += title_score(term, &text.title);
        if text.summary.contains(term.as_str()) {
            score += SUMMARY_SCORE;
        }
        if text.keywords.iter().any(|k| k.contains(term.as_str())) {
            score += KEYWORD_SCORE;
        }
    }

    let names = |field: &Option<String>| field.as_ref().is_some_and(|v| terms.contains(v));
    if names(&text.kind) {
        score += TYPE_MATCH_SCORE;
    }
    if names(&text.category) {
        score += CATEGORY_MATCH_SCORE;
    }

    if score > 0 {
        score += inlink_boost(article.inlinks);
    }

    score
}
