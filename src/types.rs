// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records a wiki build hands us, and what search turns them into.
//!
//! Everything here is read-only once loaded. The index is fetched once per
//! session and shared by reference-counted slice, so cloning a `SearchIndex`
//! never copies articles.
//!
//! # Invariants
//!
//! - **ArticleRecord**: `filename` names a page relative to the page prefix.
//!   Optional fields default to empty rather than failing the whole index.
//! - **ScoredResult**: `score > 0`. Zero-score articles never leave the ranker.

use serde::{Deserialize, Deserializer, Serialize};
use std::ops::Deref;
use std::sync::Arc;

// =============================================================================
// ARTICLE RECORDS
// =============================================================================

/// One indexed page's metadata, as emitted by the site generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub filename: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub keywords: Vec<String>,
    /// Article type, e.g. "city" or "person". Serialized as `type`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Inbound link count computed by the site build.
    #[serde(default, deserialize_with = "null_as_default")]
    pub inlinks: u32,
}

impl ArticleRecord {
    /// Minimal record with only the required fields set.
    pub fn new(filename: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            title: title.into(),
            summary: None,
            keywords: Vec::new(),
            kind: None,
            category: None,
            inlinks: 0,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_inlinks(mut self, inlinks: u32) -> Self {
        self.inlinks = inlinks;
        self
    }
}

// =============================================================================
// SEARCH INDEX
// =============================================================================

/// The whole searchable collection, in build order.
///
/// Build order matters: ties in the ranker keep it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchIndex {
    articles: Arc<[ArticleRecord]>,
}

impl SearchIndex {
    pub fn new(articles: Vec<ArticleRecord>) -> Self {
        Self {
            articles: articles.into(),
        }
    }

    /// The "no results" index every failed load degrades to.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn articles(&self) -> &[ArticleRecord] {
        &self.articles
    }

    /// Parse the index artifact body: a JSON array of article records.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let articles: Vec<ArticleRecord> = serde_json::from_str(body)?;
        Ok(Self::new(articles))
    }
}

impl Deref for SearchIndex {
    type Target = [ArticleRecord];

    fn deref(&self) -> &Self::Target {
        &self.articles
    }
}

impl From<Vec<ArticleRecord>> for SearchIndex {
    fn from(articles: Vec<ArticleRecord>) -> Self {
        Self::new(articles)
    }
}

impl FromIterator<ArticleRecord> for SearchIndex {
    fn from_iter<T: IntoIterator<Item = ArticleRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// An article paired with the score the ranker gave it for one query.
///
/// Borrowed from the index: results live exactly as long as the render that
/// consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredResult<'a> {
    #[serde(flatten)]
    pub article: &'a ArticleRecord,
    pub score: u32,
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// RANDOM CANDIDATES
// =============================================================================

/// One entry of the random-candidate artifact. Only the filename is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomCandidate {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Body of the random-candidate artifact: `{"articles": [{"filename": ..}, ..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RandomCandidates {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        alias = "candidates",
        alias = "pages"
    )]
    pub articles: Vec<RandomCandidate>,
}

impl RandomCandidates {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
