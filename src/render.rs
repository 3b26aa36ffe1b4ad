// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning ranked results into something a page can show.
//!
//! `render` produces a markup-agnostic [`ResultsView`]; `ResultsView::to_html`
//! turns that into the snippet the results container displays. Every string
//! that came from the index or the user is escaped before it goes anywhere
//! near markup, and the only tags we ever emit ourselves are the highlight
//! markers and the list scaffolding.
//!
//! # Highlighting
//!
//! Matches are located on the raw text, then each piece is escaped on its way
//! out. Searching the raw text means a term like `lt` can never land inside an
//! `&lt;` entity and split it, and a term like `<b>` still finds a literal
//! `<b>` in a title.

use crate::config::ArtifactPaths;
use crate::search::parse_query;
use crate::types::ScoredResult;
use regex::RegexBuilder;
use serde::Serialize;

/// Opening highlight marker.
pub const MARK_OPEN: &str = "<mark>";

/// Closing highlight marker.
pub const MARK_CLOSE: &str = "</mark>";

/// Badge label for articles without a type.
pub const DEFAULT_KIND: &str = "article";

/// What the results container should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum ResultsView {
    /// Query too short: nothing to show.
    Cleared,
    /// Searched, found nothing. `query_html` is already escaped.
    #[serde(rename_all = "camelCase")]
    Empty { query_html: String },
    /// `header` reads "1 result" or "N results".
    Results {
        header: String,
        items: Vec<RenderedResult>,
    },
}

/// One result line, with escaped and highlighted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedResult {
    pub href: String,
    /// Type badge label (not escaped; use `to_html` for markup).
    pub kind: String,
    pub title_html: String,
    pub summary_html: String,
    pub score: u32,
}

impl ResultsView {
    /// Link of the top result, if any.
    pub fn first_href(&self) -> Option<&str> {
        match self {
            Self::Results { items, .. } => items.first().map(|item| item.href.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Results { items, .. } => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Markup for the results container.
    pub fn to_html(&self) -> String {
        match self {
            Self::Cleared => String::new(),
            Self::Empty { query_html } => {
                format!("<div class=\"search-empty\">No results for \"{query_html}\"</div>")
            }
            Self::Results { header, items } => {
                let mut html = format!(
                    "<div class=\"search-header\">{}</div>\n<ul class=\"search-results\">\n",
                    escape_html(header)
                );
                for item in items {
                    html.push_str(&format!(
                        concat!(
                            "<li><a href=\"{}\"><span class=\"badge\">{}</span> ",
                            "<span class=\"title\">{}</span></a>",
                        ),
                        escape_html(&item.href),
                        escape_html(&item.kind),
                        item.title_html,
                    ));
                    if !item.summary_html.is_empty() {
                        html.push_str(&format!("<p class=\"summary\">{}</p>", item.summary_html));
                    }
                    html.push_str("</li>\n");
                }
                html.push_str("</ul>");
                html
            }
        }
    }
}

/// Build the display payload for `results` of `query`.
///
/// Links are `paths.page_prefix + filename`.
pub fn render(results: &[ScoredResult<'_>], query: &str, paths: &ArtifactPaths) -> ResultsView {
    if results.is_empty() {
        return ResultsView::Empty {
            query_html: escape_html(query),
        };
    }

    let terms = parse_query(query);
    let items = results
        .iter()
        .map(|result| {
            let article = result.article;
            RenderedResult {
                href: paths.page(&article.filename),
                kind: article
                    .kind
                    .clone()
                    .filter(|kind| !kind.is_empty())
                    .unwrap_or_else(|| DEFAULT_KIND.to_string()),
                title_html: highlight(&article.title, &terms),
                summary_html: highlight(article.summary.as_deref().unwrap_or_default(), &terms),
                score: result.score,
            }
        })
        .collect();

    ResultsView::Results {
        header: result_count_label(results.len()),
        items,
    }
}

/// "1 result", "2 results".
pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{count} results")
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape `text`, wrapping every case-insensitive occurrence of any term in
/// highlight markers.
///
/// Terms are matched literally: regex metacharacters in a term are escaped
/// before the pattern is built. Overlapping matches merge into one marker.
pub fn highlight(text: &str, terms: &[String]) -> String {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for term in terms.iter().filter(|t| !t.is_empty()) {
        let Ok(pattern) = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        else {
            continue;
        };
        spans.extend(pattern.find_iter(text).map(|m| (m.start(), m.end())));
    }

    if spans.is_empty() {
        return escape_html(text);
    }

    spans.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut out = String::with_capacity(text.len() + merged.len() * 13);
    let mut cursor = 0;
    for (start, end) in merged {
        out.push_str(&escape_html(&text[cursor..start]));
        out.push_str(MARK_OPEN);
        out.push_str(&escape_html(&text[start..end]));
        out.push_str(MARK_CLOSE);
        cursor = end;
    }
    out.push_str(&escape_html(&text[cursor..]));
    out
}
