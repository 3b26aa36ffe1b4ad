// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries and article text at the ranker and renderer to
//! verify they never panic, never exceed the result cap and never let
//! unescaped markup through.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wikilens::{render, search, ArticleRecord, ArtifactPaths, MAX_RESULTS};

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    articles: Vec<(String, String, Option<String>, u32)>,
}

fuzz_target!(|input: Input| {
    // Cap sizes to avoid timeouts
    let query = input.query.chars().take(200).collect::<String>();
    let index: Vec<ArticleRecord> = input
        .articles
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, (title, keyword, summary, inlinks))| {
            let mut article = ArticleRecord::new(format!("{i}.html"), title)
                .with_keywords([keyword])
                .with_inlinks(inlinks);
            if let Some(summary) = summary {
                article = article.with_summary(summary);
            }
            article
        })
        .collect();

    // INVARIANT 1: bounded, positive, sorted
    let results = search(&query, &index);
    assert!(results.len() <= MAX_RESULTS);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(results.iter().all(|r| r.score > 0));

    // INVARIANT 2: short queries never match
    if query.trim().chars().count() < 2 {
        assert!(results.is_empty());
    }

    // INVARIANT 3: rendered titles and summaries carry no raw markup
    let view = render(&results, &query, &ArtifactPaths::default());
    if let wikilens::ResultsView::Results { items, .. } = &view {
        for item in items {
            for html in [&item.title_html, &item.summary_html] {
                let stripped = html.replace("<mark>", "").replace("</mark>", "");
                assert!(!stripped.contains('<'), "raw markup in {html:?}");
            }
        }
    }
    let _ = view.to_html();
});
