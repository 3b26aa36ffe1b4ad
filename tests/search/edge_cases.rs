//! Inputs at the edges: short, empty, odd characters, odd indexes.

use super::common::titled;
use wikilens::{search, search_with_limit, ArticleRecord, SearchIndex, MAX_RESULTS};

#[test]
fn test_trimmed_length_below_two_is_empty() {
    let index = titled(&["A", "Ab", "Abc"]);
    for query in ["", " ", "a", " a", "a ", "\t\na\n"] {
        assert!(search(query, &index).is_empty(), "query {query:?}");
    }
}

#[test]
fn test_only_short_terms_is_empty() {
    let index = titled(&["A B C"]);
    assert!(search("a b c", &index).is_empty());
}

#[test]
fn test_short_terms_are_ignored_among_long_ones() {
    let index = titled(&["A Tale", "Tale"]);
    // "a" is dropped; only "tale" scores.
    let results = search("a tale", &index);
    assert_eq!(results[0].article.title, "Tale");
}

#[test]
fn test_empty_index() {
    assert!(search("paris", &[]).is_empty());
}

#[test]
fn test_no_matches() {
    let index = titled(&["Paris", "Lyon"]);
    assert!(search("zanzibar", &index).is_empty());
}

#[test]
fn test_regex_like_query_is_literal() {
    let index = titled(&["C++", "C#", "Cobol"]);
    let results = search("c++", &index);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].article.title, "C++");
    assert!(search(".*", &index).is_empty());
}

#[test]
fn test_unicode_titles() {
    let index = titled(&["Île-de-France", "Zürich"]);
    assert_eq!(search("île", &index)[0].article.title, "Île-de-France");
    assert_eq!(search("ZÜRICH", &index)[0].article.title, "Zürich");
}

#[test]
fn test_never_more_than_max_results() {
    let index: Vec<ArticleRecord> = (0..100)
        .map(|i| ArticleRecord::new(format!("{i}.html"), format!("River {i}")))
        .collect();
    let results = search("river", &index);
    assert_eq!(results.len(), MAX_RESULTS);
    // Equal scores: the first twenty in index order survive.
    assert_eq!(results[0].article.filename, "0.html");
    assert_eq!(results[19].article.filename, "19.html");
}

#[test]
fn test_zero_limit() {
    let index = titled(&["River"]);
    assert!(search_with_limit("river", &index, 0).is_empty());
}

#[test]
fn test_missing_optional_fields() {
    let index = vec![ArticleRecord::new("bare.html", "Bare")];
    let results = search("bare", &index);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 100);
}

#[test]
fn test_null_fields_do_not_sink_the_index() {
    let json = r#"[
        {"filename": "a.html", "title": "Alpha", "keywords": null, "inlinks": null},
        {"filename": "b.html", "title": "Beta", "keywords": ["greek"], "inlinks": 3}
    ]"#;
    let index = SearchIndex::from_json(json).unwrap();
    assert_eq!(search("alpha", &index)[0].score, 100);
    assert_eq!(search("greek", &index)[0].article.filename, "b.html");
}
