//! Ranking order across the scoring signals.

use super::common::{titled, wiki_index};
use wikilens::{
    search, ArticleRecord, CATEGORY_MATCH_SCORE, EXACT_TITLE_SCORE, KEYWORD_SCORE,
    SUMMARY_SCORE, TITLE_PREFIX_SCORE, TITLE_SUBSTRING_SCORE, TYPE_MATCH_SCORE,
};

fn titles(results: &[wikilens::ScoredResult<'_>]) -> Vec<String> {
    results.iter().map(|r| r.article.title.clone()).collect()
}

// ============================================================================
// TITLE TIERS
// ============================================================================

#[test]
fn test_exact_beats_prefix_beats_substring() {
    let index = titled(&["Concatenate", "Category", "Cat"]);
    let results = search("cat", &index);
    assert_eq!(titles(&results), vec!["Cat", "Category", "Concatenate"]);
    assert_eq!(results[0].score, EXACT_TITLE_SCORE);
    assert_eq!(results[1].score, TITLE_PREFIX_SCORE);
    assert_eq!(results[2].score, TITLE_SUBSTRING_SCORE);
}

#[test]
fn test_title_match_is_case_insensitive() {
    let index = titled(&["PARIS"]);
    assert_eq!(search("paris", &index)[0].score, EXACT_TITLE_SCORE);
    assert_eq!(search("PaRiS", &index)[0].score, EXACT_TITLE_SCORE);
}

#[test]
fn test_multi_term_scores_sum() {
    let index = vec![ArticleRecord::new("p.html", "Paris Commune")];
    // "paris" is a prefix, "commune" a substring of the title.
    let results = search("paris commune", &index);
    assert_eq!(results[0].score, TITLE_PREFIX_SCORE + TITLE_SUBSTRING_SCORE);
}

#[test]
fn test_multi_term_is_or_not_and() {
    let index = titled(&["Paris", "Lyon", "Marseille"]);
    let results = search("paris lyon", &index);
    assert_eq!(titles(&results), vec!["Paris", "Lyon"]);
}

// ============================================================================
// SECONDARY SIGNALS
// ============================================================================

#[test]
fn test_summary_keyword_type_category_contributions() {
    let base = ArticleRecord::new("x.html", "Unrelated");
    let summary = base.clone().with_summary("about rivers");
    let keyword = base.clone().with_keywords(["big rivers"]);
    let kind = base.clone().with_kind("rivers");
    let category = base.clone().with_category("rivers");

    assert_eq!(search("rivers", &[summary])[0].score, SUMMARY_SCORE);
    assert_eq!(search("rivers", &[keyword])[0].score, KEYWORD_SCORE);
    assert_eq!(search("rivers", &[kind])[0].score, TYPE_MATCH_SCORE);
    assert_eq!(search("rivers", &[category])[0].score, CATEGORY_MATCH_SCORE);
}

#[test]
fn test_inlinks_capped_at_ten() {
    let twin = |inlinks| {
        ArticleRecord::new("t.html", "River")
            .with_summary("water")
            .with_inlinks(inlinks)
    };
    let none = search("river", &[twin(0)])[0].score;
    let five = search("river", &[twin(5)])[0].score;
    let thousand = search("river", &[twin(1000)])[0].score;

    assert_eq!(five - none, 5);
    assert_eq!(thousand - none, 10);
    assert_eq!(thousand - five, 5);
}

#[test]
fn test_inlinks_break_ties_between_equal_titles() {
    let index = vec![
        ArticleRecord::new("a.html", "Rhone delta").with_inlinks(1),
        ArticleRecord::new("b.html", "Rhone glacier").with_inlinks(8),
    ];
    let results = search("rhone", &index);
    assert_eq!(results[0].article.filename, "b.html");
}

#[test]
fn test_exact_title_outranks_secondary_signals() {
    let index = vec![
        ArticleRecord::new("a.html", "Seine basin")
            .with_summary("the seine and its tributaries")
            .with_keywords(["seine"])
            .with_inlinks(10),
        ArticleRecord::new("b.html", "Seine"),
    ];
    let results = search("seine", &index);
    assert_eq!(results[0].article.filename, "b.html");
}

// ============================================================================
// FIXTURE CORPUS
// ============================================================================

#[test]
fn test_fixture_paris_ranking() {
    let index = wiki_index();
    let results = search("paris", &index);
    let files: Vec<&str> = results.iter().map(|r| r.article.filename.as_str()).collect();

    assert_eq!(files[0], "paris.html");
    assert_eq!(files[1], "paris_commune.html");
    // Summary-only mentions trail the title matches.
    assert!(files.contains(&"seine.html"));
    assert!(files.contains(&"eiffel_tower.html"));
    assert!(!files.contains(&"cat.html"));
}

#[test]
fn test_fixture_type_query() {
    let index = wiki_index();
    let results = search("river", &index);
    // Both rivers have type "river" plus a keyword hit; Seine has more inlinks.
    assert_eq!(results[0].article.filename, "seine.html");
    assert_eq!(results[1].article.filename, "rhone.html");
}

#[test]
fn test_fixture_deterministic() {
    let index = wiki_index();
    let first: Vec<_> = search("france city", &index)
        .iter()
        .map(|r| (r.article.filename.clone(), r.score))
        .collect();
    for _ in 0..10 {
        let again: Vec<_> = search("france city", &index)
            .iter()
            .map(|r| (r.article.filename.clone(), r.score))
            .collect();
        assert_eq!(first, again);
    }
}
