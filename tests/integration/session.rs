//! End-to-end: a session wired to in-memory adapters.

use super::common::{advance, anchor, wiki_source, Harness, WIKI_INDEX};
use wikilens::testing::MockSource;
use wikilens::{PreviewLink, PreviewPhase, ResultsView};

#[tokio::test(start_paused = true)]
async fn test_typing_publishes_rendered_results() {
    let harness = Harness::new(wiki_source());

    harness.session.on_search_focus();
    harness.session.on_search_input("se");
    harness.session.on_search_input("seine");
    advance(250).await;

    let views = harness.results.views();
    assert_eq!(views.len(), 1);
    match &views[0] {
        ResultsView::Results { header, items } => {
            assert!(header.contains("result"), "{header}");
            assert_eq!(items[0].href, "pages/seine.html");
            assert!(items[0].title_html.contains("<mark>Seine</mark>"));
        }
        other => panic!("expected results, got {other:?}"),
    }
    assert_eq!(harness.source.fetch_count("search-index.json"), 1);
}

#[tokio::test(start_paused = true)]
async fn test_clearing_input_clears_results() {
    let harness = Harness::new(wiki_source());

    harness.session.on_search_input("lyon");
    advance(250).await;
    harness.session.on_search_input("l");
    advance(250).await;

    assert_eq!(harness.results.last(), Some(ResultsView::Cleared));
}

#[tokio::test(start_paused = true)]
async fn test_no_matches_reports_query() {
    let harness = Harness::new(wiki_source());

    harness.session.on_search_input("zzzz");
    advance(250).await;

    let html = harness.results.last().unwrap().to_html();
    assert!(html.contains("No results for"), "{html}");
    assert!(html.contains("zzzz"));
}

#[tokio::test(start_paused = true)]
async fn test_search_and_random_share_one_index_fetch() {
    let harness = Harness::new(wiki_source().with("random.json", "{}"));

    let index = harness.session.load_index().await;
    let results = harness.session.search("paris", &index);
    assert_eq!(results[0].article.filename, "paris.html");

    harness.session.navigate_random().await;
    harness.session.on_search_input("lyon");
    advance(250).await;

    assert_eq!(harness.source.fetch_count("search-index.json"), 1);
    assert_eq!(harness.navigation.visits().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_hover_and_escape_through_session() {
    let harness = Harness::new(wiki_source());
    let session = &harness.session;

    assert!(session.on_link_enter(PreviewLink::new("pages/paris.html", anchor())));
    advance(350).await;
    assert_eq!(session.preview().phase(), PreviewPhase::Shown);

    session.on_link_leave();
    session.on_popover_enter();
    advance(500).await;
    assert_eq!(harness.surface.attached_count(), 1);

    session.on_escape();
    assert_eq!(harness.surface.attached_count(), 0);
    assert_eq!(session.preview().phase(), PreviewPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_session_tears_down_page_state() {
    let harness = Harness::new(wiki_source());
    let surface = harness.surface.clone();
    let results = harness.results.clone();

    harness.session.on_link_enter(PreviewLink::new("pages/lyon.html", anchor()));
    advance(350).await;
    assert_eq!(surface.attached_count(), 1);

    harness.session.on_search_input("paris");
    drop(harness);
    advance(1000).await;

    assert_eq!(surface.attached_count(), 0);
    assert!(results.views().is_empty(), "debounced search was cancelled");
}

#[tokio::test(start_paused = true)]
async fn test_nested_page_links_resolve_upward() {
    let source = MockSource::new()
        .with("../search-index.json", WIKI_INDEX)
        .with("../fragments/lyon.html", "<h1>Lyon</h1>");
    let harness = Harness::for_page(source, "/pages/paris.html");

    harness.session.on_search_input("lyon");
    advance(250).await;
    assert_eq!(
        harness.results.last().and_then(|v| v.first_href().map(str::to_string)),
        Some("../pages/lyon.html".to_string())
    );

    harness.session.on_link_enter(PreviewLink::new("lyon.html", anchor()));
    advance(350).await;
    assert_eq!(harness.surface.attached(), vec!["<h1>Lyon</h1>"]);
}

#[tokio::test(start_paused = true)]
async fn test_subdirectory_index_page_resolves_upward() {
    let source = MockSource::new().with("../search-index.json", WIKI_INDEX);
    let harness = Harness::for_page(source, "/pages/");

    assert_eq!(harness.session.load_index().await.len(), 10);
    assert_eq!(harness.session.paths().page("lyon.html"), "../pages/lyon.html");
    assert_eq!(harness.source.fetch_count("search-index.json"), 0);
}
