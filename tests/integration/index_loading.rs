//! Index loading: memoization, coalescing, degradation.

use super::common::{index_json, make_article, WIKI_INDEX};
use std::sync::Arc;
use std::time::Duration;
use wikilens::testing::MockSource;
use wikilens::{fetch_index, ArtifactError, IndexLoader};

#[tokio::test(start_paused = true)]
async fn test_many_concurrent_callers_one_fetch() {
    let source = Arc::new(
        MockSource::new()
            .with("search-index.json", WIKI_INDEX)
            .with_delay(Duration::from_millis(120)),
    );
    let loader = IndexLoader::new(source.clone(), "search-index.json");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let loader = loader.clone();
            tokio::spawn(async move { loader.load().await.len() })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap(), 10);
    }
    assert_eq!(source.fetch_count("search-index.json"), 1);
}

#[tokio::test(start_paused = true)]
async fn test_late_joiner_gets_same_result() {
    let source = Arc::new(
        MockSource::new()
            .with("search-index.json", WIKI_INDEX)
            .with_delay(Duration::from_millis(100)),
    );
    let loader = IndexLoader::new(source.clone(), "search-index.json");

    let early = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load().await }
    });
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(loader.is_loading());
    let late = loader.load().await;
    let early = early.await.unwrap();

    assert_eq!(early, late);
    assert_eq!(source.fetch_count("search-index.json"), 1);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_callers_all_see_empty_on_failure() {
    let source = Arc::new(
        MockSource::new()
            .with_network_error("search-index.json")
            .with_delay(Duration::from_millis(30)),
    );
    let loader = IndexLoader::new(source.clone(), "search-index.json");

    let (a, b, c) = tokio::join!(loader.load(), loader.load(), loader.load());
    assert!(a.is_empty() && b.is_empty() && c.is_empty());
    assert_eq!(source.fetch_count("search-index.json"), 1);
    assert!(loader.cached().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_retry_after_failure_is_user_driven() {
    let source = Arc::new(MockSource::new().with_status("search-index.json", 404));
    let loader = IndexLoader::new(source.clone(), "search-index.json");

    assert!(loader.load().await.is_empty());
    // No background retry happens on its own.
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(source.fetch_count("search-index.json"), 1);

    source.set("search-index.json", &index_json(&[make_article("Paris")]));
    assert_eq!(loader.load().await[0].title, "Paris");
    assert_eq!(source.fetch_count("search-index.json"), 2);
}

#[tokio::test]
async fn test_fetch_index_reports_parse_failure() {
    let source = MockSource::new().with("search-index.json", r#"{"not": "a list"}"#);
    let err = fetch_index(&source, "search-index.json").await.unwrap_err();
    assert!(matches!(err, ArtifactError::Parse { .. }));
    assert_eq!(err.path(), "search-index.json");
}

#[tokio::test]
async fn test_fetch_index_reports_status() {
    let source = MockSource::new().with_status("search-index.json", 500);
    let err = fetch_index(&source, "search-index.json").await.unwrap_err();
    assert!(matches!(err, ArtifactError::Status { status: 500, .. }));
}
