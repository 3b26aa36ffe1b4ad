//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides in-memory stand-ins for every adapter seam so the core can be
//! exercised without a browser.

#![doc(hidden)]

use crate::error::ArtifactError;
use crate::loader::ArtifactSource;
use crate::preview::placement::{Position, Size, Viewport};
use crate::preview::{PopoverId, PopoverSurface};
use crate::random::Navigation;
use crate::render::ResultsView;
use crate::search::ResultsSink;
use crate::types::ArticleRecord;
use futures::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Create a test article with a filename derived from the title.
pub fn make_article(title: &str) -> ArticleRecord {
    let filename = format!("{}.html", title.to_lowercase().replace(' ', "_"));
    ArticleRecord::new(filename, title)
}

/// Serialize articles the way the site build writes the index artifact.
pub fn index_json(articles: &[ArticleRecord]) -> String {
    serde_json::to_string(articles).unwrap_or_else(|_| "[]".to_string())
}

// =============================================================================
// ARTIFACT SOURCE
// =============================================================================

#[derive(Clone)]
enum MockResponse {
    Body(String),
    Status(u16),
    Network(String),
}

/// In-memory artifact host.
///
/// Responses are captured when a fetch starts; delays (global or per path) run
/// on the tokio clock so paused-time tests stay deterministic. Unknown paths
/// answer 404.
#[derive(Default)]
pub struct MockSource {
    responses: Mutex<HashMap<String, MockResponse>>,
    delays: HashMap<String, Duration>,
    delay: Option<Duration>,
    fetches: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, path: &str, body: &str) -> Self {
        self.set(path, body);
        self
    }

    pub fn with_status(self, path: &str, status: u16) -> Self {
        self.responses
            .lock()
            .insert(path.to_string(), MockResponse::Status(status));
        self
    }

    pub fn with_network_error(self, path: &str) -> Self {
        self.responses.lock().insert(
            path.to_string(),
            MockResponse::Network("connection refused".to_string()),
        );
        self
    }

    /// Delay every response.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Delay responses for one path.
    pub fn with_delay_for(mut self, path: &str, delay: Duration) -> Self {
        self.delays.insert(path.to_string(), delay);
        self
    }

    /// Replace the body served for `path`.
    pub fn set(&self, path: &str, body: &str) {
        self.responses
            .lock()
            .insert(path.to_string(), MockResponse::Body(body.to_string()));
    }

    pub fn fetch_count(&self, path: &str) -> usize {
        self.fetches.lock().iter().filter(|p| *p == path).count()
    }

    /// Every path fetched, in order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetches.lock().clone()
    }
}

impl ArtifactSource for MockSource {
    fn fetch<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<String, ArtifactError>> {
        self.fetches.lock().push(path.to_string());
        let response = self.responses.lock().get(path).cloned();
        let delay = self.delays.get(path).copied().or(self.delay);

        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            match response {
                Some(MockResponse::Body(body)) => Ok(body),
                Some(MockResponse::Status(status)) => Err(ArtifactError::status(path, status)),
                Some(MockResponse::Network(reason)) => Err(ArtifactError::network(path, reason)),
                None => Err(ArtifactError::status(path, 404)),
            }
        }
        .boxed()
    }
}

// =============================================================================
// POPOVER SURFACE
// =============================================================================

#[derive(Default)]
struct SurfaceLog {
    next_id: u64,
    attached: Vec<(PopoverId, String)>,
    placements: Vec<(PopoverId, Position)>,
    attach_count: usize,
    max_attached: usize,
}

/// Records every popover operation and tracks how many popovers were ever
/// attached at once.
pub struct RecordingSurface {
    log: Mutex<SurfaceLog>,
    viewport: Viewport,
    popover_size: Size,
    pointer_over: AtomicBool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(Viewport::new(1280.0, 800.0), Size::new(400.0, 240.0))
    }
}

impl RecordingSurface {
    pub fn new(viewport: Viewport, popover_size: Size) -> Self {
        Self {
            log: Mutex::new(SurfaceLog::default()),
            viewport,
            popover_size,
            pointer_over: AtomicBool::new(false),
        }
    }

    /// Markup of every popover currently attached.
    pub fn attached(&self) -> Vec<String> {
        self.log.lock().attached.iter().map(|(_, m)| m.clone()).collect()
    }

    pub fn attached_count(&self) -> usize {
        self.log.lock().attached.len()
    }

    /// Most popovers ever attached simultaneously.
    pub fn max_attached(&self) -> usize {
        self.log.lock().max_attached
    }

    /// Popovers attached over the surface's lifetime.
    pub fn attach_count(&self) -> usize {
        self.log.lock().attach_count
    }

    pub fn last_position(&self) -> Option<Position> {
        self.log.lock().placements.last().map(|(_, p)| *p)
    }

    pub fn set_pointer_over(&self, over: bool) {
        self.pointer_over.store(over, Ordering::SeqCst);
    }
}

impl PopoverSurface for RecordingSurface {
    fn attach(&self, markup: &str) -> PopoverId {
        let mut log = self.log.lock();
        log.next_id += 1;
        let id = PopoverId(log.next_id);
        log.attached.push((id, markup.to_string()));
        log.attach_count += 1;
        log.max_attached = log.max_attached.max(log.attached.len());
        id
    }

    fn measure(&self, _popover: PopoverId) -> Size {
        self.popover_size
    }

    fn place(&self, popover: PopoverId, position: Position) {
        self.log.lock().placements.push((popover, position));
    }

    fn detach(&self, popover: PopoverId) {
        self.log.lock().attached.retain(|(id, _)| *id != popover);
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn pointer_over(&self, _popover: PopoverId) -> bool {
        self.pointer_over.load(Ordering::SeqCst)
    }
}

// =============================================================================
// NAVIGATION & RESULTS
// =============================================================================

/// Remembers where it was sent and what it was told.
#[derive(Default)]
pub struct RecordingNavigation {
    visits: Mutex<Vec<String>>,
    notices: Mutex<Vec<String>>,
}

impl RecordingNavigation {
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().clone()
    }
}

impl Navigation for RecordingNavigation {
    fn navigate(&self, url: &str) {
        self.visits.lock().push(url.to_string());
    }

    fn notify_unavailable(&self, message: &str) {
        self.notices.lock().push(message.to_string());
    }
}

/// Keeps every published results view.
#[derive(Default)]
pub struct CollectingSink {
    views: Mutex<Vec<ResultsView>>,
}

impl CollectingSink {
    pub fn views(&self) -> Vec<ResultsView> {
        self.views.lock().clone()
    }

    pub fn last(&self) -> Option<ResultsView> {
        self.views.lock().last().cloned()
    }
}

impl ResultsSink for CollectingSink {
    fn publish(&self, view: ResultsView) {
        self.views.lock().push(view);
    }
}
