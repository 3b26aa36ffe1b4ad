// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hover previews of linked pages.
//!
//! Resting the pointer on a page link for a moment fetches that page's
//! pre-rendered fragment and shows it in a popover beside the link.
//!
//! # State machine
//!
//! ```text
//!          hover_enter              timer + fetch ok
//!   Idle ──────────────▶ Pending ───────────────────▶ Shown
//!    ▲                      │                          │
//!    │   leave / escape /   │   leave_popover / escape │
//!    └──── fetch failed ────┴──── grace timer ─────────┘
//! ```
//!
//! # Invariants
//!
//! - At most one popover is attached to the surface at any time. Showing a new
//!   one detaches the old one first, under the same lock.
//! - At most one timer (show or hide) is pending; see [`TimerSlot`].
//! - A fragment that arrives after its hover was abandoned is dropped, never
//!   attached. Every transition bumps a generation number and the fetch result
//!   is only used if its generation is still current.

pub mod placement;

use crate::config::{strip_query, ArtifactPaths, PlacementRules, Timing};
use crate::loader::ArtifactSource;
use crate::timer::TimerSlot;
use parking_lot::Mutex;
use placement::{place, Position, Rect, Size, Viewport};
use std::sync::Arc;
use tracing::{debug, warn};

/// Handle for a popover the surface attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PopoverId(pub u64);

/// The page the previews are drawn on. Implemented by the DOM adapter.
pub trait PopoverSurface: Send + Sync {
    /// Create a popover holding `markup` and attach it to the page.
    fn attach(&self, markup: &str) -> PopoverId;
    /// Rendered size of an attached popover.
    fn measure(&self, popover: PopoverId) -> Size;
    fn place(&self, popover: PopoverId, position: Position);
    fn detach(&self, popover: PopoverId);
    fn viewport(&self) -> Viewport;
    /// Is the pointer currently over this popover?
    fn pointer_over(&self, popover: PopoverId) -> bool;
}

/// A link the pointer entered.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewLink {
    pub href: String,
    /// The link's box, in viewport coordinates.
    pub anchor: Rect,
    /// Links inside a popover never spawn previews of their own.
    pub inside_popover: bool,
}

impl PreviewLink {
    pub fn new(href: impl Into<String>, anchor: Rect) -> Self {
        Self {
            href: href.into(),
            anchor,
            inside_popover: false,
        }
    }

    pub fn in_popover(mut self) -> Self {
        self.inside_popover = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewPhase {
    Idle,
    Pending,
    Shown,
}

/// Page filename to preview for `href`, if it links to a page document.
pub fn preview_target<'a>(href: &'a str, page_suffix: &str) -> Option<&'a str> {
    let path = strip_query(href);
    if !path.ends_with(page_suffix) {
        return None;
    }
    path.rsplit('/').next().filter(|name| name.len() > page_suffix.len())
}

struct PendingShow {
    generation: u64,
    link: PreviewLink,
    fragment: String,
}

struct ActivePopover {
    popover: PopoverId,
    href: String,
}

#[derive(Default)]
struct PreviewState {
    generation: u64,
    pending: Option<PendingShow>,
    active: Option<ActivePopover>,
}

struct Inner {
    source: Arc<dyn ArtifactSource>,
    surface: Arc<dyn PopoverSurface>,
    paths: ArtifactPaths,
    timing: Timing,
    rules: PlacementRules,
    state: Mutex<PreviewState>,
    timer: TimerSlot,
}

/// Owns the single popover slot and the single preview timer.
#[derive(Clone)]
pub struct PreviewController {
    inner: Arc<Inner>,
}

impl PreviewController {
    pub fn new(
        source: Arc<dyn ArtifactSource>,
        surface: Arc<dyn PopoverSurface>,
        paths: ArtifactPaths,
        timing: Timing,
        rules: PlacementRules,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                surface,
                paths,
                timing,
                rules,
                state: Mutex::new(PreviewState::default()),
                timer: TimerSlot::new(),
            }),
        }
    }

    pub fn phase(&self) -> PreviewPhase {
        let state = self.inner.state.lock();
        if state.pending.is_some() {
            PreviewPhase::Pending
        } else if state.active.is_some() {
            PreviewPhase::Shown
        } else {
            PreviewPhase::Idle
        }
    }

    /// Link whose preview is showing.
    pub fn shown_href(&self) -> Option<String> {
        let state = self.inner.state.lock();
        state.active.as_ref().map(|active| active.href.clone())
    }

    /// Does hovering `link` start a preview?
    pub fn qualifies(&self, link: &PreviewLink) -> bool {
        !link.inside_popover && preview_target(&link.href, &self.inner.paths.page_suffix).is_some()
    }

    /// Pointer entered a link: arm the hover-intent timer.
    ///
    /// Returns false for links that never preview. Re-entering the link whose
    /// preview is already showing only cancels its pending hide.
    pub fn hover_enter(&self, link: PreviewLink) -> bool {
        if link.inside_popover {
            return false;
        }
        let Some(target) = preview_target(&link.href, &self.inner.paths.page_suffix) else {
            return false;
        };
        let fragment = self.inner.paths.fragment(target);

        let generation = {
            let mut state = self.inner.state.lock();
            if state.active.as_ref().is_some_and(|a| a.href == link.href) {
                state.generation += 1;
                state.pending = None;
                self.inner.timer.cancel();
                return true;
            }
            state.generation += 1;
            let generation = state.generation;
            debug!(href = %link.href, generation, "preview pending");
            state.pending = Some(PendingShow {
                generation,
                link,
                fragment,
            });
            generation
        };

        let this = self.clone();
        self.inner
            .timer
            .arm(self.inner.timing.hover_delay(), move || async move {
                this.fire(generation).await;
            });
        true
    }

    /// Fetch and show the pending preview, if `generation` is still pending.
    ///
    /// Normally driven by the hover timer. Returns whether a popover was shown.
    pub async fn fire(&self, generation: u64) -> bool {
        let fragment = {
            let state = self.inner.state.lock();
            match &state.pending {
                Some(pending) if pending.generation == generation => pending.fragment.clone(),
                _ => return false,
            }
        };

        let markup = match self.inner.source.fetch(&fragment).await {
            Ok(markup) => markup,
            Err(err) => {
                warn!(path = %fragment, error = %err, "preview fragment unavailable");
                let mut state = self.inner.state.lock();
                if state.pending.as_ref().is_some_and(|p| p.generation == generation) {
                    state.pending = None;
                }
                return false;
            }
        };

        let mut state = self.inner.state.lock();
        let pending = match state.pending.take() {
            Some(pending) if pending.generation == generation => pending,
            other => {
                state.pending = other;
                debug!(path = %fragment, "discarding stale preview fragment");
                return false;
            }
        };

        let surface = &self.inner.surface;
        if let Some(previous) = state.active.take() {
            surface.detach(previous.popover);
        }
        let popover = surface.attach(&markup);
        let position = place(
            pending.link.anchor,
            surface.measure(popover),
            surface.viewport(),
            &self.inner.rules,
        );
        surface.place(popover, position);
        debug!(href = %pending.link.href, ?position, "preview shown");
        state.active = Some(ActivePopover {
            popover,
            href: pending.link.href,
        });
        true
    }

    /// Pointer left the link.
    ///
    /// A preview still waiting on its timer is abandoned. A shown preview gets
    /// a short grace period so the pointer can travel into it.
    pub fn leave_link(&self) {
        let popover = {
            let mut state = self.inner.state.lock();
            if state.pending.take().is_some() {
                state.generation += 1;
                self.inner.timer.cancel();
                debug!("preview abandoned before showing");
            }
            match &state.active {
                Some(active) => active.popover,
                None => return,
            }
        };

        let this = self.clone();
        self.inner
            .timer
            .arm(self.inner.timing.hide_grace(), move || async move {
                this.hide_unless_hovered(popover);
            });
    }

    /// Pointer entered the popover: keep it.
    pub fn enter_popover(&self) {
        self.inner.timer.cancel();
    }

    /// Pointer left the popover.
    pub fn leave_popover(&self) {
        self.hide();
    }

    /// Escape pressed.
    pub fn escape(&self) {
        self.hide();
    }

    /// Back to idle: cancel the timer, drop any pending show, detach any popover.
    ///
    /// Returns whether a popover was removed.
    pub fn hide(&self) -> bool {
        self.inner.timer.cancel();
        let mut state = self.inner.state.lock();
        state.generation += 1;
        state.pending = None;
        match state.active.take() {
            Some(active) => {
                self.inner.surface.detach(active.popover);
                debug!(href = %active.href, "preview hidden");
                true
            }
            None => false,
        }
    }

    fn hide_unless_hovered(&self, popover: PopoverId) {
        let still_shown = {
            let state = self.inner.state.lock();
            state.active.as_ref().is_some_and(|a| a.popover == popover)
        };
        if still_shown && !self.inner.surface.pointer_over(popover) {
            self.hide();
        }
    }
}
