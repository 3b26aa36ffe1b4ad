// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where a popover goes relative to the link that spawned it.
//!
//! All inputs are in viewport coordinates; the returned position is in
//! document coordinates (viewport plus scroll). Placement happens once, when
//! the popover is shown.

use crate::config::PlacementRules;
use serde::{Deserialize, Serialize};

/// A box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Visible area and how far the document is scrolled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    pub fn scrolled(mut self, scroll_x: f64, scroll_y: f64) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }
}

/// Top-left corner of a placed popover, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

/// Place a popover of `popover` size next to `anchor`.
///
/// Below-left of the link by default. Shifted left if it would run past the
/// right edge (keeping `edge_margin` free), flipped above the link if it would
/// run past the bottom, and never closer than `min_offset` to the top or left.
pub fn place(anchor: Rect, popover: Size, viewport: Viewport, rules: &PlacementRules) -> Position {
    let mut left = anchor.left;
    let mut top = anchor.bottom() + rules.gap;

    if left + popover.width > viewport.width - rules.edge_margin {
        left = viewport.width - popover.width - rules.edge_margin;
    }
    if top + popover.height > viewport.height {
        top = anchor.top - popover.height - rules.gap;
    }

    Position {
        left: left.max(rules.min_offset) + viewport.scroll_x,
        top: top.max(rules.min_offset) + viewport.scroll_y,
    }
}
