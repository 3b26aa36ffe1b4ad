// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how an article earns its number for a query.
//!
//! The title tiers carry most of the weight: exact, then prefix, then
//! substring. Summary, keyword, type and category matches add smaller amounts,
//! and inbound links add a capped boost to articles that already matched.

mod core;

pub use core::*;
