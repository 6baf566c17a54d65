// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers and their order.
//!
//! Scores come from cosine similarity alone, bounded to `[0, 1]`. Ranking is a
//! stable descending sort, so equal scores fall back to discovery order.

mod core;
pub mod ranking;

pub use core::*;
pub use ranking::{compare_scores, rank};
