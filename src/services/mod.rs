// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.
//!
//! Everything except [`ActivityProcessor`] is a pure function over its
//! inputs and holds no state between calls.

pub mod activity;
pub mod emissions;
pub mod factors;
pub mod ranking;
pub mod report;
pub mod score;
pub mod tips;

pub use activity::{compute, ActivityProcessor, ComputeResult};
pub use emissions::{compute_breakdown, round2};
pub use ranking::{sort_logs, SortDirection, SortKey, SortState};
pub use report::{dashboard, summarize, weekly_trend, SeriesOrder};
pub use score::eco_score;
pub use tips::advise;
