// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod log;
pub mod stats;

pub use activity::{ActivityInput, Diet, TravelMode};
pub use log::{EmissionBreakdown, LogEntry};
pub use stats::{CategoryShare, DashboardSummary, DayTotal, LogStats, WeeklyTrend};
