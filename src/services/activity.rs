// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity processing service.
//!
//! Handles the "log activity" workflow:
//! 1. Compute the emission breakdown
//! 2. Score the day and build advice
//! 3. Hand the resulting log entry to the log store

use crate::db::LogStore;
use crate::error::Result;
use crate::models::{ActivityInput, EmissionBreakdown, LogEntry};
use crate::services::{emissions, score, tips};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Computed figures for one day of activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ComputeResult {
    #[serde(flatten)]
    pub breakdown: EmissionBreakdown,
    pub eco_score: u8,
    pub tips: Vec<String>,
}

/// Compute breakdown, score and advice for a day without storing anything.
pub fn compute(input: &ActivityInput) -> ComputeResult {
    let breakdown = emissions::compute_breakdown(input);
    ComputeResult {
        breakdown,
        eco_score: score::eco_score(breakdown.total_kg),
        tips: tips::advise(input, &breakdown),
    }
}

/// Process activity submissions and record them in the log store.
#[derive(Clone)]
pub struct ActivityProcessor {
    store: LogStore,
}

impl ActivityProcessor {
    pub fn new(store: LogStore) -> Self {
        Self { store }
    }

    /// Compute a day's figures and append the entry to the user's series.
    pub async fn log_activity(
        &self,
        user_id: &str,
        input: &ActivityInput,
    ) -> Result<(LogEntry, ComputeResult)> {
        let result = compute(input);
        let entry = LogEntry::new(input.date, result.breakdown);

        tracing::info!(
            user_id,
            date = %input.date,
            total_kg = entry.total_kg,
            eco_score = result.eco_score,
            "Logging activity"
        );

        self.store.save_log(user_id, &entry).await?;

        Ok((entry, result))
    }
}
