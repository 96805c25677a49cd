// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Emission breakdown and persisted log entry models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Per-category emissions for one day, in kg CO₂e.
///
/// Each figure is rounded to 2 decimal places. `total_kg` is rounded from the
/// unrounded component sum, so it may differ from the sum of the rounded
/// components by up to 0.02.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EmissionBreakdown {
    pub travel_kg: f64,
    pub electricity_kg: f64,
    pub food_kg: f64,
    pub total_kg: f64,
}

/// Stored log record: the activity date plus its breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LogEntry {
    /// Calendar date (YYYY-MM-DD)
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    pub travel_kg: f64,
    pub electricity_kg: f64,
    pub food_kg: f64,
    pub total_kg: f64,
}

impl LogEntry {
    pub fn new(date: NaiveDate, breakdown: EmissionBreakdown) -> Self {
        Self {
            date,
            travel_kg: breakdown.travel_kg,
            electricity_kg: breakdown.electricity_kg,
            food_kg: breakdown.food_kg,
            total_kg: breakdown.total_kg,
        }
    }

    /// The emission figures of this entry.
    pub fn breakdown(&self) -> EmissionBreakdown {
        EmissionBreakdown {
            travel_kg: self.travel_kg,
            electricity_kg: self.electricity_kg,
            food_kg: self.food_kg,
            total_kg: self.total_kg,
        }
    }
}
