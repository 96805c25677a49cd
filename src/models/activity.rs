// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Daily activity input submitted by a user.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// One day of lifestyle activity, as submitted for computation or logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityInput {
    /// Calendar date (YYYY-MM-DD)
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    /// Distance travelled in kilometres
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub travel_km: f64,
    /// How the distance was travelled
    #[serde(default)]
    pub travel_mode: TravelMode,
    /// Electricity used in kWh
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub electricity_kwh: f64,
    /// Diet followed for the day
    #[serde(default)]
    pub diet: Diet,
}

/// Mode of travel.
///
/// Any unrecognised string deserializes to `Unknown` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum TravelMode {
    #[default]
    Car,
    Bus,
    Train,
    Bike,
    Walk,
    Unknown,
}

impl From<String> for TravelMode {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&str> for TravelMode {
    fn from(value: &str) -> Self {
        match value {
            "car" => TravelMode::Car,
            "bus" => TravelMode::Bus,
            "train" => TravelMode::Train,
            "bike" => TravelMode::Bike,
            "walk" => TravelMode::Walk,
            _ => TravelMode::Unknown,
        }
    }
}

/// Diet category, each with a fixed daily food footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Diet {
    Vegan,
    Vegetarian,
    #[default]
    Mixed,
    Nonveg,
    Unknown,
}

impl From<String> for Diet {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&str> for Diet {
    fn from(value: &str) -> Self {
        match value {
            "vegan" => Diet::Vegan,
            "vegetarian" => Diet::Vegetarian,
            "mixed" => Diet::Mixed,
            "nonveg" => Diet::Nonveg,
            _ => Diet::Unknown,
        }
    }
}
