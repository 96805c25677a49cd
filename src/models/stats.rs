//! Report and dashboard statistics derived from a user's log series.
//!
//! These are computed fresh on every request from the full series; nothing
//! here is cached or stored.

use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{EmissionBreakdown, LogEntry};

/// Placeholder reported for the lowest day when there is no data.
pub const NO_DATA: &str = "N/A";

/// Summary statistics over a log series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LogStats {
    // ─── Totals ──────────────────────────────────────────────────
    /// Number of entries in the series
    pub count: usize,
    /// Most recent entry, if any
    pub latest: Option<LogEntry>,
    /// Sum of `total_kg` over all entries
    pub total_emissions: f64,
    /// Mean `total_kg` (0 when empty)
    pub average_emissions: f64,

    // ─── Extremes ────────────────────────────────────────────────
    /// Entry with the highest positive total (`{totalKg: 0}` when none)
    #[serde(serialize_with = "serialize_highest_day")]
    #[cfg_attr(
        feature = "binding-generation",
        ts(type = "LogEntry | { totalKg: number }")
    )]
    pub highest_day: Option<LogEntry>,
    /// Entry with the lowest total (`"N/A"` when empty)
    #[serde(serialize_with = "serialize_lowest_day")]
    #[cfg_attr(feature = "binding-generation", ts(type = "LogEntry | \"N/A\""))]
    pub lowest_day: Option<LogEntry>,

    // ─── Trend ───────────────────────────────────────────────────
    pub weekly_trend: WeeklyTrend,
}

/// A day's total emissions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DayTotal {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    pub total_kg: f64,
}

impl From<&LogEntry> for DayTotal {
    fn from(entry: &LogEntry) -> Self {
        Self {
            date: entry.date,
            total_kg: entry.total_kg,
        }
    }
}

/// Week-over-week comparison over positional 7-entry windows.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeeklyTrend {
    pub last_week_avg: f64,
    pub previous_week_avg: f64,
    /// Percentage change from the previous week (0 when there is no baseline)
    pub weekly_change_pct: f64,
}

/// Dashboard overview for a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DashboardSummary {
    /// Eco score of the latest entry (0 when there are no logs)
    pub eco_score: u8,
    /// Total of the latest entry (0 when there are no logs)
    pub latest_total_kg: f64,
    /// Latest breakdown, if any
    pub latest_breakdown: Option<EmissionBreakdown>,
    /// Non-zero categories of the latest breakdown
    pub categories: Vec<CategoryShare>,
    /// Mean `total_kg` over all logs
    pub average_kg: f64,
    pub total_logs: usize,
    /// (date, total) points in series order
    pub timeline: Vec<DayTotal>,
}

/// One slice of the latest-day breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategoryShare {
    pub name: String,
    pub value: f64,
}

fn serialize_highest_day<S>(value: &Option<LogEntry>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(entry) => entry.serialize(serializer),
        None => {
            let mut sentinel = serializer.serialize_struct("HighestDay", 1)?;
            sentinel.serialize_field("totalKg", &0.0)?;
            sentinel.end()
        }
    }
}

fn serialize_lowest_day<S>(value: &Option<LogEntry>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(entry) => entry.serialize(serializer),
        None => serializer.serialize_str(NO_DATA),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_serialize() {
        let stats = LogStats {
            count: 0,
            latest: None,
            total_emissions: 0.0,
            average_emissions: 0.0,
            highest_day: None,
            lowest_day: None,
            weekly_trend: WeeklyTrend::default(),
        };

        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["highestDay"], serde_json::json!({ "totalKg": 0.0 }));
        assert_eq!(json["lowestDay"], "N/A");
        assert!(json["latest"].is_null());
    }

    #[test]
    fn test_extremes_serialize_as_full_entries() {
        let day = LogEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            travel_kg: 2.1,
            electricity_kg: 0.0,
            food_kg: 1.5,
            total_kg: 3.6,
        };
        let stats = LogStats {
            count: 1,
            latest: Some(day.clone()),
            total_emissions: 3.6,
            average_emissions: 3.6,
            highest_day: Some(day.clone()),
            lowest_day: Some(day),
            weekly_trend: WeeklyTrend::default(),
        };

        let json = serde_json::to_value(&stats).unwrap();

        let expected = serde_json::json!({
            "date": "2024-01-15",
            "travelKg": 2.1,
            "electricityKg": 0.0,
            "foodKg": 1.5,
            "totalKg": 3.6,
        });
        assert_eq!(json["highestDay"], expected);
        assert_eq!(json["lowestDay"], expected);
    }

    #[test]
    fn test_day_total_serializes() {
        let day = DayTotal {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            total_kg: 3.5,
        };

        let json = serde_json::to_value(day).unwrap();

        assert_eq!(json, serde_json::json!({ "date": "2024-01-15", "totalKg": 3.5 }));
    }
}
