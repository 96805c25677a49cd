// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sorting of log series for tabular display.

use crate::models::LogEntry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Column a log table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum SortKey {
    #[default]
    Date,
    TravelKg,
    ElectricityKg,
    FoodKg,
    TotalKg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current sort column and direction of a table view.
///
/// Selecting the current column flips its direction; selecting another
/// column starts it descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn select(self, key: SortKey) -> Self {
        if key == self.key {
            Self {
                key,
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Desc,
            }
        }
    }
}

/// Return a sorted copy of `series`. Equal entries keep their input order.
pub fn sort_logs(series: &[LogEntry], key: SortKey, direction: SortDirection) -> Vec<LogEntry> {
    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare(a: &LogEntry, b: &LogEntry, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::TravelKg => a.travel_kg.total_cmp(&b.travel_kg),
        SortKey::ElectricityKg => a.electricity_kg.total_cmp(&b.electricity_kg),
        SortKey::FoodKg => a.food_kg.total_cmp(&b.food_kg),
        SortKey::TotalKg => a.total_kg.total_cmp(&b.total_kg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(month: u32, day: u32, travel_kg: f64, food_kg: f64) -> LogEntry {
        LogEntry {
            date: NaiveDate::from_ymd_opt(2024, month, day).unwrap(),
            travel_kg,
            electricity_kg: 0.0,
            food_kg,
            total_kg: travel_kg + food_kg,
        }
    }

    fn dates(series: &[LogEntry]) -> Vec<String> {
        series.iter().map(|e| e.date.to_string()).collect()
    }

    #[test]
    fn test_date_sort_is_calendar_order() {
        let logs = vec![entry(10, 1, 0.0, 1.5), entry(2, 15, 0.0, 1.5), entry(9, 30, 0.0, 1.5)];

        let asc = sort_logs(&logs, SortKey::Date, SortDirection::Asc);
        assert_eq!(dates(&asc), vec!["2024-02-15", "2024-09-30", "2024-10-01"]);

        let desc = sort_logs(&logs, SortKey::Date, SortDirection::Desc);
        assert_eq!(dates(&desc), vec!["2024-10-01", "2024-09-30", "2024-02-15"]);
    }

    #[test]
    fn test_numeric_sort() {
        let logs = vec![entry(1, 1, 2.1, 1.5), entry(1, 2, 10.5, 1.5), entry(1, 3, 0.5, 1.5)];

        let asc = sort_logs(&logs, SortKey::TravelKg, SortDirection::Asc);
        let travel: Vec<f64> = asc.iter().map(|e| e.travel_kg).collect();
        assert_eq!(travel, vec![0.5, 2.1, 10.5]);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let logs = vec![entry(1, 1, 0.0, 3.0), entry(1, 2, 0.0, 5.0), entry(1, 3, 0.0, 3.0)];

        let asc = sort_logs(&logs, SortKey::FoodKg, SortDirection::Asc);
        assert_eq!(dates(&asc), vec!["2024-01-01", "2024-01-03", "2024-01-02"]);

        let desc = sort_logs(&logs, SortKey::FoodKg, SortDirection::Desc);
        assert_eq!(dates(&desc), vec!["2024-01-02", "2024-01-01", "2024-01-03"]);
    }

    #[test]
    fn test_input_not_mutated_and_resort_idempotent() {
        let logs = vec![entry(3, 1, 4.0, 2.0), entry(1, 1, 1.0, 2.0), entry(2, 1, 9.0, 2.0)];
        let original = logs.clone();

        let once = sort_logs(&logs, SortKey::TotalKg, SortDirection::Desc);
        let twice = sort_logs(&once, SortKey::TotalKg, SortDirection::Desc);

        assert_eq!(logs, original);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_output_independent_of_input_permutation() {
        let a = entry(1, 1, 1.0, 2.0);
        let b = entry(1, 2, 5.0, 2.0);
        let c = entry(1, 3, 3.0, 2.0);

        let first = sort_logs(
            &[a.clone(), b.clone(), c.clone()],
            SortKey::TotalKg,
            SortDirection::Asc,
        );
        let second = sort_logs(&[c, a, b], SortKey::TotalKg, SortDirection::Asc);

        assert_eq!(first, second);
    }

    #[test]
    fn test_permuted_ties_keep_their_input_order() {
        // a and c tie on total 4.0, b and d tie on total 7.0
        let a = entry(1, 1, 1.0, 3.0);
        let b = entry(1, 2, 5.0, 2.0);
        let c = entry(1, 3, 2.0, 2.0);
        let d = entry(1, 4, 4.0, 3.0);

        let forward = [a.clone(), b.clone(), c.clone(), d.clone()];
        let permuted = [d, c, b, a];

        let asc = sort_logs(&forward, SortKey::TotalKg, SortDirection::Asc);
        assert_eq!(dates(&asc), vec!["2024-01-01", "2024-01-03", "2024-01-02", "2024-01-04"]);

        let asc = sort_logs(&permuted, SortKey::TotalKg, SortDirection::Asc);
        assert_eq!(dates(&asc), vec!["2024-01-03", "2024-01-01", "2024-01-04", "2024-01-02"]);

        let desc = sort_logs(&permuted, SortKey::TotalKg, SortDirection::Desc);
        assert_eq!(dates(&desc), vec!["2024-01-04", "2024-01-02", "2024-01-03", "2024-01-01"]);
    }

    #[test]
    fn test_empty_series() {
        assert!(sort_logs(&[], SortKey::Date, SortDirection::Asc).is_empty());
    }

    #[test]
    fn test_select_toggles_same_key() {
        let state = SortState::default();
        assert_eq!(state.key, SortKey::Date);
        assert_eq!(state.direction, SortDirection::Desc);

        let toggled = state.select(SortKey::Date);
        assert_eq!(toggled.direction, SortDirection::Asc);
        assert_eq!(toggled.select(SortKey::Date).direction, SortDirection::Desc);
    }

    #[test]
    fn test_select_new_key_starts_descending() {
        let state = SortState {
            key: SortKey::Date,
            direction: SortDirection::Asc,
        };

        let next = state.select(SortKey::TotalKg);
        assert_eq!(next.key, SortKey::TotalKg);
        assert_eq!(next.direction, SortDirection::Desc);
    }

    #[test]
    fn test_sort_key_query_values() {
        let key: SortKey = serde_json::from_str("\"electricityKg\"").unwrap();
        assert_eq!(key, SortKey::ElectricityKg);

        let direction: SortDirection = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(direction, SortDirection::Asc);
    }
}
