// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report aggregation over a user's log series.
//!
//! The series is never reordered or mutated. Callers state how it is ordered
//! with [`SeriesOrder`]; the week-over-week comparison always reads the
//! series newest-first.

use crate::models::{CategoryShare, DashboardSummary, DayTotal, LogEntry, LogStats, WeeklyTrend};
use crate::services::score::eco_score;

/// Number of entries in one positional "week" window.
pub const WEEK_WINDOW: usize = 7;

/// Chronological ordering of a log series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOrder {
    /// Oldest entry first (Log Store order).
    OldestFirst,
    /// Newest entry first (report view order).
    NewestFirst,
}

/// Compute summary statistics for a series.
///
/// Highest and lowest days tie-break on the first entry encountered in the
/// slice as given.
pub fn summarize(series: &[LogEntry], order: SeriesOrder) -> LogStats {
    let count = series.len();
    let total_emissions: f64 = series.iter().map(|e| e.total_kg).sum();
    let average_emissions = if count > 0 {
        total_emissions / count as f64
    } else {
        0.0
    };

    let latest = match order {
        SeriesOrder::OldestFirst => series.last(),
        SeriesOrder::NewestFirst => series.first(),
    }
    .cloned();

    // Only a strictly greater total displaces the zero sentinel.
    let highest_day = series
        .iter()
        .fold(None, |max: Option<&LogEntry>, entry| {
            if entry.total_kg > max.map_or(0.0, |m| m.total_kg) {
                Some(entry)
            } else {
                max
            }
        })
        .cloned();

    let lowest_day = series
        .iter()
        .fold(None, |min: Option<&LogEntry>, entry| match min {
            // NaN totals never become the minimum
            _ if entry.total_kg.is_nan() => min,
            Some(current) if entry.total_kg >= current.total_kg => min,
            _ => Some(entry),
        })
        .cloned();

    LogStats {
        count,
        latest,
        total_emissions,
        average_emissions,
        highest_day,
        lowest_day,
        weekly_trend: weekly_trend(series, order),
    }
}

/// Compare the mean of the newest 7 entries against the 7 before them.
///
/// Windows are positional, not calendar weeks. The change is 0 when the
/// previous window has no positive average.
pub fn weekly_trend(series: &[LogEntry], order: SeriesOrder) -> WeeklyTrend {
    let newest_first: Vec<f64> = match order {
        SeriesOrder::NewestFirst => series.iter().map(|e| e.total_kg).collect(),
        SeriesOrder::OldestFirst => series.iter().rev().map(|e| e.total_kg).collect(),
    };

    let last_week = window(&newest_first, 0);
    let previous_week = window(&newest_first, WEEK_WINDOW);

    let last_week_avg = mean(last_week);
    let previous_week_avg = mean(previous_week);

    // A zero or negative baseline has no meaningful percentage.
    let weekly_change_pct = if previous_week_avg > 0.0 {
        (last_week_avg - previous_week_avg) / previous_week_avg * 100.0
    } else {
        0.0
    };

    WeeklyTrend {
        last_week_avg,
        previous_week_avg,
        weekly_change_pct,
    }
}

/// Build the dashboard overview from a series in Log Store order.
pub fn dashboard(series: &[LogEntry]) -> DashboardSummary {
    let latest = series.last();
    let latest_breakdown = latest.map(LogEntry::breakdown);

    let categories: Vec<CategoryShare> = latest_breakdown
        .map(|b| {
            [
                ("Travel", b.travel_kg),
                ("Electricity", b.electricity_kg),
                ("Food", b.food_kg),
            ]
            .into_iter()
            .filter(|(_, value)| *value > 0.0)
            .map(|(name, value)| CategoryShare {
                name: name.to_string(),
                value,
            })
            .collect()
        })
        .unwrap_or_default();

    let totals: Vec<f64> = series.iter().map(|e| e.total_kg).collect();

    DashboardSummary {
        eco_score: latest.map(|e| eco_score(e.total_kg)).unwrap_or(0),
        latest_total_kg: latest.map(|e| e.total_kg).unwrap_or(0.0),
        latest_breakdown,
        categories,
        average_kg: mean(&totals),
        total_logs: series.len(),
        timeline: series.iter().map(DayTotal::from).collect(),
    }
}

fn window(values: &[f64], start: usize) -> &[f64] {
    let start = start.min(values.len());
    let end = start.saturating_add(WEEK_WINDOW).min(values.len());
    &values[start..end]
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
