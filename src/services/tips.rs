// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rule-based advice for reducing a day's emissions.

use crate::models::{ActivityInput, Diet, EmissionBreakdown, TravelMode};

pub const TIP_SHORT_TRIPS: &str = "Try walking or cycling for trips under 3 km when feasible.";
pub const TIP_SHARED_TRAVEL: &str =
    "Carpool or use public transport 2x/week to reduce travel emissions.";
pub const TIP_ELECTRICITY: &str =
    "Switch to LED lighting and unplug idle devices to cut energy use ~15%.";
pub const TIP_DIET: &str =
    "Swap one meat meal per day with plant-based options (~20% lower food emissions).";
pub const TIP_WEEKLY_GOAL: &str = "Set a weekly goal to reduce total emissions by 10%.";

/// Daily total (kg CO₂e) above which a reduction goal is suggested.
pub const HIGH_TOTAL_KG: f64 = 15.0;

/// Build the advice list for a day. Rules are independent and emitted in a
/// fixed order; the result may be empty.
pub fn advise(input: &ActivityInput, breakdown: &EmissionBreakdown) -> Vec<String> {
    let mut tips = Vec::new();

    if input.travel_mode == TravelMode::Car && input.travel_km > 0.0 {
        tips.push(TIP_SHORT_TRIPS.to_string());
        tips.push(TIP_SHARED_TRAVEL.to_string());
    }

    if input.electricity_kwh > 0.0 {
        tips.push(TIP_ELECTRICITY.to_string());
    }

    // Unknown diets are costed as mixed but get no diet advice.
    if matches!(input.diet, Diet::Nonveg | Diet::Mixed) {
        tips.push(TIP_DIET.to_string());
    }

    if breakdown.total_kg > HIGH_TOTAL_KG {
        tips.push(TIP_WEEKLY_GOAL.to_string());
    }

    tips
}
