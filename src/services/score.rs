// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Eco score: a 0-100 rating of a day's total emissions.

/// Daily emissions (kg CO₂e) that score exactly 0.
pub const TARGET_KG_PER_DAY: f64 = 10.0;

/// Score a daily total. 0 kg scores 100; `TARGET_KG_PER_DAY` or more scores 0.
///
/// A NaN total scores 0.
pub fn eco_score(total_kg: f64) -> u8 {
    let raw = 100.0 - (total_kg / TARGET_KG_PER_DAY) * 100.0;
    // `as` saturates and maps NaN to 0
    raw.round().clamp(0.0, 100.0) as u8
}
