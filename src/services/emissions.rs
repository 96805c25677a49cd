// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily emission calculation.
//!
//! Inputs are not range-checked here: negative or non-finite quantities flow
//! through the arithmetic unchanged. Request validation happens at the HTTP
//! boundary.

use crate::models::{ActivityInput, EmissionBreakdown};
use crate::services::factors::{food_kg_per_day, travel_kg_per_km, ELECTRICITY_KG_PER_KWH};

/// Fractional digits needed to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round to 2 decimal places, half away from zero.
///
/// Rounding is decided on the exact stored value, so `0.105` (stored as
/// `0.10499999...`) rounds to `0.1`. Non-finite values pass through.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole.bytes().chain(fraction.bytes().take(2)).collect();
    if fraction.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        increment(&mut digits);
    }

    let (whole, cents) = digits.split_at(digits.len() - 2);
    let text: String = whole
        .iter()
        .map(|&d| char::from(d))
        .chain(std::iter::once('.'))
        .chain(cents.iter().map(|&d| char::from(d)))
        .collect();

    text.parse::<f64>()
        .map_or(value, |rounded| rounded.copysign(value))
}

/// Add one to a string of ASCII decimal digits.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Compute the emission breakdown for one day of activity.
pub fn compute_breakdown(input: &ActivityInput) -> EmissionBreakdown {
    let travel_kg = input.travel_km * travel_kg_per_km(input.travel_mode);
    let electricity_kg = input.electricity_kwh * ELECTRICITY_KG_PER_KWH;
    let food_kg = food_kg_per_day(input.diet);

    // Total is rounded from the raw sum, not from the rounded parts.
    EmissionBreakdown {
        travel_kg: round2(travel_kg),
        electricity_kg: round2(electricity_kg),
        food_kg: round2(food_kg),
        total_kg: round2(travel_kg + electricity_kg + food_kg),
    }
}
