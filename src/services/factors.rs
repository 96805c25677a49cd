// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Emission factors (kg CO₂e per unit of activity).

use crate::models::{Diet, TravelMode};

/// kg CO₂e per kWh of electricity.
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.82;

/// kg CO₂e per km travelled. Unknown modes are charged as a car.
pub fn travel_kg_per_km(mode: TravelMode) -> f64 {
    match mode {
        TravelMode::Car | TravelMode::Unknown => 0.21,
        TravelMode::Bus => 0.10,
        TravelMode::Train => 0.05,
        TravelMode::Bike | TravelMode::Walk => 0.0,
    }
}

/// kg CO₂e per day of a diet. Unknown diets are charged as mixed.
pub fn food_kg_per_day(diet: Diet) -> f64 {
    match diet {
        Diet::Vegan => 1.5,
        Diet::Vegetarian => 2.0,
        Diet::Mixed | Diet::Unknown => 3.0,
        Diet::Nonveg => 5.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_values_use_defaults() {
        assert_eq!(
            travel_kg_per_km(TravelMode::Unknown),
            travel_kg_per_km(TravelMode::Car)
        );
        assert_eq!(food_kg_per_day(Diet::Unknown), food_kg_per_day(Diet::Mixed));
    }

    #[test]
    fn test_active_travel_is_free() {
        assert_eq!(travel_kg_per_km(TravelMode::Bike), 0.0);
        assert_eq!(travel_kg_per_km(TravelMode::Walk), 0.0);
    }
}
