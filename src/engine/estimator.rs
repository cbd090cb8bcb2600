//! Offline footprint estimation.
//!
//! Pure and total: any input, including all-zero or hand-built ones,
//! produces a valid breakdown. Negative quantities are treated as 0.

use super::models::{ActivityInput, EmissionsBreakdown, Source};
use super::{non_neg, round2};
use crate::engine::factors::EmissionFactors;

/// Estimate one week of emissions from reported activity.
///
/// Category values and the total are rounded to 2 decimals;
/// intermediate sums keep full precision so rounding never compounds.
pub fn estimate(input: &ActivityInput, factors: &EmissionFactors) -> EmissionsBreakdown {
    let transport_kg = non_neg(input.car_miles) * factors.car_kg_per_mile.for_fuel(input.fuel_type);
    let energy_kg = non_neg(input.electricity_kwh) * factors.electricity_kg_per_kwh
        + non_neg(input.gas_therms) * factors.natural_gas_kg_per_therm;
    let flight_kg = f64::from(input.short_flights) * factors.short_haul_kg_per_flight
        + f64::from(input.long_flights) * factors.long_haul_kg_per_flight;
    // Diet factors are per day; the reporting period is one week.
    let diet_kg = factors.diet_kg_per_day.for_diet(input.diet_type) * 7.0;
    let lifestyle_kg = factors.shopping_kg_per_week.for_habit(input.shopping_habit)
        + non_neg(input.streaming_hours) * factors.streaming_kg_per_hour;

    let total_kg = round2(transport_kg + energy_kg + flight_kg + diet_kg + lifestyle_kg);
    let trees_equivalent = (total_kg / factors.tree_absorption_kg_per_week).round() as i64;

    EmissionsBreakdown {
        transport_kg: round2(transport_kg),
        energy_kg: round2(energy_kg),
        flight_kg: round2(flight_kg),
        diet_kg: round2(diet_kg),
        lifestyle_kg: round2(lifestyle_kg),
        total_kg,
        trees_equivalent,
        source: Source::Offline,
    }
}
