//! Preloaded demo account data, used by the "Try Demo" flow so the
//! dashboard can be shown without entering real activity.

use crate::engine::models::{ActivityInput, DietType, FuelType, ShoppingHabit};

/// A plausible suburban-commuter week.
pub fn demo_inputs() -> ActivityInput {
    ActivityInput {
        car_miles: 100.0,
        fuel_type: FuelType::Gasoline,
        electricity_kwh: 90.0,
        gas_therms: 3.0,
        short_flights: 0,
        long_flights: 0,
        diet_type: DietType::MediumMeat,
        shopping_habit: ShoppingHabit::Average,
        streaming_hours: 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::estimator::estimate;
    use crate::engine::factors::EmissionFactors;

    #[test]
    fn test_demo_inputs_reproduce_documented_categories() {
        let breakdown = estimate(&demo_inputs(), &EmissionFactors::default());
        assert_eq!(breakdown.transport_kg, 40.4);
        assert_eq!(breakdown.energy_kg, 50.67);
        assert_eq!(breakdown.diet_kg, 39.41);
        assert_eq!(breakdown.lifestyle_kg, 8.86);
    }
}
