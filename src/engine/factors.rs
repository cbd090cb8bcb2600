//! Emission factors and scoring benchmarks.
//!
//! Factors are EPA 2024 / DEFRA 2024 / IPCC AR6 figures, all in kg CO₂e.
//! They live in config structs rather than inline so a factor-table
//! update (or a test substitution) never touches engine logic.

use super::models::{DietType, FuelType, ShoppingHabit};

/// Per-mile car factors by fuel type.
#[derive(Debug, Clone, Copy)]
pub struct CarFactors {
    /// EPA average passenger vehicle
    pub gasoline: f64,
    /// Slightly lower CO₂ than gasoline, higher NOx
    pub diesel: f64,
    /// ~47% less than gasoline (EPA)
    pub hybrid: f64,
    /// US grid avg 0.386 kg/kWh × 0.3 kWh/mi (DOE)
    pub electric: f64,
}

impl CarFactors {
    pub fn for_fuel(&self, fuel: FuelType) -> f64 {
        match fuel {
            FuelType::Gasoline => self.gasoline,
            FuelType::Diesel => self.diesel,
            FuelType::Hybrid => self.hybrid,
            FuelType::Electric => self.electric,
        }
    }
}

/// Per-day diet factors (Scarborough et al. 2023).
#[derive(Debug, Clone, Copy)]
pub struct DietFactors {
    pub heavy_meat: f64,
    pub medium_meat: f64,
    pub vegetarian: f64,
    pub vegan: f64,
}

impl DietFactors {
    pub fn for_diet(&self, diet: DietType) -> f64 {
        match diet {
            DietType::HeavyMeat => self.heavy_meat,
            DietType::MediumMeat => self.medium_meat,
            DietType::Vegetarian => self.vegetarian,
            DietType::Vegan => self.vegan,
        }
    }
}

/// Flat weekly shopping baselines (clothes, goods, deliveries).
#[derive(Debug, Clone, Copy)]
pub struct ShoppingFactors {
    pub minimal: f64,
    pub average: f64,
    pub frequent: f64,
    pub heavy: f64,
}

impl ShoppingFactors {
    pub fn for_habit(&self, habit: ShoppingHabit) -> f64 {
        match habit {
            ShoppingHabit::Minimal => self.minimal,
            ShoppingHabit::Average => self.average,
            ShoppingHabit::Frequent => self.frequent,
            ShoppingHabit::Heavy => self.heavy,
        }
    }
}

/// The full emission-factor table used by the estimator.
#[derive(Debug, Clone, Copy)]
pub struct EmissionFactors {
    pub car_kg_per_mile: CarFactors,
    /// EPA eGRID US national average 2024
    pub electricity_kg_per_kwh: f64,
    /// EPA GHG factors hub
    pub natural_gas_kg_per_therm: f64,
    /// Per passenger, ~500 mi economy (DEFRA 2024)
    pub short_haul_kg_per_flight: f64,
    /// Per passenger, ~3500 mi economy (DEFRA 2024)
    pub long_haul_kg_per_flight: f64,
    pub diet_kg_per_day: DietFactors,
    pub shopping_kg_per_week: ShoppingFactors,
    /// IEA 2023 data-center energy per stream-hour
    pub streaming_kg_per_hour: f64,
    /// A mature tree absorbs ~22 kg CO₂/year
    pub tree_absorption_kg_per_week: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            car_kg_per_mile: CarFactors {
                gasoline: 0.404,
                diesel: 0.367,
                hybrid: 0.213,
                electric: 0.092,
            },
            electricity_kg_per_kwh: 0.386,
            natural_gas_kg_per_therm: 5.31,
            short_haul_kg_per_flight: 244.0,
            long_haul_kg_per_flight: 1020.0,
            diet_kg_per_day: DietFactors {
                heavy_meat: 7.19,
                medium_meat: 5.63,
                vegetarian: 3.81,
                vegan: 2.89,
            },
            shopping_kg_per_week: ShoppingFactors {
                minimal: 2.0,
                average: 8.5,
                frequent: 18.0,
                heavy: 32.0,
            },
            streaming_kg_per_hour: 0.036,
            tree_absorption_kg_per_week: 0.42,
        }
    }
}

/// One value per emission category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable {
    pub transport: f64,
    pub energy: f64,
    pub flight: f64,
    pub diet: f64,
    pub lifestyle: f64,
}

impl CategoryTable {
    pub fn sum(&self) -> f64 {
        self.transport + self.energy + self.flight + self.diet + self.lifestyle
    }
}

/// Benchmarks, spreads, and weights for green-score grading.
#[derive(Debug, Clone, Copy)]
pub struct ScoringConfig {
    /// US per-capita weekly averages, kg CO₂e
    pub benchmarks: CategoryTable,
    /// Score reaches 0 at benchmark × spread; wider = more forgiving
    pub spreads: CategoryTable,
    /// Category weights, must sum to 1.0
    pub weights: CategoryTable,
}

impl ScoringConfig {
    /// Weekly US average footprint, the sum of category benchmarks.
    pub fn weekly_average(&self) -> f64 {
        self.benchmarks.sum()
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            benchmarks: CategoryTable {
                // 193 mi/wk × 0.404 (avg American)
                transport: 78.0,
                // ~100 kWh + ~2.5 therms
                energy: 55.0,
                // annualised per-capita
                flight: 10.0,
                // medium-meat × 7
                diet: 39.4,
                // avg shopping + streaming
                lifestyle: 12.0,
            },
            spreads: CategoryTable {
                transport: 2.0,
                energy: 2.0,
                flight: 6.0,
                diet: 2.0,
                lifestyle: 2.0,
            },
            weights: CategoryTable {
                transport: 0.25,
                energy: 0.25,
                flight: 0.15,
                diet: 0.20,
                lifestyle: 0.15,
            },
        }
    }
}
