//! Data types for footprint estimation and scoring.
//!
//! Input deserialization is deliberately forgiving: missing or
//! non-numeric quantities coerce to 0 and unknown enum strings coerce
//! to documented defaults, so the engine stays total over arbitrary
//! client payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Vehicle fuel type. Unknown values coerce to `Gasoline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    #[default]
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gasoline => "gasoline",
            Self::Diesel => "diesel",
            Self::Hybrid => "hybrid",
            Self::Electric => "electric",
        }
    }

    fn from_name(name: &str) -> Self {
        match name {
            "diesel" => Self::Diesel,
            "hybrid" => Self::Hybrid,
            "electric" => Self::Electric,
            _ => Self::Gasoline,
        }
    }
}

/// Diet category. Unknown values coerce to `MediumMeat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    HeavyMeat,
    #[default]
    MediumMeat,
    Vegetarian,
    Vegan,
}

impl DietType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeavyMeat => "heavy_meat",
            Self::MediumMeat => "medium_meat",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
        }
    }

    fn from_name(name: &str) -> Self {
        match name {
            "heavy_meat" => Self::HeavyMeat,
            "vegetarian" => Self::Vegetarian,
            "vegan" => Self::Vegan,
            _ => Self::MediumMeat,
        }
    }
}

/// Shopping habit category. Unknown values coerce to `Average`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingHabit {
    Minimal,
    #[default]
    Average,
    Frequent,
    Heavy,
}

impl ShoppingHabit {
    fn from_name(name: &str) -> Self {
        match name {
            "minimal" => Self::Minimal,
            "frequent" => Self::Frequent,
            "heavy" => Self::Heavy,
            _ => Self::Average,
        }
    }
}

macro_rules! coercing_enum_deserialize {
    ($ty:ty) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = serde_json::Value::deserialize(deserializer)?;
                Ok(value
                    .as_str()
                    .map(<$ty>::from_name)
                    .unwrap_or_default())
            }
        }
    };
}

coercing_enum_deserialize!(FuelType);
coercing_enum_deserialize!(DietType);
coercing_enum_deserialize!(ShoppingHabit);

/// Coerce a JSON value to a quantity: numbers pass through, numeric
/// strings parse, anything else becomes 0.
fn de_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let n = value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
        .unwrap_or(0.0);
    Ok(if n.is_finite() { n } else { 0.0 })
}

/// Coerce a JSON value to a non-negative whole count.
fn de_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = de_quantity(deserializer)?;
    Ok(n.max(0.0).min(u32::MAX as f64) as u32)
}

/// One week of self-reported household activity.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityInput {
    /// Miles driven this week
    #[serde(deserialize_with = "de_quantity")]
    pub car_miles: f64,
    pub fuel_type: FuelType,
    /// Electricity used this week (kWh)
    #[serde(deserialize_with = "de_quantity")]
    pub electricity_kwh: f64,
    /// Natural gas used this week (therms)
    #[serde(rename = "gasUsage", deserialize_with = "de_quantity")]
    pub gas_therms: f64,
    /// Short-haul flights taken (~500 mi legs)
    #[serde(deserialize_with = "de_count")]
    pub short_flights: u32,
    /// Long-haul flights taken (~3500 mi legs)
    #[serde(deserialize_with = "de_count")]
    pub long_flights: u32,
    pub diet_type: DietType,
    pub shopping_habit: ShoppingHabit,
    /// Video streaming this week (hours)
    #[serde(deserialize_with = "de_quantity")]
    pub streaming_hours: f64,
}

/// Where a computed result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Carbon-estimation API contributed at least one category
    Api,
    /// LLM-generated recommendation payload
    Ai,
    /// Local deterministic engine
    #[default]
    Offline,
    /// Preloaded demo fixture
    Demo,
}

/// Weekly emissions split by category, all in kg CO₂e.
///
/// Invariant: `total_kg` equals the sum of the five categories to
/// within rounding (±0.01 kg).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EmissionsBreakdown {
    pub transport_kg: f64,
    pub energy_kg: f64,
    pub flight_kg: f64,
    pub diet_kg: f64,
    pub lifestyle_kg: f64,
    pub total_kg: f64,
    /// Mature trees needed for one week to absorb `total_kg`
    pub trees_equivalent: i64,
    pub source: Source,
}

/// Relative impact of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// One actionable reduction suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub impact: Impact,
    /// Estimated weekly savings, whole kg CO₂e
    pub savings_kg: f64,
}

/// Green score plus ranked recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// 0-100, 100 = minimal emissions relative to benchmark
    pub score: u8,
    pub summary: String,
    pub recommendations: Vec<Recommendation>,
    /// 15% reduction target for next week, kg CO₂e
    pub weekly_target: f64,
    pub compared_to_average: String,
    #[serde(default)]
    pub source: Source,
}
