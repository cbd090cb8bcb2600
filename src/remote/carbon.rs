//! Carbon Interface client with per-category offline fallback.
//!
//! One request per applicable category (vehicle, electricity, flight),
//! issued concurrently with a single attempt each. Categories the API
//! cannot price (gas heating, diet, lifestyle) always compute offline.
//! Partial success keeps the successful remote values and fills the
//! rest from the offline factor tables.

use tracing::{info, warn};
use uuid::{uuid, Uuid};

use crate::engine::estimator;
use crate::engine::factors::EmissionFactors;
use crate::engine::models::{ActivityInput, EmissionsBreakdown, Source};
use crate::engine::round2;

use super::models::{CarbonRequest, CarbonResponse, FlightLeg};
use super::RemoteError;

/// Carbon Interface generic medium car.
const GENERIC_VEHICLE_MODEL: Uuid = uuid!("7268a9b7-17e8-4c8d-acca-57059252afe9");

/// Representative legs for the two flight buckets.
const SHORT_HAUL_LEG: FlightLeg = FlightLeg {
    departure_airport: "sfo",
    destination_airport: "lax",
};
const LONG_HAUL_LEG: FlightLeg = FlightLeg {
    departure_airport: "sfo",
    destination_airport: "jfk",
};

#[derive(Clone)]
pub struct CarbonClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl CarbonClient {
    pub fn from_env(http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: std::env::var("CARBON_API_URL").unwrap_or_else(|_| {
                "https://www.carboninterface.com/api/v1/estimates".to_string()
            }),
            api_key: std::env::var("CARBON_API_KEY").ok().filter(|k| !k.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Estimate weekly emissions, preferring the remote API per
    /// category and falling back to the offline engine.
    pub async fn estimate(
        &self,
        input: &ActivityInput,
        factors: &EmissionFactors,
    ) -> EmissionsBreakdown {
        let offline = estimator::estimate(input, factors);
        if !self.is_configured() {
            return offline;
        }

        let (vehicle, electricity, flight) = tokio::join!(
            self.try_category("vehicle", vehicle_request(input)),
            self.try_category("electricity", electricity_request(input)),
            self.try_category("flight", flight_request(input)),
        );

        if vehicle.is_none() && electricity.is_none() && flight.is_none() {
            info!("no remote estimates available, serving offline result");
            return offline;
        }

        merge(input, factors, &offline, vehicle, electricity, flight)
    }

    async fn try_category(&self, label: &str, request: Option<CarbonRequest>) -> Option<f64> {
        let request = request?;
        match self.estimate_kg(&request).await {
            Ok(kg) => Some(kg),
            Err(e) => {
                warn!("carbon API {} estimate failed, using offline factors: {}", label, e);
                None
            }
        }
    }

    async fn estimate_kg(&self, request: &CarbonRequest) -> Result<f64, RemoteError> {
        let key = self.api_key.as_deref().ok_or(RemoteError::NotConfigured)?;
        let response = self
            .http
            .post(&self.base_url)
            .bearer_auth(key)
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }
        let payload: CarbonResponse = response.json().await?;
        Ok(payload.data.attributes.carbon_kg)
    }
}

fn vehicle_request(input: &ActivityInput) -> Option<CarbonRequest> {
    (input.car_miles > 0.0).then(|| CarbonRequest::Vehicle {
        distance_unit: "mi",
        distance_value: input.car_miles,
        vehicle_model_id: GENERIC_VEHICLE_MODEL,
    })
}

fn electricity_request(input: &ActivityInput) -> Option<CarbonRequest> {
    (input.electricity_kwh > 0.0).then(|| CarbonRequest::Electricity {
        electricity_unit: "kwh",
        electricity_value: input.electricity_kwh,
        country: "us",
    })
}

fn flight_request(input: &ActivityInput) -> Option<CarbonRequest> {
    let mut legs = Vec::with_capacity(input.short_flights as usize + input.long_flights as usize);
    legs.extend(std::iter::repeat(SHORT_HAUL_LEG).take(input.short_flights as usize));
    legs.extend(std::iter::repeat(LONG_HAUL_LEG).take(input.long_flights as usize));
    (!legs.is_empty()).then_some(CarbonRequest::Flight {
        passengers: 1,
        legs,
    })
}

/// Fold remote per-category results into the offline breakdown.
///
/// Remote electricity covers only the kWh part of the energy category;
/// gas heating is re-added from the offline factor table. Totals and
/// the tree equivalent are recomputed so the sum invariant holds.
fn merge(
    input: &ActivityInput,
    factors: &EmissionFactors,
    offline: &EmissionsBreakdown,
    vehicle: Option<f64>,
    electricity: Option<f64>,
    flight: Option<f64>,
) -> EmissionsBreakdown {
    let gas_kg = input.gas_therms.max(0.0) * factors.natural_gas_kg_per_therm;

    let transport_kg = vehicle.map(round2).unwrap_or(offline.transport_kg);
    let energy_kg = electricity
        .map(|kg| round2(kg + gas_kg))
        .unwrap_or(offline.energy_kg);
    let flight_kg = flight.map(round2).unwrap_or(offline.flight_kg);

    let total_kg = round2(
        transport_kg + energy_kg + flight_kg + offline.diet_kg + offline.lifestyle_kg,
    );

    EmissionsBreakdown {
        transport_kg,
        energy_kg,
        flight_kg,
        diet_kg: offline.diet_kg,
        lifestyle_kg: offline.lifestyle_kg,
        total_kg,
        trees_equivalent: (total_kg / factors.tree_absorption_kg_per_week).round() as i64,
        source: Source::Api,
    }
}
