//! Wire types for the remote collaborators.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Carbon Interface estimate request, tagged by estimate type.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CarbonRequest {
    Vehicle {
        distance_unit: &'static str,
        distance_value: f64,
        vehicle_model_id: Uuid,
    },
    Electricity {
        electricity_unit: &'static str,
        electricity_value: f64,
        country: &'static str,
    },
    Flight {
        passengers: u32,
        legs: Vec<FlightLeg>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct FlightLeg {
    pub departure_airport: &'static str,
    pub destination_airport: &'static str,
}

/// Carbon Interface estimate response envelope.
#[derive(Debug, Deserialize)]
pub struct CarbonResponse {
    pub data: CarbonData,
}

#[derive(Debug, Deserialize)]
pub struct CarbonData {
    pub attributes: CarbonAttributes,
}

#[derive(Debug, Deserialize)]
pub struct CarbonAttributes {
    pub carbon_kg: f64,
}

/// OpenAI chat-completions request.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// OpenAI chat-completions response, trimmed to what we read.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatContent,
}

#[derive(Debug, Deserialize)]
pub struct ChatContent {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carbon_request_wire_shape() {
        let request = CarbonRequest::Electricity {
            electricity_unit: "kwh",
            electricity_value: 90.0,
            country: "us",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "electricity");
        assert_eq!(json["electricity_unit"], "kwh");
        assert_eq!(json["electricity_value"], 90.0);
    }

    #[test]
    fn test_carbon_response_parses_nested_kg() {
        let payload: CarbonResponse = serde_json::from_str(
            r#"{"data":{"id":"abc","attributes":{"carbon_kg":40.4,"carbon_lb":89.1}}}"#,
        )
        .unwrap();
        assert_eq!(payload.data.attributes.carbon_kg, 40.4);
    }
}
