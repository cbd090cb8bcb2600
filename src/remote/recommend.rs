//! LLM-backed recommendation generator with offline scorer fallback.

use tracing::warn;

use crate::engine::factors::ScoringConfig;
use crate::engine::models::{ActivityInput, EmissionsBreakdown, ScoreResult, Source};
use crate::engine::scorer;

use super::models::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};
use super::RemoteError;

#[derive(Clone)]
pub struct RecommendClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl RecommendClient {
    pub fn from_env(http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string()),
            api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate recommendations, preferring the LLM and falling back
    /// to the deterministic scorer on any failure.
    pub async fn recommend(
        &self,
        breakdown: &EmissionsBreakdown,
        input: &ActivityInput,
        scoring: &ScoringConfig,
    ) -> ScoreResult {
        match self.fetch(breakdown, input).await {
            Ok(result) => result,
            Err(e) => {
                warn!("recommendation API failed, using offline scorer: {}", e);
                scorer::score(breakdown, scoring)
            }
        }
    }

    async fn fetch(
        &self,
        breakdown: &EmissionsBreakdown,
        input: &ActivityInput,
    ) -> Result<ScoreResult, RemoteError> {
        let key = self.api_key.as_deref().ok_or(RemoteError::NotConfigured)?;
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(breakdown, input),
            }],
            temperature: 0.7,
            max_tokens: 800,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .http
            .post(&self.base_url)
            .bearer_auth(key)
            .json(&request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }

        let payload: ChatResponse = response.json().await?;
        let content = payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(RemoteError::MissingFields)?;

        let mut result: ScoreResult = serde_json::from_str(&content)?;
        result.score = result.score.min(100);
        result.recommendations.truncate(5);
        result.source = Source::Ai;
        Ok(result)
    }
}

fn build_prompt(breakdown: &EmissionsBreakdown, input: &ActivityInput) -> String {
    format!(
        "You are CarbonIQ, an expert environmental sustainability AI advisor.\n\
         Analyze this user's 7-day carbon footprint data and provide personalized, actionable recommendations.\n\
         \n\
         User's carbon data:\n\
         - Total CO₂: {total} kg\n\
         - Transport: {transport} kg ({miles} miles driven, {fuel} vehicle)\n\
         - Energy: {energy} kg ({kwh} kWh electricity, {therms} therms natural gas)\n\
         - Flights: {flight} kg ({short} short-haul, {long} long-haul)\n\
         - Diet: {diet} kg ({diet_type} diet)\n\
         - Lifestyle: {lifestyle} kg ({streaming} hours streaming)\n\
         \n\
         Respond in valid JSON with this exact structure:\n\
         {{\n\
         \"score\": <number 0-100, overall green score>,\n\
         \"summary\": \"<one sentence overall assessment>\",\n\
         \"recommendations\": [\n\
         {{\"title\": \"<short title>\", \"description\": \"<1-2 sentence actionable tip>\", \"impact\": \"high|medium|low\", \"savingsKg\": <estimated weekly kg CO2 savings>}},\n\
         ...up to 5 recommendations\n\
         ],\n\
         \"weeklyTarget\": <realistic weekly CO2 target in kg>,\n\
         \"comparedToAverage\": \"<how they compare to national average>\"\n\
         }}",
        total = breakdown.total_kg,
        transport = breakdown.transport_kg,
        miles = input.car_miles,
        fuel = input.fuel_type.as_str(),
        energy = breakdown.energy_kg,
        kwh = input.electricity_kwh,
        therms = input.gas_therms,
        flight = breakdown.flight_kg,
        short = input.short_flights,
        long = input.long_flights,
        diet = breakdown.diet_kg,
        diet_type = input.diet_type.as_str(),
        lifestyle = breakdown.lifestyle_kg,
        streaming = input.streaming_hours,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::estimator;
    use crate::engine::factors::EmissionFactors;

    fn demo_breakdown() -> (ActivityInput, EmissionsBreakdown) {
        let input = ActivityInput {
            car_miles: 100.0,
            electricity_kwh: 90.0,
            gas_therms: 3.0,
            streaming_hours: 10.0,
            ..ActivityInput::default()
        };
        let breakdown = estimator::estimate(&input, &EmissionFactors::default());
        (input, breakdown)
    }

    #[test]
    fn test_prompt_includes_breakdown_and_activity() {
        let (input, breakdown) = demo_breakdown();
        let prompt = build_prompt(&breakdown, &input);
        assert!(prompt.contains("Total CO₂: 139.34 kg"));
        assert!(prompt.contains("100 miles driven, gasoline vehicle"));
        assert!(prompt.contains("medium_meat diet"));
        assert!(prompt.contains("\"score\""));
    }

    #[test]
    fn test_llm_payload_parses_into_score_result() {
        let content = r#"{
            "score": 72,
            "summary": "Solid footprint with room to improve on driving.",
            "recommendations": [
                {"title": "Bike short trips", "description": "Replace drives under 2 miles.", "impact": "high", "savingsKg": 9}
            ],
            "weeklyTarget": 118,
            "comparedToAverage": "28% below US average"
        }"#;
        let result: ScoreResult = serde_json::from_str(content).unwrap();
        assert_eq!(result.score, 72);
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.source, Source::Offline);
    }

    #[test]
    fn test_payload_missing_fields_is_an_error() {
        // No score/summary means the fallback path must run.
        let result: Result<ScoreResult, _> = serde_json::from_str(r#"{"weeklyTarget": 10}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_api_falls_back_to_scorer() {
        let client = RecommendClient {
            http: reqwest::Client::new(),
            base_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            api_key: Some("test-key".to_string()),
            model: "gpt-4o-mini".to_string(),
        };
        let (input, breakdown) = demo_breakdown();
        let scoring = ScoringConfig::default();
        let result = client.recommend(&breakdown, &input, &scoring).await;
        assert_eq!(result, scorer::score(&breakdown, &scoring));
        assert_eq!(result.source, Source::Offline);
    }

    #[tokio::test]
    async fn test_unconfigured_client_falls_back_to_scorer() {
        let client = RecommendClient {
            http: reqwest::Client::new(),
            base_url: "http://localhost:9".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
        };
        let (input, breakdown) = demo_breakdown();
        let scoring = ScoringConfig::default();
        let result = client.recommend(&breakdown, &input, &scoring).await;
        assert_eq!(result.score, scorer::score(&breakdown, &scoring).score);
    }
}
