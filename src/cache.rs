//! In-memory cache for remote estimate responses.
//!
//! Keyed by a hash of the canonical input JSON, so identical weeks
//! submitted twice hit the carbon API once.

use std::time::Duration;

use moka::future::Cache;
use sha2::{Digest, Sha256};

use crate::engine::models::{ActivityInput, EmissionsBreakdown};

const MAX_ENTRIES: u64 = 1024;
const TTL: Duration = Duration::from_secs(600);

#[derive(Clone)]
pub struct AppCache {
    pub estimates: Cache<String, EmissionsBreakdown>,
}

impl AppCache {
    pub fn new() -> Self {
        Self {
            estimates: Cache::builder()
                .max_capacity(MAX_ENTRIES)
                .time_to_live(TTL)
                .build(),
        }
    }

    /// Cache key for an activity input: hash of its canonical JSON.
    pub fn input_key(input: &ActivityInput) -> String {
        let canonical = serde_json::to_string(input).unwrap_or_default();
        let digest = Sha256::digest(canonical.as_bytes());
        format!("sha256:{}", hex::encode(digest))
    }

    pub fn stats(&self) -> serde_json::Value {
        serde_json::json!({
            "estimates": {
                "entries": self.estimates.entry_count(),
            }
        })
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_is_deterministic() {
        let input = ActivityInput {
            car_miles: 100.0,
            ..ActivityInput::default()
        };
        assert_eq!(AppCache::input_key(&input), AppCache::input_key(&input));
        assert!(AppCache::input_key(&input).starts_with("sha256:"));
    }

    #[test]
    fn test_different_inputs_get_different_keys() {
        let a = ActivityInput {
            car_miles: 100.0,
            ..ActivityInput::default()
        };
        let b = ActivityInput {
            car_miles: 101.0,
            ..ActivityInput::default()
        };
        assert_ne!(AppCache::input_key(&a), AppCache::input_key(&b));
    }

    #[tokio::test]
    async fn test_cache_round_trip() {
        let cache = AppCache::new();
        let key = "sha256:test".to_string();
        let value = EmissionsBreakdown {
            total_kg: 47.91,
            ..EmissionsBreakdown::default()
        };
        let got = cache
            .estimates
            .get_with(key.clone(), async { value.clone() })
            .await;
        assert_eq!(got, value);
        assert_eq!(cache.estimates.get(&key).await, Some(value));
    }
}
