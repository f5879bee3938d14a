use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    "http://127.0.0.1:8000/fetch_command".to_string()
}

fn default_interval_ms() -> u64 {
    500
}

/// Polling configuration, constructed programmatically by the embedding host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Command source endpoint, fetched with a plain GET
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Cadence between retrievals, in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            interval_ms: default_interval_ms(),
        }
    }
}

impl PollConfig {
    pub fn new(endpoint: impl Into<String>, interval_ms: u64) -> Self {
        Self {
            endpoint: endpoint.into(),
            interval_ms,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_carries_reference_endpoint_and_cadence() {
        let config = PollConfig::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:8000/fetch_command");
        assert_eq!(config.interval(), Duration::from_millis(500));
    }

    #[test]
    fn deserialize_fills_missing_fields_with_defaults() {
        let config: PollConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PollConfig::default());

        let config: PollConfig =
            serde_json::from_str(r#"{"endpoint":"http://10.0.0.2:9000/next"}"#).unwrap();
        assert_eq!(config.endpoint, "http://10.0.0.2:9000/next");
        assert_eq!(config.interval_ms, 500);
    }

    #[test]
    fn custom_interval_round_trips() {
        let config = PollConfig::new("http://localhost:8000/q", 250);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PollConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.interval(), Duration::from_millis(250));
    }
}
