//! Configuration for the oracle client.

/// Environment variable holding an optional API key.
pub const API_KEY_VAR: &str = "FATE_ORACLE_API_KEY";
/// Environment variable overriding the endpoint URL.
pub const ENDPOINT_VAR: &str = "FATE_ORACLE_URL";
/// Environment variable overriding the model name.
pub const MODEL_VAR: &str = "FATE_ORACLE_MODEL";

/// Connection settings for the oracle endpoint.
///
/// Defaults target a local inference server, which needs no API key.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// Chat-completions endpoint URL.
    pub endpoint: String,
    /// Model name passed through to the endpoint.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Bearer token, if the endpoint requires one.
    pub api_key: Option<String>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434/v1/chat/completions".to_string(),
            model: "llama3".to_string(),
            temperature: 0.7,
            api_key: None,
        }
    }
}

impl OracleConfig {
    /// Build a config from defaults plus the `FATE_ORACLE_*` environment
    /// variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(endpoint) = std::env::var(ENDPOINT_VAR) {
            config.endpoint = endpoint;
        }
        if let Ok(model) = std::env::var(MODEL_VAR) {
            config.model = model;
        }
        if let Ok(key) = std::env::var(API_KEY_VAR) {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        config
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_local_server() {
        let config = OracleConfig::default();
        assert!(config.endpoint.starts_with("http://localhost"));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn builder_methods() {
        let config = OracleConfig::default()
            .with_endpoint("https://api.example.com/v1/chat/completions")
            .with_model("mistral")
            .with_api_key("sk-test");
        assert_eq!(config.endpoint, "https://api.example.com/v1/chat/completions");
        assert_eq!(config.model, "mistral");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
    }
}
