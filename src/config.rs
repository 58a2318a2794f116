// Runtime configuration for the Expression Mapper service

use serde::{Deserialize, Serialize};

/// Hosted model endpoint used when none is configured
pub const DEFAULT_MODEL_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/Rajaram1996/FacialEmoRecog";

/// Main configuration for the Expression Mapper service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// External inference service configuration
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Model endpoint receiving the raw image payload
    pub endpoint: String,

    /// Bearer credential for the inference service. Absence is not
    /// validated here; unauthenticated requests are rejected upstream.
    pub api_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            inference: InferenceConfig {
                endpoint: DEFAULT_MODEL_ENDPOINT.to_string(),
                api_token: None,
            },
        }
    }
}

impl Config {
    /// Builds the configuration from process environment variables,
    /// falling back to defaults for anything unset
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(host) = std::env::var("EXPRESSION_MAPPER_HOST") {
            config.server.host = host;
        }
        if let Some(port) = std::env::var("EXPRESSION_MAPPER_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
        {
            config.server.port = port;
        }
        if let Ok(endpoint) = std::env::var("EXPRESSION_MODEL_URL") {
            config.inference.endpoint = endpoint;
        }
        config.inference.api_token = std::env::var("HUGGING_FACE_API_KEY").ok();

        config
    }

    /// Get the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
