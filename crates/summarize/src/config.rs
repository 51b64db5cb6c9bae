use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::circuit_breaker::CircuitBreakerConfig;
use crate::retry::RetryConfig;
use crate::{DecodingParams, SummarizeError};

/// Hosted inference endpoint for the default model.
pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// Default model label.
pub const DEFAULT_MODEL_NAME: &str = "facebook/bart-large-cnn";

/// Where and how to reach the summarization model.
///
/// # Example
/// ```no_run
/// use summarize::{HttpSummarizer, SummarizerConfig};
///
/// let cfg = SummarizerConfig {
///     api_auth_header: Some("Bearer hf_xxx".into()),
///     ..Default::default()
/// };
///
/// let _client = HttpSummarizer::new(cfg);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Request/response dialect: `"hf"` (Hugging Face inference API, default)
    /// or `"custom"` (plain `{"text": ...}` -> `{"summary": ...}` sidecar).
    pub provider: String,
    /// Full URL of the inference endpoint.
    pub api_url: String,
    /// Value for the `Authorization` header (e.g. `"Bearer hf_xxx"`).
    pub api_auth_header: Option<String>,
    /// Label used in logs and the readiness probe.
    pub model_name: String,
    /// Overall per-attempt timeout in seconds.
    pub api_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Ask the hosted API to block until a cold model is loaded instead of
    /// answering 503.
    pub wait_for_model: bool,
    pub decoding: DecodingParams,
    /// Enables retry and circuit breaking.
    pub enable_resilience: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_config: Option<RetryConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circuit_breaker_config: Option<CircuitBreakerConfig>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            provider: "hf".into(),
            api_url: DEFAULT_API_URL.into(),
            api_auth_header: None,
            model_name: DEFAULT_MODEL_NAME.into(),
            api_timeout_secs: 60,
            connect_timeout_secs: 10,
            wait_for_model: true,
            decoding: DecodingParams::default(),
            enable_resilience: true,
            retry_config: None,           // Uses defaults when None
            circuit_breaker_config: None, // Uses defaults when None
        }
    }
}

impl SummarizerConfig {
    pub fn validate(&self) -> Result<(), SummarizeError> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(SummarizeError::InvalidConfig("api_url must not be empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SummarizeError::InvalidConfig(format!(
                "api_url must be an http(s) URL, got '{url}'"
            )));
        }
        if self.api_timeout_secs == 0 {
            return Err(SummarizeError::InvalidConfig(
                "api_timeout_secs must be greater than zero".into(),
            ));
        }
        self.decoding.validate()
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn retry(&self) -> RetryConfig {
        self.retry_config.unwrap_or_default()
    }

    pub fn circuit_breaker(&self) -> CircuitBreakerConfig {
        self.circuit_breaker_config.unwrap_or_default()
    }
}
