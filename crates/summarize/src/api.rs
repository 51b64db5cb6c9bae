use async_trait::async_trait;
use serde_json::{json, Value};

use crate::circuit_breaker::{CircuitBreaker, CircuitState};
use crate::retry::{execute_with_retry_async, RetryConfig};
use crate::{DecodingParams, Summarizer, SummarizerConfig, Summary, SummarizeError};

/// Longest upstream error body kept in an error message.
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApiProviderKind {
    HuggingFace,
    Custom,
}

fn api_provider_kind(provider: &str) -> ApiProviderKind {
    match provider.to_ascii_lowercase().as_str() {
        "hf" | "huggingface" => ApiProviderKind::HuggingFace,
        _ => ApiProviderKind::Custom,
    }
}

/// [`Summarizer`] backed by a remote inference endpoint over HTTP.
///
/// One instance owns a pooled `reqwest::Client` and a circuit breaker, so it
/// should be built once and shared (`Arc<HttpSummarizer>`).
#[derive(Debug)]
pub struct HttpSummarizer {
    client: reqwest::Client,
    config: SummarizerConfig,
    provider: ApiProviderKind,
    provider_name: String,
    breaker: CircuitBreaker,
}

impl HttpSummarizer {
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.api_timeout())
            .connect_timeout(config.connect_timeout())
            .pool_max_idle_per_host(8)
            .build()
            .map_err(|e| SummarizeError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        let provider_name = config.provider.to_ascii_lowercase();
        let breaker = CircuitBreaker::new(config.model_name.clone(), config.circuit_breaker());

        Ok(Self {
            client,
            provider: api_provider_kind(&provider_name),
            provider_name,
            breaker,
            config,
        })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    async fn summarize_with_retry(
        &self,
        payload: &Value,
        retry_cfg: &RetryConfig,
    ) -> Result<Summary, SummarizeError> {
        let outcome = execute_with_retry_async(retry_cfg, SummarizeError::is_retryable, move |attempt| {
            if attempt > 0 {
                tracing::warn!(
                    provider = %self.provider_name,
                    model = %self.config.model_name,
                    attempt,
                    "retrying summarization request"
                );
            }
            self.send_request(payload)
        })
        .await;

        if outcome.attempts > 1 {
            tracing::debug!(
                attempts = outcome.attempts,
                elapsed_ms = outcome.total_duration.as_millis() as u64,
                "summarization finished after retries"
            );
        }
        outcome.into_result()
    }

    async fn send_request(&self, payload: &Value) -> Result<Summary, SummarizeError> {
        let mut request = self.client.post(&self.config.api_url).json(payload);
        if let Some(header) = self.config.api_auth_header.as_deref() {
            request = request.header(reqwest::header::AUTHORIZATION, header);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Upstream {
                status: status.as_u16(),
                body: truncate_body(body),
            });
        }

        let value = response.json::<Value>().await.map_err(|e| {
            SummarizeError::InvalidResponse(format!("response body is not JSON: {e}"))
        })?;
        parse_summary(value)
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, text: &str) -> Result<Summary, SummarizeError> {
        let enable_resilience = self.config.enable_resilience;

        if enable_resilience && !self.breaker.allow_request() {
            return Err(SummarizeError::CircuitOpen(self.config.model_name.clone()));
        }

        let payload = build_payload(
            self.provider,
            text,
            &self.config.decoding,
            self.config.wait_for_model,
        );

        let result = if enable_resilience {
            self.summarize_with_retry(&payload, &self.config.retry()).await
        } else {
            self.send_request(&payload).await
        };

        if enable_resilience {
            match &result {
                Ok(_) => self.breaker.record_success(),
                Err(SummarizeError::Upstream { status, .. }) if *status < 500 && *status != 429 => {
                    // The model is reachable; the input was rejected.
                }
                Err(_) => self.breaker.record_failure(),
            }
        }

        if let Err(err) = &result {
            tracing::error!(
                provider = %self.provider_name,
                model = %self.config.model_name,
                error = %err,
                "summarization failed"
            );
        }
        result
    }

    fn provider(&self) -> &str {
        &self.provider_name
    }

    fn circuit_state(&self) -> CircuitState {
        if self.config.enable_resilience {
            self.breaker.current_state()
        } else {
            CircuitState::Closed
        }
    }
}

fn build_payload(
    provider: ApiProviderKind,
    text: &str,
    params: &DecodingParams,
    wait_for_model: bool,
) -> Value {
    match provider {
        ApiProviderKind::HuggingFace => json!({
            "inputs": text,
            "parameters": {
                "max_length": params.max_length,
                "min_length": params.min_length,
                "do_sample": params.do_sample,
            },
            "options": { "wait_for_model": wait_for_model },
        }),
        ApiProviderKind::Custom => json!({
            "text": text,
            "max_length": params.max_length,
            "min_length": params.min_length,
            "do_sample": params.do_sample,
        }),
    }
}

/// Extracts the first candidate from any of the accepted response shapes.
fn parse_summary(value: Value) -> Result<Summary, SummarizeError> {
    match value {
        Value::Array(items) => {
            let first = items.into_iter().next().ok_or(SummarizeError::EmptyResponse)?;
            parse_summary(first)
        }
        Value::Object(mut map) => {
            for key in ["summary_text", "summary", "generated_text"] {
                match map.remove(key) {
                    Some(Value::String(text)) => return Ok(Summary::new(text)),
                    Some(other) => {
                        return Err(SummarizeError::InvalidResponse(format!(
                            "`{key}` must be a string, got {other}"
                        )))
                    }
                    None => {}
                }
            }
            if let Some(error) = map.remove("error") {
                let message = match error {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                return Err(SummarizeError::InvalidResponse(format!(
                    "model reported an error: {message}"
                )));
            }
            Err(SummarizeError::InvalidResponse(
                "unsupported response shape: no summary field".into(),
            ))
        }
        Value::String(text) => Ok(Summary::new(text)),
        other => Err(SummarizeError::InvalidResponse(format!(
            "unsupported response shape: {other}"
        ))),
    }
}

fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push_str("...");
    }
    body
}
