use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use summarize::{DecodingParams, HttpSummarizer, Summarizer};

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Summarization gateway (shared across requests)
    pub summarizer: Arc<dyn Summarizer>,

    /// Prometheus recorder handle, when the binary installed one
    pub metrics: Option<PrometheusHandle>,

    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl ServerState {
    /// Create new server state with the HTTP summarization client
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let summarizer = HttpSummarizer::new(config.summarizer.clone())
            .map_err(|e| ServerError::Config(e.to_string()))?;
        Ok(Self::with_summarizer(config, Arc::new(summarizer)))
    }

    /// Create state around any [`Summarizer`] implementation
    pub fn with_summarizer(config: ServerConfig, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            config: Arc::new(config),
            summarizer,
            metrics: None,
            started_at: Instant::now(),
        }
    }

    /// Attach a Prometheus handle so `/metrics` can render it
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Server metadata for health checks
#[derive(Debug, Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
    pub summarizer_provider: String,
    pub summarizer_model: String,
    pub decoding: DecodingParams,
}
