use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use summarize::SummarizerConfig;

/// Top-level service configuration.
///
/// Every field has a default, so an empty file or environment yields a
/// working server pointed at the hosted BART model.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,

    /// Whole-request deadline in seconds, summarization call included.
    pub timeout_secs: u64,

    pub max_body_size_mb: usize,

    /// Summarization requests allowed in flight at once; the rest wait.
    pub max_concurrent_summaries: usize,

    pub enable_cors: bool,

    /// `EnvFilter` directive, e.g. `info` or `server=debug,summarize=debug`.
    pub log_level: String,

    pub metrics_enabled: bool,

    /// Remote summarization model.
    pub summarizer: SummarizerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".into(),
            port: 8000,
            timeout_secs: 90,
            max_body_size_mb: 10,
            max_concurrent_summaries: 4,
            enable_cors: true,
            log_level: "info".into(),
            metrics_enabled: true,
            summarizer: SummarizerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional `server.*` file, then
    /// `AI_CORE__*` environment variables (e.g. `AI_CORE__SUMMARIZER__API_URL`).
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("server").required(false))
            .add_source(
                config::Environment::with_prefix("AI_CORE")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects zero limits and an unusable summarizer section.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        if self.max_body_size_mb == 0 {
            anyhow::bail!("max_body_size_mb must be greater than zero");
        }
        if self.max_concurrent_summaries == 0 {
            anyhow::bail!("max_concurrent_summaries must be greater than zero");
        }
        self.summarizer.validate()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.bind_addr, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address '{}': {e}", self.bind_addr))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Body limit in bytes.
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}
