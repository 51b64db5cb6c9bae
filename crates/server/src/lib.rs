//! ai-core Server - HTTP front end for text cleaning and summarization
//!
//! This crate wires the [`normalize`] text cleaner and the [`summarize`]
//! gateway into an Axum application. It supports:
//!
//! - **Cleaning**: deterministic normalization of raw text, no I/O
//! - **Summarization**: forwarding raw text to a remote BART-style model
//! - **Health & Metrics**: Liveness/readiness probes and Prometheus metrics
//!
//! # Features
//!
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Backpressure**: bounded number of in-flight summarization calls
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: uniform `{"error": {"code", "message"}}` bodies
//! - **Graceful Shutdown**: SIGTERM and Ctrl+C handling
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe (503 while the gateway circuit is open)
//! - `GET /metrics` - Prometheus metrics
//! - `GET /api/v1/metadata` - Server metadata
//! - `POST /clean`, `POST /api/v1/clean` - `{"text"}` to `{"original", "cleaned"}`
//! - `POST /summarize`, `POST /api/v1/summarize` - `{"text"}` to `{"summary"}`

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
