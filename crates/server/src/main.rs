//! ai-core Server binary
//!
//! Reads `.env`, loads configuration and serves the cleaning and
//! summarization API until shutdown.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
