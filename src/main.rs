//! game-reviews server
//!
//! Usage: `game-reviews [config.yaml]`
//!
//! The config path may also come from `GAME_REVIEWS_CONFIG`. Without one,
//! defaults apply (port 8080, built-in seed data).

use anyhow::Result;
use game_reviews::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GAME_REVIEWS_CONFIG").ok());
    let config = AppConfig::load(config_path.as_deref())?;

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(path) = &config_path {
        tracing::info!(path = %path, "configuration loaded");
    }

    ServerBuilder::new().with_config(config).serve().await
}
