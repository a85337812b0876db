//! Server configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_port() -> u16 {
    8080
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

/// Load configuration from `portfolio.toml` (optional) with
/// `PORTFOLIO_*` environment variable overrides.
pub fn load_config() -> Result<Config> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("portfolio").required(false))
        .add_source(config::Environment::with_prefix("PORTFOLIO"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
