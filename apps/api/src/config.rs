use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Base URL of the published HSK wordlists (one JSON array per level).
pub const DEFAULT_DATA_BASE_URL: &str =
    "https://raw.githubusercontent.com/drkameleon/complete-hsk-vocabulary/main/wordlists/inclusive/new";

const DEFAULT_CJK_FONT_PATH: &str = "assets/fonts/NotoSansSC-Regular.ttf";

/// Application configuration loaded from environment variables.
/// Every variable has a default — the service starts with no environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub data_base_url: String,
    /// Timeout for the single remote fetch attempt. There is no retry: on
    /// failure the embedded dataset takes over.
    pub fetch_timeout: Duration,
    /// TrueType file with CJK coverage for glyph rendering.
    pub cjk_font_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            data_base_url: env_or("HSK_DATA_BASE_URL", DEFAULT_DATA_BASE_URL),
            fetch_timeout: Duration::from_secs(
                env_or("FETCH_TIMEOUT_SECS", "10")
                    .parse::<u64>()
                    .context("FETCH_TIMEOUT_SECS must be an integer number of seconds")?,
            ),
            cjk_font_path: PathBuf::from(env_or("CJK_FONT_PATH", DEFAULT_CJK_FONT_PATH)),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
