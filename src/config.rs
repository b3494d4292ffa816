//! Environment-backed configuration loaded once at startup.

use anyhow::{Context, Result};
use std::env;

/// Default DeepSeek chat-completion endpoint.
pub const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/chat/completions";

/// Runtime configuration. Both secrets are required; a missing one is a
/// startup-fatal condition.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_token: String,
    pub deepseek_api_key: String,
    pub deepseek_api_url: String,
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        let telegram_token =
            env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN must be set")?;
        let deepseek_api_key =
            env::var("DEEPSEEK_API_KEY").context("DEEPSEEK_API_KEY must be set")?;
        let deepseek_api_url =
            env::var("DEEPSEEK_API_URL").unwrap_or_else(|_| DEEPSEEK_API_URL.to_string());

        Ok(Self {
            telegram_token,
            deepseek_api_key,
            deepseek_api_url,
        })
    }
}
