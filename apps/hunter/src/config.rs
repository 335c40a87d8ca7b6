use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables.
///
/// The API key is optional at load time: commands that never touch the LLM
/// (`hunter match`) must run without credentials. Commands that do call the
/// LLM check it via [`Config::require_api_key`] before building a client.
#[derive(Debug, Clone)]
pub struct Config {
    pub metis_api_key: Option<String>,
    pub metis_endpoint: String,
    pub model_name: String,
    pub llm_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            metis_api_key: std::env::var("METIS_API_KEY").ok().filter(|k| !k.is_empty()),
            metis_endpoint: env_or("METIS_ENDPOINT", "https://api.metisai.ir"),
            model_name: env_or("GEMINI_MODEL", "gemini-1.5-flash"),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// Returns the API key or fails with a setup hint. Only called on the
    /// paths that actually construct an LLM client.
    pub fn require_api_key(&self) -> Result<&str> {
        self.metis_api_key
            .as_deref()
            .context("Required environment variable 'METIS_API_KEY' is not set")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
