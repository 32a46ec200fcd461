use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Process-wide signing secret for session tokens. Required.
    pub session_secret: String,
    /// Issuer claim embedded in session tokens.
    pub token_issuer: String,
    /// Document store connection string (`memory://` is the bundled backend).
    pub store_url: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            session_secret: env::var("SESSION_SECRET")
                .context("SESSION_SECRET must be set")?,
            token_issuer: env::var("TOKEN_ISSUER")
                .unwrap_or_else(|_| "blog-api".to_string()),
            store_url: env::var("STORE_URL")
                .unwrap_or_else(|_| "memory://".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }
}
