use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default, so the service boots with no environment
/// at all and points at a local RAG backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external RAG backend.
    pub backend_url: String,
    /// Optional override for the resume document; the compiled-in document
    /// is used when unset.
    pub resume_path: Option<PathBuf>,
    /// File holding the persisted question/answer history.
    pub history_path: PathBuf,
    pub request_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            backend_url: std::env::var("RAG_BACKEND_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            resume_path: std::env::var("RESUME_DATA_PATH").ok().map(PathBuf::from),
            history_path: std::env::var("HISTORY_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("chat_history.json")),
            request_timeout_secs: std::env::var("RAG_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("RAG_TIMEOUT_SECS must be a number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
