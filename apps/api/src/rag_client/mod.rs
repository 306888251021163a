//! RAG backend client — the single point of entry for answer retrieval.
//! The backend is an external service exposing `GET /ask?question=…` and
//! answering `{"answer": "…"}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Fallback message when a failed response carries no usable body.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Error)]
pub enum RagError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; the message is the response body text, surfaced to
    /// the user verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct AskBody {
    answer: String,
}

/// Answer source seam. Production uses [`RagClient`]; tests substitute
/// scripted fakes.
#[async_trait]
pub trait QuestionAnswerer: Send + Sync {
    async fn ask(&self, question: &str) -> Result<String, RagError>;
}

#[derive(Debug, Clone)]
pub struct RagClient {
    client: Client,
    base_url: String,
}

impl RagClient {
    /// `timeout` bounds the whole request; a hung backend surfaces as a
    /// failure instead of an indefinite wait.
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl QuestionAnswerer for RagClient {
    async fn ask(&self, question: &str) -> Result<String, RagError> {
        let response = self
            .client
            .get(format!("{}/ask", self.base_url))
            .query(&[("question", question)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = failure_message(response.text().await.ok());
            return Err(RagError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: AskBody = response.json().await?;
        debug!("Backend answered with {} chars", body.answer.len());
        Ok(body.answer)
    }
}

fn failure_message(body: Option<String>) -> String {
    match body {
        Some(text) if !text.trim().is_empty() => text,
        _ => UNKNOWN_ERROR.to_string(),
    }
}
