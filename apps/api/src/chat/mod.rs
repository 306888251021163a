//! Chat state manager — owns the question field, the in-flight flag, the
//! transient status line, the latest answer, and the bounded persisted
//! history. Constructed once at startup and shared behind a mutex; the lock
//! is never held across the backend call.

pub mod handlers;
pub mod history;

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::warn;
use uuid::Uuid;

use crate::chat::history::{Interaction, InteractionHistory, PersistJob};
use crate::errors::AppError;
use crate::rag_client::{QuestionAnswerer, RagError};

/// Shown in the answer slot until the first question completes.
pub const ANSWER_PLACEHOLDER: &str = "Ask a question to see the answer here.";
/// Rejection message for empty or whitespace-only questions.
pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question first.";
/// Status shown after a successful copy, cleared after [`COPY_STATUS_TTL_SECS`].
pub const COPY_STATUS: &str = "Answer copied to clipboard.";

const COPY_STATUS_TTL_SECS: i64 = 3;

#[derive(Debug, Clone)]
struct StatusLine {
    text: String,
    /// `None` means the status persists until the next state change.
    expires_at: Option<DateTime<Utc>>,
}

/// Read-only view of the chat state for the UI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSnapshot {
    pub question: String,
    pub answer: String,
    pub thinking: bool,
    pub status: Option<String>,
}

pub struct ChatState {
    question: String,
    answer: String,
    in_flight: bool,
    status: Option<StatusLine>,
    history: InteractionHistory,
}

impl ChatState {
    pub fn new(history: InteractionHistory) -> Self {
        Self {
            question: String::new(),
            answer: ANSWER_PLACEHOLDER.to_string(),
            in_flight: false,
            status: None,
            history,
        }
    }

    /// Claims the single in-flight slot for `question`. Blank questions are
    /// rejected without touching the slot; a second ask while one is in
    /// flight is rejected with a conflict.
    pub fn begin_ask(&mut self, question: &str) -> Result<String, AppError> {
        let question = question.trim();
        if question.is_empty() {
            self.set_status(EMPTY_QUESTION_MESSAGE, None);
            return Err(AppError::Validation(EMPTY_QUESTION_MESSAGE.to_string()));
        }
        if self.in_flight {
            return Err(AppError::Conflict(
                "A question is already being answered".to_string(),
            ));
        }
        self.in_flight = true;
        self.question = question.to_string();
        self.status = None;
        Ok(question.to_string())
    }

    /// Completes the ask claimed by [`ChatState::begin_ask`]: releases the
    /// in-flight slot, stores the answer, and appends the interaction to
    /// history. Runs for success and failure alike. The returned job holds
    /// the serialized history; it writes to disk and is meant to run after
    /// the state lock is released.
    pub fn complete_ask(
        &mut self,
        question: String,
        answer: String,
    ) -> (Interaction, Option<PersistJob>) {
        self.in_flight = false;
        self.answer = answer.clone();
        let interaction = Interaction::new(question, answer);
        let persist = self.history.push(interaction.clone());
        (interaction, persist)
    }

    /// Returns the answer text for the client to place on the clipboard, or
    /// `None` when there is nothing worth copying. A successful copy sets a
    /// transient status line.
    pub fn copy_answer(&mut self) -> Option<String> {
        if self.answer.is_empty() || self.answer == ANSWER_PLACEHOLDER {
            return None;
        }
        self.set_status(COPY_STATUS, Some(Duration::seconds(COPY_STATUS_TTL_SECS)));
        Some(self.answer.clone())
    }

    /// Repopulates the question field from a past interaction.
    pub fn reuse(&mut self, id: Uuid) -> Option<Interaction> {
        let interaction = self.history.find(id)?.clone();
        self.question = interaction.question.clone();
        Some(interaction)
    }

    pub fn snapshot(&self) -> ChatSnapshot {
        ChatSnapshot {
            question: self.question.clone(),
            answer: self.answer.clone(),
            thinking: self.in_flight,
            status: self.status_text(),
        }
    }

    pub fn history(&self) -> &InteractionHistory {
        &self.history
    }

    fn set_status(&mut self, text: &str, ttl: Option<Duration>) {
        self.status = Some(StatusLine {
            text: text.to_string(),
            expires_at: ttl.map(|ttl| Utc::now() + ttl),
        });
    }

    fn status_text(&self) -> Option<String> {
        self.status
            .as_ref()
            .filter(|s| s.expires_at.map(|at| at > Utc::now()).unwrap_or(true))
            .map(|s| s.text.clone())
    }
}

/// Runs the full ask lifecycle against `backend`. A failed backend call is
/// not an error at this level: its message becomes the answer and is
/// recorded in history, exactly like a successful one.
///
/// The backend call and its completion run in a detached task, so the
/// in-flight slot is always released and the interaction recorded even when
/// the caller is dropped mid-request (a disconnecting client drops the
/// handler future at its next await point).
pub async fn ask(
    chat: Arc<Mutex<ChatState>>,
    backend: Arc<dyn QuestionAnswerer>,
    question: &str,
) -> Result<Interaction, AppError> {
    let question = chat.lock().await.begin_ask(question)?;

    let completion = tokio::spawn(async move {
        // No lock is held while the request is in flight.
        let answer = match backend.ask(&question).await {
            Ok(answer) => answer,
            Err(e) => {
                match &e {
                    RagError::Api { status, message } => {
                        warn!("Backend returned {status}: {message}")
                    }
                    RagError::Http(err) => warn!("Backend request failed: {err}"),
                }
                e.to_string()
            }
        };

        let (interaction, persist) = chat.lock().await.complete_ask(question, answer);
        // Disk write happens outside the lock, on the blocking pool.
        if let Some(persist) = persist {
            persist.run().await;
        }
        interaction
    });

    completion.await.map_err(|e| AppError::Internal(e.into()))
}
