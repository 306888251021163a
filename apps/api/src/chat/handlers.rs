use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::history::Interaction;
use crate::chat::{ask, ChatSnapshot};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskParams {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskResponse {
    pub id: Uuid,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

/// GET /api/v1/ask?question=…
///
/// Backend failures still answer 200: the failure text is the answer, as in
/// the original UI. Only empty input (400) and an ask already in flight
/// (409) are HTTP errors.
pub async fn handle_ask(
    State(state): State<AppState>,
    Query(params): Query<AskParams>,
) -> Result<Json<AskResponse>, AppError> {
    let interaction = ask(state.chat.clone(), state.backend.clone(), &params.question).await?;
    Ok(Json(AskResponse {
        id: interaction.id,
        answer: interaction.answer,
        asked_at: interaction.asked_at,
    }))
}

/// GET /api/v1/history — most-recent-first.
pub async fn handle_history(State(state): State<AppState>) -> Json<Vec<Interaction>> {
    Json(state.chat.lock().await.history().recent())
}

/// POST /api/v1/history/:id/reuse
pub async fn handle_reuse(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Interaction>, AppError> {
    state
        .chat
        .lock()
        .await
        .reuse(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Interaction {id} not found")))
}

#[derive(Debug, Serialize)]
pub struct CopyResponse {
    /// `None` when there is no answer worth copying (no-op).
    pub text: Option<String>,
    pub status: Option<String>,
}

/// POST /api/v1/chat/copy
pub async fn handle_copy(State(state): State<AppState>) -> Json<CopyResponse> {
    let mut chat = state.chat.lock().await;
    let text = chat.copy_answer();
    let status = chat.snapshot().status;
    Json(CopyResponse { text, status })
}

/// GET /api/v1/chat
pub async fn handle_snapshot(State(state): State<AppState>) -> Json<ChatSnapshot> {
    Json(state.chat.lock().await.snapshot())
}
