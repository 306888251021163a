pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(resume::handle_index))
        .route("/api/v1/resume", get(resume::handle_get_resume))
        .route("/api/v1/ask", get(chat::handle_ask))
        .route("/api/v1/history", get(chat::handle_history))
        .route("/api/v1/history/:id/reuse", post(chat::handle_reuse))
        .route("/api/v1/chat", get(chat::handle_snapshot))
        .route("/api/v1/chat/copy", post(chat::handle_copy))
        .with_state(state)
}
