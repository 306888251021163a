use askama::Template;
use axum::{extract::State, response::Html, Json};

use crate::errors::AppError;
use crate::render::ResumePage;
use crate::resume::ResumeData;
use crate::state::AppState;

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeData> {
    Json((*state.resume).clone())
}

/// GET / — the rendered resume page with the ask panel.
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let body = ResumePage::new(&state.resume)
        .render()
        .map_err(|e| AppError::Render(e.to_string()))?;
    Ok(Html(body))
}
