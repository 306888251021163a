use std::sync::Arc;

use tokio::sync::Mutex;

use crate::chat::ChatState;
use crate::rag_client::QuestionAnswerer;
use crate::resume::ResumeData;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Parsed once at startup from the raw document; immutable afterward.
    pub resume: Arc<ResumeData>,
    /// Chat state manager. The lock is never held across the backend call.
    pub chat: Arc<Mutex<ChatState>>,
    /// Pluggable answer source. Production: `RagClient`; tests swap in fakes.
    pub backend: Arc<dyn QuestionAnswerer>,
}
