mod chat;
mod config;
mod errors;
mod rag_client;
mod render;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::history::InteractionHistory;
use crate::chat::ChatState;
use crate::config::Config;
use crate::rag_client::{QuestionAnswerer, RagClient};
use crate::resume::source::ResumeDocument;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume Q&A API v{}", env!("CARGO_PKG_VERSION"));

    // Parse the resume document once; it is immutable for the process lifetime.
    let document = ResumeDocument::load(config.resume_path.as_deref())?;
    let resume = Arc::new(resume::parse(&document));
    info!(
        "Resume parsed for {}: {} education / {} experience / {} project entries",
        resume.name,
        resume.education.len(),
        resume.experience.len(),
        resume.projects.len()
    );

    // Restore persisted history; a missing or corrupt file starts empty.
    let history = InteractionHistory::load(&config.history_path);
    info!(
        "Loaded {} past interactions from {}",
        history.len(),
        config.history_path.display()
    );
    let chat = Arc::new(Mutex::new(ChatState::new(history)));

    let backend: Arc<dyn QuestionAnswerer> = Arc::new(RagClient::new(
        config.backend_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    ));
    info!("RAG backend client initialized ({})", config.backend_url);

    let state = AppState {
        resume,
        chat,
        backend,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the upstream backend runs wide-open CORS too

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
