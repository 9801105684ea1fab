//! API request handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use tracing::info;
use tracing::warn;

use crate::api::page::INDEX_HTML;
use crate::api::types::*;
use crate::chatbot::FaqBot;
use crate::database::ConversationLog;

/// Reply to a request without a usable message
pub const NO_MESSAGE_ERROR: &str = "No message provided";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub bot: Arc<FaqBot>,
    /// `None` when conversation logging is disabled
    pub conversation_log: Option<Arc<ConversationLog>>,
}

impl AppState {
    pub fn new(bot: Arc<FaqBot>, conversation_log: Option<Arc<ConversationLog>>) -> Self {
        Self {
            bot,
            conversation_log,
        }
    }
}

/// Chat page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check handler
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Answer one chat message
pub async fn chat(
    State(state): State<AppState>,
    payload: Option<Json<ChatRequest>>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let message = payload
        .and_then(|Json(req)| req.message)
        .map(|m| m.trim().to_string())
        .unwrap_or_default();

    if message.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(NO_MESSAGE_ERROR)),
        ));
    }

    info!("POST /chat: {}", message);
    let response = state.bot.get_response(&message);

    if let Some(log) = &state.conversation_log {
        if let Err(e) = log.log(&message, &response).await {
            warn!("Failed to record conversation: {}", e);
        }
    }

    Ok(Json(ChatResponse { response }))
}
