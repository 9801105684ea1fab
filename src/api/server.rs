//! HTTP server implementation

use std::sync::Arc;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing::warn;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::chatbot::FaqBot;
use crate::config::AppConfig;
use crate::database::ConversationLog;
use crate::Result;

/// Build the application router with its middleware layers
pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let mut app = routes::api_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Open the conversation log if enabled; failures only disable logging
async fn open_conversation_log(config: &AppConfig) -> Option<Arc<ConversationLog>> {
    if !config.conversation_log_enabled() {
        info!("💡 Conversation logging disabled");
        return None;
    }

    let log = match ConversationLog::from_config(config).await {
        Ok(log) => log,
        Err(e) => {
            warn!("Conversation log unavailable, continuing without it: {}", e);
            return None;
        }
    };

    if let Err(e) = log.init_schema().await {
        warn!("Conversation log schema setup failed, continuing without it: {}", e);
        return None;
    }

    info!("📝 Logging conversations to {}", config.database_url());
    Some(Arc::new(log))
}

/// Start the API server
pub async fn serve_api(config: &AppConfig, host: String, port: u16, enable_cors: bool) -> Result<()> {
    info!("🚀 Starting FAQ bot server...");

    // Knowledge base is built once and shared read-only
    let bot = Arc::new(FaqBot::from_config(config)?);
    info!(
        "📚 {} FAQ entries loaded (threshold {})",
        bot.knowledge().len(),
        bot.threshold()
    );

    let conversation_log = open_conversation_log(config).await;
    let state = AppState::new(bot, conversation_log);

    if enable_cors {
        info!("✅ CORS enabled");
    }
    let app = build_router(state, enable_cors);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET  /        - Chat page");
    info!("  POST /chat    - Ask a question");
    info!("  GET  /health  - Health check");

    axum::serve(listener, app).await?;

    Ok(())
}
