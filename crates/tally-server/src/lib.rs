//! Tally Web Server
//!
//! Axum-based REST API exposing the monthly analytics report and the AI
//! insights endpoint. Transport concerns live here; all analysis and storage
//! logic lives in `tally-core`.
//!
//! - Restrictive surface: three GET routes, no mutation endpoints
//! - Sanitized error responses (full errors go to the log)
//! - User identity arrives as a path parameter; authentication is external

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use tally_core::ai::{AIClient, InsightBackend};
use tally_core::db::Database;

mod handlers;

/// Shared application state
pub struct AppState {
    pub db: Database,
    /// Advice backend; None disables the insights endpoint
    pub ai: Option<AIClient>,
}

/// Create the application router
pub fn create_router(db: Database, ai: Option<AIClient>) -> Router {
    let state = Arc::new(AppState { db, ai });

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/users/:user_id/analytics", get(handlers::get_analytics))
        .route("/users/:user_id/insights", get(handlers::get_insights))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Run the server until shutdown
pub async fn run_server(
    db: Database,
    ai: Option<AIClient>,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    match ai {
        Some(ref client) => {
            if client.health_check().await {
                info!(model = client.model(), "AI backend connected");
            } else {
                warn!(model = client.model(), "AI backend configured but not responding");
            }
        }
        None => {
            info!("AI backend not configured (set OLLAMA_HOST or AI_BACKEND=mock to enable insights)");
        }
    }

    let app = create_router(db, ai);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn service_unavailable(msg: &str) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<tally_core::Error> for AppError {
    fn from(err: tally_core::Error) -> Self {
        use tally_core::Error;

        let status = match &err {
            Error::InvalidPeriod(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            Self {
                status,
                // Return generic message to client
                message: "An internal error occurred".to_string(),
                // Keep full error for logging
                internal: Some(anyhow::Error::new(err)),
            }
        } else {
            Self {
                status,
                message: err.to_string(),
                internal: None,
            }
        }
    }
}
