//! HTTP API server

use super::errors::ApiJson;
use crate::error::{FeedbackError, Result};
use crate::feedback::FeedbackStore;
use crate::monitoring::ResponseLogger;
use crate::types::{FeedbackRecord, FeedbackSubmission, FeedbackType, MonitoringLogEntry};
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc, time::Instant};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    /// Server address
    pub addr: SocketAddr,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            addr: ([127, 0, 0, 1], 8000).into(),
        }
    }
}

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FeedbackStore>,
    pub logger: Arc<ResponseLogger>,
}

impl AppState {
    pub fn new(store: FeedbackStore, logger: ResponseLogger) -> Self {
        Self {
            store: Arc::new(store),
            logger: Arc::new(logger),
        }
    }
}

/// API server
pub struct ApiServer {
    config: ApiServerConfig,
    state: AppState,
}

impl ApiServer {
    /// Create new API server
    pub fn new(config: ApiServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Build router
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Serve until ctrl-c
    pub async fn serve(self) -> anyhow::Result<()> {
        let router = self.router();
        let listener = tokio::net::TcpListener::bind(self.config.addr).await?;

        info!(
            "Feedback API listening on http://{} (store: {})",
            listener.local_addr()?,
            self.state.store.path().display()
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Feedback API shut down complete");
        Ok(())
    }
}

/// Routes for the feedback and monitoring endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Feedback
        .route("/feedback", post(submit_feedback_handler))
        .route("/feedback", get(list_feedback_handler))
        // Monitoring
        .route("/monitor/log", post(log_response_handler))
        // Health check
        .route("/health", get(health_handler))
        // State
        .with_state(state)
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received shutdown signal, stopping gracefully...");
    }
}

/// Submit feedback response
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitFeedbackResponse {
    pub status: String,
    pub feedback: FeedbackRecord,
}

async fn submit_feedback_handler(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<FeedbackSubmission>,
) -> Result<Json<SubmitFeedbackResponse>> {
    let feedback = state.store.collect(submission).await?;

    Ok(Json(SubmitFeedbackResponse {
        status: "success".to_string(),
        feedback,
    }))
}

/// Query parameters for listing feedback
#[derive(Debug, Default, Deserialize)]
pub struct ListFeedbackQuery {
    pub feedback_type: Option<String>,
}

async fn list_feedback_handler(
    State(state): State<AppState>,
    Query(query): Query<ListFeedbackQuery>,
) -> Result<Json<Vec<FeedbackRecord>>> {
    let filter = match query.feedback_type.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<FeedbackType>()
                .map_err(FeedbackError::InvalidFeedbackType)?,
        ),
    };

    let records = state.store.list(filter).await;
    debug!("Listing {} feedback records (filter: {:?})", records.len(), filter);
    Ok(Json(records))
}

/// Log request body
#[derive(Debug, Deserialize)]
pub struct LogRequest {
    pub user_id: String,
    pub query: String,
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Log response body
#[derive(Debug, Serialize, Deserialize)]
pub struct LogResponse {
    pub status: String,
    pub log: MonitoringLogEntry,
}

async fn log_response_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LogRequest>,
) -> Json<LogResponse> {
    let started = Instant::now();
    let log = state.logger.log_response(
        &req.user_id,
        &req.query,
        &req.response,
        started,
        req.error.as_deref(),
    );

    Json(LogResponse {
        status: "logged".to_string(),
        log,
    })
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: state.store.len().await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_state() -> (TempDir, AppState) {
        let dir = TempDir::new().unwrap();
        let store = FeedbackStore::open(dir.path().join("feedback_data.json"));
        (dir, AppState::new(store, ResponseLogger::default()))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (_dir, state) = test_state();
        let response = health_handler(State(state)).await;
        assert_eq!(response.0.status, "ok");
        assert_eq!(response.0.records, 0);
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_type() {
        let (_dir, state) = test_state();
        let result = list_feedback_handler(
            State(state),
            Query(ListFeedbackQuery {
                feedback_type: Some("praise".to_string()),
            }),
        )
        .await;
        assert!(matches!(result, Err(FeedbackError::InvalidFeedbackType(_))));
    }

    #[tokio::test]
    async fn test_log_handler_wraps_entry() {
        let (_dir, state) = test_state();
        let response = log_response_handler(
            State(state),
            ApiJson(LogRequest {
                user_id: "u1".to_string(),
                query: "status?".to_string(),
                response: "All systems normal".to_string(),
                error: Some("timeout".to_string()),
            }),
        )
        .await;
        assert_eq!(response.0.status, "logged");
        assert_eq!(response.0.log.error.as_deref(), Some("timeout"));
        assert!(!response.0.log.has_pii);
    }
}
