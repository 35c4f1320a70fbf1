//! HTTP API server command

use feedback_monitor_core::{
    api::{ApiServer, ApiServerConfig, AppState},
    FeedbackStore, ResponseLogger, ServiceConfig,
};
use tracing::debug;

/// Handle API server startup command
pub async fn handle(config: &ServiceConfig) -> anyhow::Result<()> {
    debug!("Starting HTTP API server...");

    let state = AppState::new(
        FeedbackStore::open(&config.store_path),
        ResponseLogger::new(config.latency_warn_ms),
    );
    let server = ApiServer::new(ApiServerConfig { addr: config.addr }, state);

    println!();
    println!("Chatbot Feedback & Monitoring API");
    println!();
    println!("   Address: http://{}", config.addr);
    println!("   Store:   {}", config.store_path.display());
    println!();
    println!("   Endpoints:");
    println!("   - POST /feedback - Submit feedback");
    println!("   - GET  /feedback?feedback_type=<type> - List feedback");
    println!("   - POST /monitor/log - Log a chatbot response");
    println!("   - GET  /health - Health check");
    println!();

    server.serve().await
}
