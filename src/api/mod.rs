//! HTTP API for feedback submission and response monitoring
//!
//! Provides:
//! - `POST /feedback` and `GET /feedback` backed by the feedback store
//! - `POST /monitor/log` backed by the response logger
//! - `GET /health`

pub mod errors;
pub mod server;

pub use errors::{ApiJson, ErrorBody};
pub use server::{ApiServer, ApiServerConfig, AppState};
