//! Feedback Monitor - chatbot feedback collection and response monitoring
//!
//! Provides:
//! - Validated user feedback stored in a JSON file collection
//! - Monitoring records for chatbot responses (latency, PII, errors)
//! - An HTTP API over both
//!
//! # Architecture
//!
//! - **Types**: Core records (FeedbackRecord, MonitoringLogEntry, etc.)
//! - **Feedback**: Validation rules and the single-writer feedback store
//! - **Monitoring**: PII scanning, severity classification, batch replay
//! - **API**: axum router exposing the feedback and monitoring endpoints
//!
//! # Example
//!
//! ```ignore
//! use feedback_monitor_core::{FeedbackStore, FeedbackSubmission, FeedbackType};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = FeedbackStore::open("feedback_data.json");
//!
//!     let record = store
//!         .collect(FeedbackSubmission::new(
//!             "u1",
//!             "bug_report",
//!             "Bot gave wrong refund info",
//!         ))
//!         .await?;
//!
//!     let bugs = store.list(Some(FeedbackType::BugReport)).await;
//!     assert!(bugs.contains(&record));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod feedback;
pub mod monitoring;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use crate::config::ServiceConfig;
pub use error::{FeedbackError, Result};
pub use feedback::{FeedbackStore, ValidationFailure};
pub use monitoring::{PiiScanner, ResponseLogger};
pub use types::{
    FeedbackId, FeedbackRecord, FeedbackSubmission, FeedbackType, Metadata, MonitoringLogEntry,
    Severity,
};
