//! Chatbot response monitoring
//!
//! - **pii**: regex heuristics for email, phone and payment card numbers
//! - **logger**: derives latency/PII/error signals and emits them by severity
//! - **replay**: feeds a recorded JSON batch of interactions through the logger

pub mod logger;
pub mod pii;
pub mod replay;

pub use logger::{ResponseLogger, DEFAULT_LATENCY_WARN_MS};
pub use pii::{contains_pii, PiiKind, PiiScanner};
pub use replay::{replay_file, RecordedInteraction, ReplaySummary};
