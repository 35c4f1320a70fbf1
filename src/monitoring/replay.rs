//! Replay a recorded batch of chatbot interactions through the logger
//!
//! The input is a JSON array of `{user_id, query, response, error?}`
//! objects, as exported from a chatbot transcript.

use super::logger::ResponseLogger;
use crate::error::{FeedbackError, Result};
use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error};

/// One recorded interaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedInteraction {
    pub user_id: String,
    pub query: String,
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Counts of replayed entries by severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub total: usize,
    pub info: usize,
    pub warning: usize,
    pub error: usize,
    pub with_pii: usize,
}

impl ReplaySummary {
    fn record(&mut self, severity: Severity, has_pii: bool) {
        self.total += 1;
        match severity {
            Severity::Info => self.info += 1,
            Severity::Warning => self.warning += 1,
            Severity::Error => self.error += 1,
        }
        if has_pii {
            self.with_pii += 1;
        }
    }
}

/// Log every interaction in `path`
///
/// A missing file or malformed JSON is logged and returned as an error
/// before any entry is emitted.
pub async fn replay_file<P: AsRef<Path>>(
    logger: &ResponseLogger,
    path: P,
) -> Result<ReplaySummary> {
    let path = path.as_ref();

    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        error!("Log file {} could not be read: {}", path.display(), e);
        FeedbackError::Io(e)
    })?;

    let interactions: Vec<RecordedInteraction> = serde_json::from_str(&raw).map_err(|e| {
        error!("Invalid JSON format in log file {}: {}", path.display(), e);
        FeedbackError::Serialization(e)
    })?;

    debug!(
        "Replaying {} interactions from {}",
        interactions.len(),
        path.display()
    );

    Ok(replay(logger, &interactions))
}

/// Log each interaction in order
pub fn replay(logger: &ResponseLogger, interactions: &[RecordedInteraction]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for interaction in interactions {
        let started = Instant::now();
        let entry = logger.build_entry(
            &interaction.user_id,
            &interaction.query,
            &interaction.response,
            started,
            interaction.error.as_deref(),
        );
        let severity = logger.emit(&entry);
        summary.record(severity, entry.has_pii);
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> serde_json::Value {
        serde_json::json!([
            {
                "user_id": "user123",
                "query": "What's my email?",
                "response": "Your email is john.doe@example.com",
                "error": null
            },
            {
                "user_id": "user456",
                "query": "How do I reset password?",
                "response": "Visit settings and click reset"
            },
            {
                "user_id": "user789",
                "query": "What's my phone?",
                "response": "Your number is 555-123-4567",
                "error": "upstream timeout"
            }
        ])
    }

    #[tokio::test]
    async fn test_replay_file_counts_severities() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample_chatbot_logs.json");
        std::fs::write(&path, serde_json::to_string_pretty(&sample()).unwrap()).unwrap();

        let summary = replay_file(&ResponseLogger::default(), &path).await.unwrap();
        assert_eq!(
            summary,
            ReplaySummary {
                total: 3,
                info: 1,
                warning: 1,
                error: 1,
                with_pii: 2,
            }
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = replay_file(&ResponseLogger::default(), dir.path().join("nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::Io(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[{\"user_id\": 1").unwrap();

        let err = replay_file(&ResponseLogger::default(), &path)
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::Serialization(_)));
    }
}
