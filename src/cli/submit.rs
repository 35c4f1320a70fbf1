//! Feedback submission command

use feedback_monitor_core::{
    error::Result, FeedbackStore, FeedbackSubmission, Metadata, ServiceConfig,
};
use tracing::{debug, warn};

/// Ratings outside this range are dropped from the metadata
const RATING_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

/// Handle feedback submission command
pub async fn handle(
    config: &ServiceConfig,
    user_id: String,
    feedback_type: String,
    description: String,
    conversation_id: Option<String>,
    rating: Option<i64>,
) -> Result<()> {
    let submission = FeedbackSubmission::new(user_id.trim(), feedback_type, description.trim())
        .with_metadata(build_metadata(conversation_id, rating));

    debug!("Submitting feedback to {}", config.store_path.display());
    let store = FeedbackStore::open(&config.store_path);

    let record = store.collect(submission).await?;
    println!("Feedback submitted successfully! ID: {}", record.feedback_id);
    Ok(())
}

fn build_metadata(conversation_id: Option<String>, rating: Option<i64>) -> Metadata {
    let mut metadata = Metadata::new();

    if let Some(id) = conversation_id.map(|c| c.trim().to_string()) {
        if !id.is_empty() {
            metadata.insert("conversation_id".to_string(), id.into());
        }
    }

    match rating {
        Some(r) if RATING_RANGE.contains(&r) => {
            metadata.insert("rating".to_string(), r.into());
        }
        Some(r) => warn!("Rating must be between 1 and 5 (got {}), ignoring", r),
        None => {}
    }

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback_monitor_core::{FeedbackError, ValidationFailure};
    use tempfile::TempDir;

    fn temp_config() -> (TempDir, ServiceConfig) {
        let dir = TempDir::new().unwrap();
        let config = ServiceConfig {
            store_path: dir.path().join("feedback_data.json"),
            ..ServiceConfig::default()
        };
        (dir, config)
    }

    #[tokio::test]
    async fn test_submit_returns_validation_error() {
        let (_dir, config) = temp_config();

        let result = handle(
            &config,
            "u1".to_string(),
            "bug_report".to_string(),
            "short".to_string(),
            None,
            None,
        )
        .await;

        assert!(matches!(
            result,
            Err(FeedbackError::InvalidFeedback(
                ValidationFailure::DescriptionTooShort { .. }
            ))
        ));
        assert!(!config.store_path.exists());
    }

    #[tokio::test]
    async fn test_submit_stores_record() {
        let (_dir, config) = temp_config();

        handle(
            &config,
            " u1 ".to_string(),
            "feature_request".to_string(),
            "Please add order tracking".to_string(),
            Some("conv_1".to_string()),
            Some(4),
        )
        .await
        .unwrap();

        let records = FeedbackStore::open(&config.store_path).list(None).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, "u1");
        assert_eq!(records[0].metadata["rating"], 4);
    }

    #[test]
    fn test_metadata_keeps_valid_fields() {
        let metadata = build_metadata(Some(" conv_abc123 ".to_string()), Some(2));
        assert_eq!(metadata["conversation_id"], "conv_abc123");
        assert_eq!(metadata["rating"], 2);
    }

    #[test]
    fn test_metadata_drops_out_of_range_rating() {
        let metadata = build_metadata(Some(String::new()), Some(7));
        assert!(metadata.is_empty());
    }
}
