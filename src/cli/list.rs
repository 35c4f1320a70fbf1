//! Feedback listing command

use feedback_monitor_core::{
    error::{FeedbackError, Result},
    utils::string::truncate_at_char_boundary,
    FeedbackStore, FeedbackType, ServiceConfig,
};

/// Characters of each description shown in the listing
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Handle feedback listing command
pub async fn handle(config: &ServiceConfig, feedback_type: Option<String>) -> Result<()> {
    let filter = feedback_type
        .map(|t| t.parse::<FeedbackType>())
        .transpose()
        .map_err(FeedbackError::InvalidFeedbackType)?;

    let store = FeedbackStore::open(&config.store_path);
    let records = store.list(filter).await;

    if records.is_empty() {
        println!("No feedback found");
        return Ok(());
    }

    println!("=== Collected Feedback ({}) ===", records.len());
    for record in records {
        println!();
        println!("ID: {}", record.feedback_id);
        println!("Type: {}", record.feedback_type);
        println!("User: {}", record.user_id);
        println!(
            "Description: {}",
            truncate_at_char_boundary(&record.description, DESCRIPTION_PREVIEW_CHARS)
        );
    }

    Ok(())
}
