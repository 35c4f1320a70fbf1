//! Validation rules for submitted feedback
//!
//! Rules, all of which must hold:
//! 1. `user_id`, `feedback_type` and `description` are present (and `user_id`
//!    is not blank)
//! 2. `feedback_type` is one of the accepted [`FeedbackType`] values
//! 3. `description`, trimmed, is at least [`MIN_DESCRIPTION_CHARS`] long

use crate::types::{FeedbackSubmission, FeedbackType};
use thiserror::Error;

/// Minimum length of a trimmed description, in characters
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Reason a submission was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("unknown feedback type '{0}'")]
    UnknownFeedbackType(String),

    #[error("description must be at least {min} characters (got {actual})")]
    DescriptionTooShort { min: usize, actual: usize },
}

/// Check a submission, returning its parsed feedback type on success
pub fn check(submission: &FeedbackSubmission) -> Result<FeedbackType, ValidationFailure> {
    let user_id = submission
        .user_id
        .as_deref()
        .ok_or(ValidationFailure::MissingField("user_id"))?;
    let feedback_type = submission
        .feedback_type
        .as_deref()
        .ok_or(ValidationFailure::MissingField("feedback_type"))?;
    let description = submission
        .description
        .as_deref()
        .ok_or(ValidationFailure::MissingField("description"))?;

    if user_id.trim().is_empty() {
        return Err(ValidationFailure::MissingField("user_id"));
    }

    let feedback_type = feedback_type
        .parse::<FeedbackType>()
        .map_err(ValidationFailure::UnknownFeedbackType)?;

    let actual = description.trim().chars().count();
    if actual < MIN_DESCRIPTION_CHARS {
        return Err(ValidationFailure::DescriptionTooShort {
            min: MIN_DESCRIPTION_CHARS,
            actual,
        });
    }

    Ok(feedback_type)
}

/// Boolean form of [`check`]
pub fn validate(submission: &FeedbackSubmission) -> bool {
    check(submission).is_ok()
}
