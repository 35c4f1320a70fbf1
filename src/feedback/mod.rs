//! User feedback collection
//!
//! - **validator**: shape and value rules a submission must satisfy
//! - **store**: the JSON file backed collection of accepted feedback

pub mod store;
pub mod validator;

pub use store::FeedbackStore;
pub use validator::{validate, ValidationFailure, MIN_DESCRIPTION_CHARS};
