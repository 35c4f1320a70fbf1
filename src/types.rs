//! Core data types for the feedback monitor
//!
//! This module defines the records that flow through the service: user
//! feedback (durable, stored in the feedback collection) and monitoring log
//! entries (ephemeral, emitted to the diagnostic log stream only).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Free-form metadata attached to feedback
///
/// Keys are ordered so that serialized records are deterministic.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Unique identifier for feedback records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(pub Uuid);

impl FeedbackId {
    /// Create a new random feedback ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FeedbackId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of feedback a user can submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    BugReport,
    FeatureRequest,
    GeneralFeedback,
    IncorrectResponse,
}

impl FeedbackType {
    /// All accepted feedback types, in presentation order
    pub const ALL: [FeedbackType; 4] = [
        FeedbackType::BugReport,
        FeedbackType::FeatureRequest,
        FeedbackType::GeneralFeedback,
        FeedbackType::IncorrectResponse,
    ];

    /// Wire name of this feedback type
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackType::BugReport => "bug_report",
            FeedbackType::FeatureRequest => "feature_request",
            FeedbackType::GeneralFeedback => "general_feedback",
            FeedbackType::IncorrectResponse => "incorrect_response",
        }
    }
}

impl std::fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FeedbackType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeedbackType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Raw feedback as submitted by a caller, before validation
///
/// Every field is optional so that a missing key is reported as a
/// validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub feedback_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl FeedbackSubmission {
    pub fn new(
        user_id: impl Into<String>,
        feedback_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            user_id: Some(user_id.into()),
            feedback_type: Some(feedback_type.into()),
            description: Some(description.into()),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// A persisted piece of user feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub feedback_id: FeedbackId,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub feedback_type: FeedbackType,
    pub description: String,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Diagnostic severity assigned to a monitoring log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Monitoring view of one chatbot interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringLogEntry {
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub query: String,
    pub response: String,
    /// Elapsed milliseconds, rounded to two decimals
    pub latency_ms: f64,
    pub has_pii: bool,
    pub error: Option<String>,
    /// Response length in characters
    pub response_length: usize,
}

/// ISO-8601 UTC timestamps with a `Z` suffix and microsecond precision
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(time: &DateTime<Utc>) -> String {
        time.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    pub fn serialize<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
