//! Monitoring records for chatbot interactions
//!
//! [`ResponseLogger`] turns one query/response pair into a
//! [`MonitoringLogEntry`] and emits it on the diagnostic log stream at a
//! severity chosen in priority order:
//!
//! 1. the interaction carried an error -> error
//! 2. the response contains PII -> warning
//! 3. latency above the threshold -> warning
//! 4. otherwise -> info
//!
//! Nothing here is persisted.

use super::pii::PiiScanner;
use crate::types::{MonitoringLogEntry, Severity};
use chrono::Utc;
use std::time::Instant;
use tracing::{error, info, warn};

/// Default latency above which a response is reported as slow
pub const DEFAULT_LATENCY_WARN_MS: f64 = 1000.0;

/// Builds and emits monitoring log entries
#[derive(Debug, Clone)]
pub struct ResponseLogger {
    scanner: PiiScanner,
    latency_warn_ms: f64,
}

impl Default for ResponseLogger {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY_WARN_MS)
    }
}

impl ResponseLogger {
    pub fn new(latency_warn_ms: f64) -> Self {
        Self {
            scanner: PiiScanner::new(),
            latency_warn_ms,
        }
    }

    /// Build the entry for an interaction and emit it at its severity
    pub fn log_response(
        &self,
        user_id: &str,
        query: &str,
        response: &str,
        started: Instant,
        error: Option<&str>,
    ) -> MonitoringLogEntry {
        let entry = self.build_entry(user_id, query, response, started, error);
        self.emit(&entry);
        entry
    }

    /// Assemble the entry without emitting it
    pub fn build_entry(
        &self,
        user_id: &str,
        query: &str,
        response: &str,
        started: Instant,
        error: Option<&str>,
    ) -> MonitoringLogEntry {
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        MonitoringLogEntry {
            timestamp: Utc::now(),
            user_id: user_id.to_string(),
            query: query.to_string(),
            response: response.to_string(),
            latency_ms: round_2dp(elapsed_ms),
            has_pii: self.scanner.contains_pii(response),
            error: error.map(str::to_string),
            response_length: response.chars().count(),
        }
    }

    /// Severity of an entry; does not modify it
    pub fn classify(&self, entry: &MonitoringLogEntry) -> Severity {
        if entry.error.is_some() {
            Severity::Error
        } else if entry.has_pii || entry.latency_ms > self.latency_warn_ms {
            Severity::Warning
        } else {
            Severity::Info
        }
    }

    /// Write the entry to the log stream at its severity
    pub fn emit(&self, entry: &MonitoringLogEntry) -> Severity {
        let severity = self.classify(entry);
        let record = serde_json::to_string(entry).unwrap_or_else(|_| format!("{:?}", entry));

        match severity {
            Severity::Error => error!(
                target: "feedback_monitor::monitor",
                user_id = %entry.user_id,
                latency_ms = entry.latency_ms,
                "Error response: {}",
                record
            ),
            Severity::Warning if entry.has_pii => warn!(
                target: "feedback_monitor::monitor",
                user_id = %entry.user_id,
                pii = ?self.scanner.detect(&entry.response),
                "PII detected: {}",
                record
            ),
            Severity::Warning => warn!(
                target: "feedback_monitor::monitor",
                user_id = %entry.user_id,
                latency_ms = entry.latency_ms,
                "High latency: {}",
                record
            ),
            Severity::Info => info!(
                target: "feedback_monitor::monitor",
                user_id = %entry.user_id,
                "Response logged: {}",
                record
            ),
        }

        severity
    }
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
