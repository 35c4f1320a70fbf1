//! Pattern-based PII detection for chatbot responses
//!
//! Heuristic only: obfuscated values slip through and coincidental digit
//! runs are flagged.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Category of personally identifiable information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiKind {
    Email,
    Phone,
    PaymentCard,
}

impl PiiKind {
    pub const ALL: [PiiKind; 3] = [PiiKind::Email, PiiKind::Phone, PiiKind::PaymentCard];

    fn pattern(&self) -> &'static Regex {
        match self {
            PiiKind::Email => email(),
            PiiKind::Phone => phone(),
            PiiKind::PaymentCard => payment_card(),
        }
    }
}

impl std::fmt::Display for PiiKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PiiKind::Email => write!(f, "email"),
            PiiKind::Phone => write!(f, "phone"),
            PiiKind::PaymentCard => write!(f, "payment_card"),
        }
    }
}

/// local@domain.tld
fn email() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").expect("Valid email regex")
    });
    &PATTERN
}

/// 555-123-4567, 555.123.4567, 5551234567
fn phone() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("Valid phone regex")
    });
    &PATTERN
}

/// Four groups of four digits separated by nothing, spaces or dashes
fn payment_card() -> &'static Regex {
    static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)\b\d{4}[- ]?\d{4}[- ]?\d{4}[- ]?\d{4}\b")
            .expect("Valid payment card regex")
    });
    &PATTERN
}

/// Scans free text for PII-shaped substrings
#[derive(Debug, Clone, Copy, Default)]
pub struct PiiScanner;

impl PiiScanner {
    pub fn new() -> Self {
        Self
    }

    /// True if any PII pattern matches anywhere in `text`
    pub fn contains_pii(&self, text: &str) -> bool {
        PiiKind::ALL.iter().any(|kind| kind.pattern().is_match(text))
    }

    /// Every kind of PII found in `text`
    pub fn detect(&self, text: &str) -> Vec<PiiKind> {
        PiiKind::ALL
            .into_iter()
            .filter(|kind| kind.pattern().is_match(text))
            .collect()
    }
}

/// Convenience wrapper around [`PiiScanner::contains_pii`]
pub fn contains_pii(text: &str) -> bool {
    PiiScanner.contains_pii(text)
}
