//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::deal::DealStage;

/// Main error type for Fathom
///
/// Every variant except `Storage` is recoverable at the UI layer: the form
/// stays open, the offending fields are highlighted, and nothing is
/// persisted. Validation always runs before any external write.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum FathomError {
    /// A stage move was refused; `missing` lists the required fields of the
    /// departing stage that are still empty.
    #[error("invalid transition from '{from}' to '{to}': missing required fields [{}]", missing.join(", "))]
    InvalidTransition { from: DealStage, to: DealStage, missing: Vec<String> },

    #[error("invalid time format: {0} (expected HH:mm)")]
    InvalidTimeFormat(String),

    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("date/time is in the past: {0}")]
    PastDateTime(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type alias for Fathom operations
pub type Result<T> = std::result::Result<T, FathomError>;
