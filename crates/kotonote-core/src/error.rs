//! Error types for kotonote-core
//!
//! One propagation policy: store and session operations never swallow
//! failures. The presentation layer decides what degrades.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for kotonote operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    // ===================
    // Remote Store Errors
    // ===================
    #[error("Sheet service unreachable: {message}")]
    Connectivity {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Sheet service rejected {operation}: HTTP {status}")]
    SheetApi { operation: String, status: u16 },

    #[error("Malformed sheet row {row}: expected 2 cells, got {cells}")]
    MalformedRow { row: usize, cells: usize },

    // ===================
    // Validation
    // ===================
    #[error("Required field is empty: {field}")]
    EmptyField { field: &'static str },

    // ===================
    // Positional Guard
    // ===================
    #[error("Position {position} is no longer valid (list has {len} entries)")]
    PositionMismatch { position: usize, len: usize },

    #[error("Record no longer present in the notebook")]
    RecordGone,

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Home directory could not be determined")]
    HomeNotFound,
}

impl CoreError {
    /// True for failures that mean the backing store could not be reached
    /// or understood, as opposed to caller mistakes (validation, stale
    /// positions).
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            CoreError::FileRead { .. }
                | CoreError::FileWrite { .. }
                | CoreError::JsonParse { .. }
                | CoreError::Connectivity { .. }
                | CoreError::SheetApi { .. }
                | CoreError::MalformedRow { .. }
        )
    }
}

/// Availability of the backing store for this session
///
/// Set once after the initial population attempt and surfaced in the UI
/// header; mutations while unavailable keep failing loudly, they are not
/// queued.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DegradedState {
    /// Initial read succeeded, cache mirrors the store
    #[default]
    Healthy,
    /// Initial read failed; session runs on an empty list
    Unavailable { reason: String },
}

impl DegradedState {
    pub fn is_healthy(&self) -> bool {
        matches!(self, DegradedState::Healthy)
    }

    pub fn is_degraded(&self) -> bool {
        !self.is_healthy()
    }

    /// Human-readable reason, if degraded
    pub fn reason(&self) -> Option<&str> {
        match self {
            DegradedState::Healthy => None,
            DegradedState::Unavailable { reason } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_failure_classification() {
        let conn = CoreError::Connectivity {
            message: "dns".into(),
            source: None,
        };
        let stale = CoreError::PositionMismatch {
            position: 3,
            len: 2,
        };
        let empty = CoreError::EmptyField { field: "source" };

        assert!(conn.is_store_failure());
        assert!(!stale.is_store_failure());
        assert!(!empty.is_store_failure());
    }

    #[test]
    fn test_degraded_state_reason() {
        assert!(DegradedState::Healthy.reason().is_none());

        let state = DegradedState::Unavailable {
            reason: "sheet unreachable".to_string(),
        };
        assert!(state.is_degraded());
        assert_eq!(state.reason(), Some("sheet unreachable"));
    }
}
