//! Centralized error types for the work-order board.

use thiserror::Error;

/// Main error type for board operations.
#[derive(Error, Debug)]
pub enum AuftragError {
    /// The referenced work order is not on the board. State is left unchanged.
    #[error("Work order not found: {0}")]
    WorkOrderNotFound(String),

    #[error("Invalid column '{column}'. Valid columns: {valid}")]
    InvalidColumn { column: String, valid: String },

    #[error("Duplicate work order id: {0}")]
    DuplicateId(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for board operations.
pub type AuftragResult<T> = Result<T, AuftragError>;

impl AuftragError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a snapshot error.
    pub fn snapshot(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }

    /// True for outcomes that are a silent no-op on state (stale references).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::WorkOrderNotFound(_))
    }
}
