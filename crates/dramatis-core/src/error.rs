//! Error types for dramatis operations.
//!
//! The resolution core is total: extraction, matching, clustering, and graph
//! construction accept any input and degrade to empty results rather than
//! failing. The error type therefore covers only the genuinely fallible
//! surfaces (engine configuration and linkage review transitions) plus
//! serialization at the system boundary.

use thiserror::Error;

use crate::types::LinkageStatus;

/// Result type alias for dramatis operations.
pub type DramatisResult<T> = Result<T, DramatisError>;

/// Main error type for all dramatis operations.
#[derive(Error, Debug)]
pub enum DramatisError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Illegal linkage status transition.
    ///
    /// Proposals move from pending to accepted or rejected exactly once;
    /// anything else is rejected here rather than silently overwritten.
    #[error("Illegal linkage transition: {from} -> {to}")]
    LinkageTransition {
        from: LinkageStatus,
        to: LinkageStatus,
    },

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DramatisError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a linkage transition error.
    pub fn linkage_transition(from: LinkageStatus, to: LinkageStatus) -> Self {
        Self::LinkageTransition { from, to }
    }
}
