//! Error types for arcana_core
//!
//! This module provides structured error handling using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for derivation operations
pub type Result<T> = std::result::Result<T, ArcanaError>;

/// Errors that can occur while building symbol tables or indexing the cycle
#[derive(Error, Debug)]
pub enum ArcanaError {
    /// Center archetype is not part of the cycle
    #[error("Archetype not found in cycle: {id}")]
    ArchetypeNotFound { id: String },

    /// Archetype cycle has the wrong number of entries
    #[error("Archetype cycle must have {expected} entries, found {found}")]
    InvalidCycleLength { expected: usize, found: usize },

    /// Archetype cycle contains a repeated identifier
    #[error("Duplicate archetype in cycle: {id}")]
    DuplicateArchetype { id: String },

    /// Symbol table contents failed validation
    #[error("Invalid symbol tables: {message}")]
    InvalidTables { message: String },

    /// Symbol table override file missing
    #[error("Table file not found: {path}")]
    TableFileNotFound { path: PathBuf },

    /// IO error during table loading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ArcanaError>,
    },
}

impl ArcanaError {
    /// Wrap an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ArcanaError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create an archetype-not-found error
    pub fn archetype_not_found(id: impl Into<String>) -> Self {
        ArcanaError::ArchetypeNotFound { id: id.into() }
    }

    /// Create an invalid tables error
    pub fn invalid_tables(message: impl Into<String>) -> Self {
        ArcanaError::InvalidTables {
            message: message.into(),
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(ctx))
    }
}
