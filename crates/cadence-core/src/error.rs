//! Error types for the content planner library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ContentPlanStatus;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum CadenceError {
    /// No caller identity was supplied
    #[error("Unauthorized: a user identifier is required")]
    Unauthorized,
    /// Content plan missing or owned by another user
    #[error("Content plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// Post missing or owned by another user
    #[error("Post with ID {id} not found")]
    PostNotFound { id: u64 },
    /// Rubric missing or owned by another user
    #[error("Rubric with ID {id} not found")]
    RubricNotFound { id: u64 },
    /// Unknown social network
    #[error("Social network with ID {id} not found")]
    NetworkNotFound { id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Generation refused because of the plan's current status
    #[error("Content plan {id} cannot be generated while {status}")]
    GenerationConflict { id: u64, status: ContentPlanStatus },
    /// Generation started but could not be completed; nothing was persisted
    #[error("Generation of content plan {id} failed: {source}")]
    GenerationFailure {
        id: u64,
        #[source]
        source: Box<CadenceError>,
    },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> CadenceError {
        CadenceError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CadenceError {
        CadenceError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CadenceError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps an error raised inside the generation unit.
    pub fn generation_failure(id: u64, source: CadenceError) -> Self {
        CadenceError::GenerationFailure {
            id,
            source: Box::new(source),
        }
    }

    /// True for the "missing or not yours" family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CadenceError::PlanNotFound { .. }
                | CadenceError::PostNotFound { .. }
                | CadenceError::RubricNotFound { .. }
                | CadenceError::NetworkNotFound { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CadenceError::database(message).with_source(e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, CadenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failure_keeps_source_message() {
        let inner = CadenceError::invalid_input("posts").with_reason("boom");
        let err = CadenceError::generation_failure(7, inner);

        let message = err.to_string();
        assert!(message.contains("Generation of content plan 7 failed"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn test_not_found_family() {
        assert!(CadenceError::PlanNotFound { id: 1 }.is_not_found());
        assert!(CadenceError::PostNotFound { id: 1 }.is_not_found());
        assert!(!CadenceError::Unauthorized.is_not_found());
    }
}
