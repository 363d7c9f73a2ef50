//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitwcError`] which provides error handling for all
//! gitwc operations. It uses `thiserror` for ergonomic error definitions.
//!
//! # Public API
//! - [`GitwcError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitwcError>`
//!
//! # Error Categories
//! - **Precondition violations**: Walking history on an absent branch handle
//! - **Backend failures**: git2 library errors, I/O errors — always fatal,
//!   never swallowed
//! - **Data errors**: Out-of-range timestamps, unknown revision identifiers
//!
//! Expected absences are *not* errors: a location that is not a repository
//! becomes an absent [`Branch`](crate::core::branch::Branch) handle, a file
//! whose content cannot be read yields zeroed metrics, and the first revision
//! diffs against the empty tree.

use thiserror::Error;

/// Domain-specific error types for gitwc
#[derive(Error, Debug)]
pub enum GitwcError {
    /// `history()` was called on an absent branch handle. Callers must check
    /// `is_present()` before walking; this is a precondition violation, never
    /// a silently-empty result.
    #[error("Not a git repository")]
    BranchAbsent,

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Revision {0} is not part of the walked history")]
    UnknownRevision(String),

    #[error("Revision timestamp out of range: {seconds}s at offset {offset_minutes}m")]
    TimestampOutOfRange { seconds: i64, offset_minutes: i32 },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using GitwcError
pub type Result<T> = std::result::Result<T, GitwcError>;

impl GitwcError {
    /// Create an unknown revision error from any displayable identifier
    pub fn unknown_revision(id: impl ToString) -> Self {
        Self::UnknownRevision(id.to_string())
    }

    /// Create a timestamp out of range error
    pub fn timestamp_out_of_range(seconds: i64, offset_minutes: i32) -> Self {
        Self::TimestampOutOfRange {
            seconds,
            offset_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_absent_display() {
        let err = GitwcError::BranchAbsent;
        assert_eq!(err.to_string(), "Not a git repository");
    }

    #[test]
    fn test_unknown_revision_display() {
        let err = GitwcError::unknown_revision("deadbeef");
        assert_eq!(
            err.to_string(),
            "Revision deadbeef is not part of the walked history"
        );
    }

    #[test]
    fn test_timestamp_out_of_range_display() {
        let err = GitwcError::timestamp_out_of_range(i64::MAX, 120);
        assert!(err.to_string().contains("out of range"));
        assert!(err.to_string().contains("120m"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GitwcError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
