//! Core functionality for the gitwc tool.
//!
//! This module provides the fundamental building blocks for walking branch
//! history and extracting per-revision and per-file statistics.

pub mod backend;
pub mod branch;
pub mod diffstat;
pub mod error;
pub mod metrics;
pub mod output;
pub mod revision;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{GitwcError, Result};

// === Backend seam ===
// Version-control backend trait, its git2 implementation, and the opaque
// token types exchanged across the seam
pub use backend::{
    FileId, FileRef, GitBackend, RevisionId, RevisionMetadata, TreeId, VcsBackend,
};

// === History walking ===
// Branch handle (present/absent) and the chronological revision walker
pub use branch::{Branch, History};
pub use revision::RevisionView;

// === Statistics ===
// Pure diff classification and per-file metric counting
pub use diffstat::{DiffClassifier, DiffStat};
pub use metrics::{FileHandle, FileMetrics};

// === Output formatting ===
// Row and message formatting for consistent CLI presentation
pub use output::{format_file_row, format_revision_row, print_error, print_section_header};
