//! gitwc - A history walker and metric-extraction engine for git repositories.
//!
//! This library turns a repository into an ordered, lazily-computed stream of
//! per-revision and per-file statistics: for every revision of the branch's
//! linear history it reports the author, timestamp, sequence number and a
//! diffstat against the previous revision, and for every tracked file at a
//! revision it reports byte size plus non-blank line/word/character counts.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`Branch`]: present/absent repository handle and history entry point
//! - [`RevisionView`]: one revision with lazily cached statistics
//! - [`DiffClassifier`] / [`FileMetrics`]: the pure counting components
//! - [`VcsBackend`] / [`GitBackend`]: the backend seam and its git2 binding
//!
//! # Example
//! ```no_run
//! use gitwc::Branch;
//!
//! let branch = Branch::open(".").unwrap();
//! if branch.is_present() {
//!     for view in branch.history().unwrap() {
//!         let stats = view.diffstat().unwrap();
//!         println!(
//!             "{} {} +{} -{}",
//!             view.sequence_number().unwrap(),
//!             view.author().unwrap(),
//!             stats.additions,
//!             stats.deletions,
//!         );
//!     }
//! }
//! ```

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    format_file_row,
    format_revision_row,
    print_error,
    print_section_header,

    // History walking
    Branch,

    // Statistics
    DiffClassifier,
    DiffStat,
    FileHandle,
    FileId,
    FileMetrics,
    FileRef,

    // Backend seam
    GitBackend,

    // Error handling
    GitwcError,
    History,
    Result,
    RevisionId,
    RevisionMetadata,
    RevisionView,
    TreeId,
    VcsBackend,
};
