//! Per-file size and non-blank line/word/character counting.
//!
//! # Counting convention
//! The backend splits file content into lines with their terminators
//! preserved, and character counts include that terminator — `chars` for
//! `"foo\n"` is 4. Lines consisting only of whitespace count toward nothing.
//! Counts are in `char`s, not bytes; `bytes` is the backend-reported size.

use crate::core::backend::{FileRef, TreeId, VcsBackend};
use serde::Serialize;

/// Non-blank line, word and character counts for one file snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileMetrics {
    pub lines: u64,
    pub words: u64,
    pub chars: u64,
}

impl FileMetrics {
    /// Count over a line sequence. Blank lines (empty after trimming) are
    /// skipped entirely; other lines contribute one line, their
    /// whitespace-delimited token count, and their full character length.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut metrics = FileMetrics::default();
        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            metrics.lines += 1;
            metrics.words += line.split_whitespace().count() as u64;
            metrics.chars += line.chars().count() as u64;
        }
        metrics
    }
}

/// One tracked file at one revision, with its metrics computed eagerly at
/// construction from a single read of the file's content.
///
/// A file whose content or size cannot be retrieved (deleted/renamed edge
/// cases) yields all-zero metrics; construction itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHandle {
    pub name: String,
    #[serde(flatten)]
    pub metrics: FileMetrics,
    pub bytes: u64,
}

impl FileHandle {
    pub(crate) fn new<B: VcsBackend>(backend: &B, tree: &TreeId, file: &FileRef) -> Self {
        let metrics = match backend.file_lines(tree, &file.id) {
            Ok(Some(lines)) => FileMetrics::from_lines(&lines),
            Ok(None) => FileMetrics::default(),
            Err(e) => {
                log::warn!("could not read {}: {e}", file.name);
                FileMetrics::default()
            }
        };

        let bytes = match backend.file_size(tree, &file.id) {
            Ok(size) => size.unwrap_or(0),
            Err(e) => {
                log::warn!("could not size {}: {e}", file.name);
                0
            }
        };

        FileHandle {
            name: file.name.clone(),
            metrics,
            bytes,
        }
    }
}
