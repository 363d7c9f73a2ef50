//! Streaming classification of unified-diff text into added/removed counts.
//!
//! [`DiffClassifier`] is a pure accumulator: it never buffers the diff and
//! never produces output of its own. Callers that want to see the raw diff
//! attach their own sink (the revision view streams it through `log::trace!`).

use serde::Serialize;

/// Aggregate added/removed line counts between two tree snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStat {
    pub additions: u64,
    pub deletions: u64,
}

/// Line-oriented sink that classifies unified-diff text.
///
/// A line starting with a single `+` counts as an addition, a single `-` as a
/// deletion; the doubled prefixes of the `+++`/`---` file-header lines are
/// excluded, and everything else (context, `@@` hunk headers, "no newline"
/// markers) is ignored. Counts can be read at any point of the stream.
#[derive(Debug, Default)]
pub struct DiffClassifier {
    additions: u64,
    deletions: u64,
}

impl DiffClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one diff line. A bare `+` or `-` (an added or removed blank
    /// line) counts; the trailing terminator may be present or not.
    pub fn write_line(&mut self, line: &str) {
        let bytes = line.as_bytes();
        match bytes.first() {
            Some(b'+') if bytes.get(1) != Some(&b'+') => self.additions += 1,
            Some(b'-') if bytes.get(1) != Some(&b'-') => self.deletions += 1,
            _ => {}
        }
    }

    /// Classify a whole diff text.
    pub fn write(&mut self, text: &str) {
        for line in text.lines() {
            self.write_line(line);
        }
    }

    /// Snapshot of the counts accumulated so far.
    pub fn stats(&self) -> DiffStat {
        DiffStat {
            additions: self.additions,
            deletions: self.deletions,
        }
    }
}
