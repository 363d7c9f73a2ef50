//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating gitwc command output, error messages,
//! and expected behaviors.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the not-a-repository error banner
pub fn not_a_repository() -> impl Predicate<str> {
    predicates::str::contains("Not a git repository")
}

/// Creates a predicate that checks for a revision's author column
pub fn has_author(author: &str) -> impl Predicate<str> {
    predicates::str::contains(author.to_string())
}

/// Creates a predicate that checks for a diffstat column
pub fn has_diffstat(additions: u64, deletions: u64) -> impl Predicate<str> {
    predicates::str::contains(format!("+{additions} -{deletions}"))
}

/// Creates a predicate that checks for a per-file counts row
pub fn has_file_row(name: &str) -> impl Predicate<str> {
    predicates::str::contains(name.to_string())
}
