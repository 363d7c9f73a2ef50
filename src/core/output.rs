//! Output formatting utilities for consistent CLI presentation.
//!
//! This module provides the row and message formatting used by the gitwc
//! commands, ensuring consistent colors and spacing across output.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors and deletions, green for
//!   additions, muted bright_black for identifiers
//! - **Plain data rows**: One revision or file per line, stable column order,
//!   so output stays pipe-friendly for downstream tooling

use crate::core::diffstat::DiffStat;
use crate::core::metrics::FileHandle;
use chrono::{DateTime, FixedOffset};
use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Format one per-revision row: number, author, timestamp, diffstat.
///
/// # Format
/// ```text
///    3  alice  2024-05-01 12:30:00 +0200  +12 -4
/// ```
pub fn format_revision_row(
    number: u64,
    author: &str,
    timestamp: &DateTime<FixedOffset>,
    stats: &DiffStat,
) -> String {
    format!(
        "{:>4}  {}  {}  {} {}",
        number.to_string().bright_black(),
        author.white(),
        timestamp.format("%Y-%m-%d %H:%M:%S %z"),
        format!("+{}", stats.additions).green(),
        format!("-{}", stats.deletions).red(),
    )
}

/// Format one per-file row: lines, words, chars, bytes, name.
///
/// # Format
/// ```text
///    42   180  1024  1060  src/main.rs
/// ```
pub fn format_file_row(file: &FileHandle) -> String {
    format!(
        "{:>5} {:>6} {:>7} {:>7}  {}",
        file.metrics.lines,
        file.metrics.words,
        file.metrics.chars,
        file.bytes,
        file.name.white(),
    )
}
