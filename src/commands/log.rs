//! Per-revision history report: one row per revision with author, timestamp
//! and diffstat, oldest first.

use crate::core::{
    branch::Branch,
    error::{GitwcError, Result},
    format_revision_row,
};
use serde::Serialize;
use std::path::Path;

/// One history row as exported to the analytics consumer.
#[derive(Debug, Clone, Serialize)]
pub struct RevisionRow {
    pub number: u64,
    pub author: String,
    pub timestamp: String,
    pub additions: u64,
    pub deletions: u64,
}

pub fn execute_log(location: &Path, json: bool) -> Result<()> {
    let branch = Branch::open(location)?;
    if !branch.is_present() {
        return Err(GitwcError::BranchAbsent);
    }

    if json {
        let rows = collect_rows(&branch)?;
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for view in branch.history()? {
        let stats = view.diffstat()?;
        println!(
            "{}",
            format_revision_row(
                view.sequence_number()?,
                &view.author()?,
                &view.timestamp()?,
                &stats,
            )
        );
    }

    Ok(())
}

fn collect_rows(branch: &Branch) -> Result<Vec<RevisionRow>> {
    let mut rows = Vec::new();
    for view in branch.history()? {
        let stats = view.diffstat()?;
        rows.push(RevisionRow {
            number: view.sequence_number()?,
            author: view.author()?,
            timestamp: view.timestamp()?.to_rfc3339(),
            additions: stats.additions,
            deletions: stats.deletions,
        });
    }
    Ok(rows)
}
