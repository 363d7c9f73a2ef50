//! Per-file word-count report for the latest revision: lines, words, chars
//! and bytes for every tracked file.

use crate::core::{
    branch::Branch,
    error::{GitwcError, Result},
    format_file_row, print_section_header,
};
use std::path::Path;

pub fn execute_count(location: &Path, json: bool) -> Result<()> {
    let branch = Branch::open(location)?;
    if !branch.is_present() {
        return Err(GitwcError::BranchAbsent);
    }

    let Some(head) = branch.history()?.last() else {
        log::info!("repository has no revisions yet");
        return Ok(());
    };
    let files = head.files()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
        return Ok(());
    }

    print_section_header(&format!("Files at revision {}", head.sequence_number()?));
    for file in &files {
        println!("{}", format_file_row(file));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_execute_count_not_a_repository() -> Result<()> {
        let temp_dir = TempDir::new().map_err(GitwcError::Io)?;
        let result = execute_count(temp_dir.path(), false);

        assert!(matches!(result, Err(GitwcError::BranchAbsent)));
        Ok(())
    }

    #[test]
    fn test_execute_count_empty_repository_prints_nothing() -> Result<()> {
        let temp_dir = TempDir::new().map_err(GitwcError::Io)?;
        std::process::Command::new("git")
            .args(["init"])
            .current_dir(temp_dir.path())
            .output()
            .map_err(GitwcError::Io)?;

        execute_count(temp_dir.path(), false)?;
        Ok(())
    }
}
