//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with
//! various histories for comprehensive testing scenarios.

#![allow(dead_code)]

use gitwc::core::error::{GitwcError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Sets up a fresh git repository for testing
///
/// Creates a temporary directory, initializes it as a git repository,
/// and sets up basic git configuration to avoid user prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(GitwcError::Io)?;
    let repo_path = temp_dir.path().to_path_buf();

    run_git(&repo_path, &["init"])?;
    run_git(&repo_path, &["config", "user.name", "Test User"])?;
    run_git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a repository with a small three-revision history:
///
/// 1. adds `poem.txt` with two lines
/// 2. appends a third line to `poem.txt`
/// 3. adds `notes.txt` and deletes `poem.txt`
pub fn setup_repo_with_history() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "poem.txt", "roses are red\nviolets are blue\n")?;
    git_add(&repo.path, "poem.txt")?;
    git_commit(&repo.path, "add poem")?;

    create_file(
        &repo.path,
        "poem.txt",
        "roses are red\nviolets are blue\nsugar is sweet\n",
    )?;
    git_add(&repo.path, "poem.txt")?;
    git_commit(&repo.path, "extend poem")?;

    fs::remove_file(repo.path.join("poem.txt")).map_err(GitwcError::Io)?;
    create_file(&repo.path, "notes.txt", "todo\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "replace poem with notes")?;

    Ok(repo)
}

/// Creates a file with specified content in the repository
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    fs::write(repo_path.join(filename), content).map_err(GitwcError::Io)?;
    Ok(())
}

/// Adds a file to the git index
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    run_git(repo_path, &["add", filename])
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    run_git(repo_path, &["commit", "-m", message])
}

/// Creates, stages and commits a file in one step
pub fn commit_file(repo_path: &Path, filename: &str, content: &str, message: &str) -> Result<()> {
    create_file(repo_path, filename, content)?;
    git_add(repo_path, filename)?;
    git_commit(repo_path, message)
}

fn run_git(repo_path: &Path, args: &[&str]) -> Result<()> {
    std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(GitwcError::Io)?;
    Ok(())
}
