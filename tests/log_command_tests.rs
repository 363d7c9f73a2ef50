use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;
use common::{assertions, repository::*};

#[cfg(test)]
mod log_command_tests {
    use super::*;

    #[test]
    fn test_log_shows_one_row_per_revision() -> anyhow::Result<()> {
        let repo = setup_repo_with_history()?;

        let mut cmd = Command::cargo_bin("gitwc")?;
        cmd.arg(repo.path())
            .assert()
            .success()
            .stdout(assertions::has_author("Test User"))
            .stdout(assertions::has_diffstat(2, 0))
            .stdout(assertions::has_diffstat(1, 0))
            .stdout(assertions::has_diffstat(1, 3));

        Ok(())
    }

    #[test]
    fn test_log_rows_are_oldest_first() -> anyhow::Result<()> {
        let repo = setup_repo_with_history()?;

        let mut cmd = Command::cargo_bin("gitwc")?;
        let output = cmd.arg(repo.path()).assert().success();

        let stdout = String::from_utf8(output.get_output().stdout.clone())?;
        let all_additions = stdout.find("+2 -0").expect("first revision row");
        let extension = stdout.find("+1 -0").expect("second revision row");
        let replacement = stdout.find("+1 -3").expect("third revision row");
        assert!(all_additions < extension);
        assert!(extension < replacement);

        Ok(())
    }

    #[test]
    fn test_log_empty_repository_prints_nothing() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;

        let mut cmd = Command::cargo_bin("gitwc")?;
        cmd.arg(repo.path())
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        Ok(())
    }

    #[test]
    fn test_log_fails_outside_repository() -> anyhow::Result<()> {
        let temp_dir = tempfile::TempDir::new()?;

        let mut cmd = Command::cargo_bin("gitwc")?;
        cmd.arg(temp_dir.path())
            .assert()
            .failure()
            .stdout(assertions::not_a_repository());

        Ok(())
    }

    #[test]
    fn test_log_json_exports_expected_fields() -> anyhow::Result<()> {
        let repo = setup_repo_with_history()?;

        let mut cmd = Command::cargo_bin("gitwc")?;
        let output = cmd.arg("--json").arg(repo.path()).assert().success();

        let stdout = String::from_utf8(output.get_output().stdout.clone())?;
        let rows: serde_json::Value = serde_json::from_str(&stdout)?;
        let rows = rows.as_array().expect("a JSON array of rows");

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["number"], 1);
        assert_eq!(rows[0]["author"], "Test User");
        assert_eq!(rows[0]["additions"], 2);
        assert_eq!(rows[0]["deletions"], 0);
        assert_eq!(rows[2]["number"], 3);
        assert_eq!(rows[2]["deletions"], 3);
        assert!(rows[1]["timestamp"].as_str().is_some());

        Ok(())
    }
}
