//! System git backend for catalog history generation
//!
//! Uses the system `git` binary through subprocesses with an isolated
//! environment (only PATH and HOME pass through, so repo-local and user
//! config still apply but ambient CI variables do not).
//!
//! History generation commits one release document per release, with both
//! the author and committer dates spoofed to the recorded release date so
//! the repository timeline mirrors the actual release timeline.

use crate::core::error::{ReleaseError, ReleaseResult, ResultExt};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git date string for a release timestamp, e.g. `Thu, 07 Apr 2005 22:13:13 +0000`
pub fn commit_date(release_date: i64) -> String {
  DateTime::<Utc>::from_timestamp(release_date, 0)
    .unwrap_or(DateTime::UNIX_EPOCH)
    .format("%a, %d %b %Y %H:%M:%S +0000")
    .to_string()
}

/// Git driver bound to one repository
pub struct SystemGit {
  repo_path: PathBuf,
}

impl SystemGit {
  /// Open the repository containing `path`
  pub fn open(path: &Path) -> ReleaseResult<Self> {
    let output = Command::new("git")
      .arg("-C")
      .arg(path)
      .args(["rev-parse", "--show-toplevel"])
      .output()
      .context("failed to execute git rev-parse")?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ReleaseError::message(format!(
        "not a git repository at '{}': {}",
        path.display(),
        stderr.trim()
      )));
    }

    Ok(Self {
      repo_path: path.to_path_buf(),
    })
  }

  /// Stage a file
  pub fn add(&self, path: &Path) -> ReleaseResult<()> {
    let mut cmd = self.git_cmd();
    cmd.arg("add").arg(path);
    self.run(cmd, "git add")
  }

  /// Commit staged changes with both dates spoofed to `date`
  pub fn commit(&self, message: &str, date: &str) -> ReleaseResult<()> {
    let mut cmd = self.git_cmd();
    cmd.args(["commit", "-m", message, "--date", date]);
    cmd.env("GIT_COMMITTER_DATE", date);
    self.run(cmd, "git commit")
  }

  /// Tag the current HEAD
  pub fn tag(&self, tag: &str) -> ReleaseResult<()> {
    let mut cmd = self.git_cmd();
    cmd.args(["tag", tag]);
    self.run(cmd, "git tag")
  }

  /// Create a git command with an isolated environment
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(&self.repo_path);

    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    cmd.arg("-c").arg("advice.detachedHead=false");
    cmd.arg("-c").arg("core.quotePath=false");

    cmd
  }

  fn run(&self, mut cmd: Command, label: &str) -> ReleaseResult<()> {
    let output = cmd.output().context(format!("failed to execute {label}"))?;

    if !output.status.success() {
      return Err(ReleaseError::Command {
        command: label.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
      });
    }

    Ok(())
  }
}
