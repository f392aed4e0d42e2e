//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch directory pair standing in for the build-scripts and builds
/// checkouts
pub struct TestDirs {
  _root: TempDir,
  pub path: PathBuf,
  pub base_dir: PathBuf,
  pub builds_dir: PathBuf,
}

impl TestDirs {
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    let base_dir = path.join("build-scripts");
    let builds_dir = path.join("builds");

    std::fs::create_dir_all(base_dir.join("releases"))?;
    std::fs::create_dir_all(builds_dir.join("releases"))?;

    Ok(Self {
      _root: root,
      path,
      base_dir,
      builds_dir,
    })
  }

  /// Write the primary checksum manifest for a release tag
  pub fn add_manifest(&self, tag: &str, content: &str) -> Result<()> {
    let folder = self.base_dir.join("releases").join(tag);
    std::fs::create_dir_all(&folder)?;
    std::fs::write(folder.join("SHA512-SUMS.txt"), content)?;
    Ok(())
  }

  /// Write the mono-variant checksum manifest for a release tag
  pub fn add_mono_manifest(&self, tag: &str, content: &str) -> Result<()> {
    let folder = self.base_dir.join("releases").join(tag).join("mono");
    std::fs::create_dir_all(&folder)?;
    std::fs::write(folder.join("SHA512-SUMS.txt"), content)?;
    Ok(())
  }

  /// Expected location of the written release document
  pub fn metadata_path(&self, tag: &str) -> PathBuf {
    self.builds_dir.join("releases").join(format!("godot-{tag}.json"))
  }

  /// Environment variable pairs for the metadata command
  pub fn env(&self) -> Vec<(String, String)> {
    vec![
      ("basedir".to_string(), self.base_dir.display().to_string()),
      ("buildsdir".to_string(), self.builds_dir.display().to_string()),
    ]
  }
}

/// Write a release document the way the metadata command would
pub fn write_release_doc(
  dir: &Path,
  version: &str,
  status: &str,
  release_date: i64,
  git_reference: &str,
) -> Result<PathBuf> {
  let name = if status == "stable" {
    version.to_string()
  } else {
    format!("{version}-{status}")
  };

  let doc = serde_json::json!({
    "name": name,
    "version": version,
    "status": status,
    "release_date": release_date,
    "git_reference": git_reference,
    "files": [
      { "filename": format!("Godot_v{version}-{status}_linux.x86_64.zip"), "checksum": "abc123" }
    ]
  });

  let path = dir.join(format!("godot-{version}-{status}.json"));
  std::fs::write(&path, serde_json::to_string_pretty(&doc)?)?;
  Ok(path)
}

/// Run the godot-releases binary, without asserting on its exit status
pub fn run_tool_unchecked(cwd: &Path, args: &[&str], envs: &[(String, String)]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_godot-releases");

  let mut cmd = Command::new(bin);
  cmd.current_dir(cwd).args(args);
  // Make sure ambient values never leak into the assertions.
  cmd.env_remove("basedir").env_remove("buildsdir");
  for (key, value) in envs {
    cmd.env(key, value);
  }

  cmd.output().context("failed to run godot-releases")
}

/// Run the godot-releases binary, failing the test on a non-zero exit
pub fn run_tool(cwd: &Path, args: &[&str], envs: &[(String, String)]) -> Result<Output> {
  let output = run_tool_unchecked(cwd, args, envs)?;

  if !output.status.success() {
    anyhow::bail!(
      "godot-releases {} failed\nstdout: {}\nstderr: {}",
      args.join(" "),
      String::from_utf8_lossy(&output.stdout),
      String::from_utf8_lossy(&output.stderr)
    );
  }

  Ok(output)
}

/// Run git in a directory, failing the test on a non-zero exit
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("failed to run git")?;

  if !output.status.success() {
    anyhow::bail!(
      "git {} failed: {}",
      args.join(" "),
      String::from_utf8_lossy(&output.stderr)
    );
  }

  Ok(output)
}

/// Initialize a git repository with a local identity
pub fn init_git_repo(path: &Path) -> Result<()> {
  git(path, &["init", "--initial-branch=main"])?;
  git(path, &["config", "user.name", "Test User"])?;
  git(path, &["config", "user.email", "test@example.com"])?;
  Ok(())
}
