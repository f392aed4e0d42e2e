//! Integration tests for the `metadata` command

use crate::helpers::{TestDirs, run_tool, run_tool_unchecked};
use anyhow::Result;

fn read_doc(dirs: &TestDirs, tag: &str) -> Result<serde_json::Value> {
  let content = std::fs::read_to_string(dirs.metadata_path(tag))?;
  Ok(serde_json::from_str(&content)?)
}

#[test]
fn test_metadata_prerelease_end_to_end() -> Result<()> {
  let dirs = TestDirs::new()?;
  dirs.add_manifest("4.2-rc1", "abc123  godot.tpz\n")?;

  let output = run_tool(
    &dirs.path,
    &["metadata", "--version", "4.2", "--flavor", "rc1", "--git", "deadbeef"],
    &dirs.env(),
  )?;

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("Written release metadata to"));

  let doc = read_doc(&dirs, "4.2-rc1")?;
  assert_eq!(doc["name"], "4.2-rc1");
  assert_eq!(doc["version"], "4.2");
  assert_eq!(doc["status"], "rc1");
  // Pre-releases keep the supplied commit hash, not the tag sentinel.
  assert_eq!(doc["git_reference"], "deadbeef");
  assert_eq!(doc["files"].as_array().unwrap().len(), 1);
  assert_eq!(doc["files"][0]["filename"], "godot.tpz");
  assert_eq!(doc["files"][0]["checksum"], "abc123");
  assert!(doc["release_date"].is_i64());

  Ok(())
}

#[test]
fn test_metadata_stable_uses_tag_sentinel() -> Result<()> {
  let dirs = TestDirs::new()?;
  dirs.add_manifest("4.2-stable", "abc123  godot.tpz\n")?;

  run_tool(
    &dirs.path,
    &["metadata", "--version", "4.2", "--flavor", "stable", "--git", "deadbeef"],
    &dirs.env(),
  )?;

  let doc = read_doc(&dirs, "4.2-stable")?;
  assert_eq!(doc["name"], "4.2");
  assert_eq!(doc["git_reference"], "4.2-stable");

  Ok(())
}

#[test]
fn test_metadata_flavor_defaults_to_stable() -> Result<()> {
  let dirs = TestDirs::new()?;
  dirs.add_manifest("4.1-stable", "abc123  godot.tpz\n")?;

  run_tool(
    &dirs.path,
    &["metadata", "--version", "4.1", "--git", "deadbeef"],
    &dirs.env(),
  )?;

  assert!(dirs.metadata_path("4.1-stable").is_file());
  Ok(())
}

#[test]
fn test_metadata_appends_mono_files() -> Result<()> {
  let dirs = TestDirs::new()?;
  dirs.add_manifest("4.2-rc1", "aaa  standard.zip\nbbb  other.zip\n")?;
  dirs.add_mono_manifest("4.2-rc1", "ccc  mono.zip\n")?;

  run_tool(
    &dirs.path,
    &["metadata", "--version", "4.2", "--flavor", "rc1", "--git", "deadbeef"],
    &dirs.env(),
  )?;

  let doc = read_doc(&dirs, "4.2-rc1")?;
  let filenames: Vec<&str> = doc["files"]
    .as_array()
    .unwrap()
    .iter()
    .map(|f| f["filename"].as_str().unwrap())
    .collect();
  assert_eq!(filenames, ["standard.zip", "other.zip", "mono.zip"]);

  Ok(())
}

#[test]
fn test_metadata_missing_mono_manifest_is_fine() -> Result<()> {
  let dirs = TestDirs::new()?;
  dirs.add_manifest("4.2-rc1", "abc123  godot.tpz\n")?;

  run_tool(
    &dirs.path,
    &["metadata", "--version", "4.2", "--flavor", "rc1", "--git", "deadbeef"],
    &dirs.env(),
  )?;

  let doc = read_doc(&dirs, "4.2-rc1")?;
  assert_eq!(doc["files"].as_array().unwrap().len(), 1);

  Ok(())
}

#[test]
fn test_metadata_missing_primary_manifest_fails() -> Result<()> {
  let dirs = TestDirs::new()?;

  let output = run_tool_unchecked(
    &dirs.path,
    &["metadata", "--version", "4.2", "--flavor", "rc1", "--git", "deadbeef"],
    &dirs.env(),
  )?;

  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("manifest"));

  Ok(())
}

#[test]
fn test_metadata_malformed_manifest_fails() -> Result<()> {
  let dirs = TestDirs::new()?;
  dirs.add_manifest("4.2-rc1", "abc123 one-space-only.zip\n")?;

  let output = run_tool_unchecked(
    &dirs.path,
    &["metadata", "--version", "4.2", "--flavor", "rc1", "--git", "deadbeef"],
    &dirs.env(),
  )?;

  assert_eq!(output.status.code(), Some(1));
  Ok(())
}

#[test]
fn test_metadata_empty_version_fails() -> Result<()> {
  let dirs = TestDirs::new()?;

  let output = run_tool_unchecked(
    &dirs.path,
    &["metadata", "--git", "deadbeef"],
    &dirs.env(),
  )?;

  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("cannot be empty"));

  Ok(())
}

#[test]
fn test_metadata_missing_environment_fails() -> Result<()> {
  let dirs = TestDirs::new()?;
  dirs.add_manifest("4.2-rc1", "abc123  godot.tpz\n")?;

  let output = run_tool_unchecked(
    &dirs.path,
    &["metadata", "--version", "4.2", "--flavor", "rc1", "--git", "deadbeef"],
    &[],
  )?;

  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("basedir") || stderr.contains("buildsdir"));

  Ok(())
}
