//! Publish command implementation
//!
//! Walks the catalog in date order and creates one hosted release per
//! document through the `gh` CLI, attaching freshly composed notes. Notes
//! files are written even in dry-run mode so they can be reviewed before
//! applying; only the `gh` invocation is gated on `--apply`.
//!
//! The first failed `gh` command halts the run; releases already created
//! are not rolled back.

use crate::core::error::{ReleaseError, ReleaseResult, ResultExt};
use crate::release::{SlugOverrides, compose, load_catalog};
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Run the publish command
pub fn run_publish(
  releases_dir: PathBuf,
  notes_dir: PathBuf,
  slug_index: Option<PathBuf>,
  apply: bool,
) -> ReleaseResult<()> {
  let catalog = load_catalog(&releases_dir)?;

  if catalog.is_empty() {
    println!("No release documents found in '{}'.", releases_dir.display());
    return Ok(());
  }

  let overrides = slug_index.map(|path| SlugOverrides::load(&path)).transpose()?;

  fs::create_dir_all(&notes_dir).context(format!(
    "failed to create notes directory '{}'",
    notes_dir.display()
  ))?;

  for record in &catalog {
    let tag = record.tag();

    let notes = compose(record, overrides.as_ref());
    let notes_path = notes_dir.join(format!("release-notes-{tag}.txt"));
    fs::write(&notes_path, notes).context(format!(
      "failed to write release notes to '{}'",
      notes_path.display()
    ))?;

    let notes_arg = notes_path.display().to_string();
    let mut args = vec![
      "release",
      "create",
      tag.as_str(),
      "--verify-tag",
      "--title",
      tag.as_str(),
      "--notes-file",
      notes_arg.as_str(),
    ];
    if !record.release_status().is_stable() {
      args.push("--prerelease");
    }

    if !apply {
      println!("Would run: gh {}", args.join(" "));
      continue;
    }

    let output = Command::new("gh")
      .args(&args)
      .output()
      .context("failed to execute gh")?;

    if !output.status.success() {
      return Err(ReleaseError::Command {
        command: format!("gh {}", args.join(" ")),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
      });
    }

    println!("Created release '{}'.", record.name);
  }

  if !apply {
    println!();
    println!("Dry-run: wrote notes for {} release(s), no releases created.", catalog.len());
    println!("Pass --apply to create them.");
  }

  Ok(())
}
