//! History command implementation
//!
//! Replays the catalog as git history: one commit and one tag per release
//! document, oldest first, with author and committer dates spoofed to the
//! recorded release date. Dry-run by default; `--apply` executes.
//!
//! A failed git command halts the run. There is no resumption bookkeeping;
//! re-running after a partial failure is the operator's problem (commits
//! already created will simply fail the `git tag` step for existing tags).

use crate::core::error::ReleaseResult;
use crate::release::load_entries;
use crate::ui::progress::CatalogProgress;
use crate::vcs::{SystemGit, commit_date};
use std::path::{Path, PathBuf};

/// Run the history command
pub fn run_history(releases_dir: PathBuf, apply: bool) -> ReleaseResult<()> {
  let entries = load_entries(&releases_dir)?;

  if entries.is_empty() {
    println!("No release documents found in '{}'.", releases_dir.display());
    return Ok(());
  }

  if !apply {
    println!(
      "Would commit and tag {} release(s) in date order (pass --apply to execute):",
      entries.len()
    );
    for entry in &entries {
      println!(
        "  {}  {}",
        commit_date(entry.record.release_date),
        entry.record.tag()
      );
    }
    return Ok(());
  }

  let git = SystemGit::open(Path::new("."))?;
  let mut progress = CatalogProgress::new(entries.len(), "Committing releases");

  for entry in &entries {
    let tag = entry.record.tag();
    let date = commit_date(entry.record.release_date);

    git.add(&entry.path)?;
    git.commit(&format!("Add Godot {tag}"), &date)?;
    git.tag(&tag)?;

    progress.inc();
  }

  println!("Committed {} release(s).", entries.len());
  Ok(())
}
