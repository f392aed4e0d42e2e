//! Notes command implementation
//!
//! Composes the release-notes text for a single release and writes it to
//! the templated path `tmp/release-notes-<version>-<status>.txt`. Unlike
//! the metadata command, no environment variables are required.

use crate::commands::validate_release_args;
use crate::core::error::{ReleaseResult, ResultExt};
use crate::release::{ReleaseRecord, ReleaseStatus, SlugOverrides, compose};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory receiving composed notes files
const NOTES_OUT_DIR: &str = "tmp";

/// Run the notes command
pub fn run_notes(
  version: String,
  flavor: String,
  git: String,
  slug_index: Option<PathBuf>,
) -> ReleaseResult<()> {
  let (version, flavor) = validate_release_args(&version, &flavor, &git)?;
  let status = ReleaseStatus::parse(flavor);

  // Transient record; the composer only looks at version, status, and the
  // git reference, so the file manifest stays empty.
  let record = ReleaseRecord::assemble(version, &status, &git, Vec::new(), Vec::new());

  let overrides = slug_index.map(|path| SlugOverrides::load(&path)).transpose()?;
  let notes = compose(&record, overrides.as_ref());

  let out_dir = Path::new(NOTES_OUT_DIR);
  fs::create_dir_all(out_dir).context(format!(
    "failed to create notes directory '{}'",
    out_dir.display()
  ))?;

  let out_path = out_dir.join(format!("release-notes-{}.txt", record.tag()));
  fs::write(&out_path, notes).context(format!(
    "failed to write release notes to '{}'",
    out_path.display()
  ))?;

  println!("Written release notes to '{}'.", out_path.display());
  Ok(())
}
