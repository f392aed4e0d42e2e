//! Metadata command implementation
//!
//! Reads the checksum manifests written at packaging time, assembles a
//! `ReleaseRecord`, and persists it into the builds checkout. This is the
//! one place the release date is observed (wall-clock "now").

use crate::commands::validate_release_args;
use crate::core::config::ReleaseDirs;
use crate::core::error::ReleaseResult;
use crate::release::{ReleaseRecord, ReleaseStatus, read_manifest, read_optional_manifest};

/// Run the metadata command
pub fn run_metadata(version: String, flavor: String, git: String) -> ReleaseResult<()> {
  let (version, flavor) = validate_release_args(&version, &flavor, &git)?;
  let dirs = ReleaseDirs::from_env()?;
  let status = ReleaseStatus::parse(flavor);

  let tag = format!("{version}-{flavor}");
  let primary = read_manifest(&dirs.primary_manifest(&tag))?;
  let variant = read_optional_manifest(&dirs.mono_manifest(&tag))?;

  let record = ReleaseRecord::assemble(version, &status, &git, primary, variant);

  let output_path = dirs.metadata_output(&tag);
  record.write(&output_path)?;

  println!("Written release metadata to '{}'.", output_path.display());
  Ok(())
}
