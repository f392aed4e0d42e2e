//! Release record data model and metadata writer
//!
//! A `ReleaseRecord` is assembled once at release-packaging time, persisted
//! as a JSON document, and later read back (never mutated) for history
//! generation and publishing.

use crate::core::error::{ReleaseError, ReleaseResult, ResultExt};
use crate::release::version::ReleaseStatus;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One distributed artifact and its checksum, as listed in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
  pub filename: String,
  pub checksum: String,
}

/// Persisted metadata for one release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
  /// Display identifier: the version, or `<version>-<status>` for
  /// pre-releases
  pub name: String,

  /// Dotted numeric version string (`major.minor[.patch]`)
  pub version: String,

  /// Raw status string (`stable`, `rc1`, `beta2`, ...)
  pub status: String,

  /// Unix timestamp, seconds
  pub release_date: i64,

  /// Commit hash, or the `<version>-stable` sentinel for stable releases
  pub git_reference: String,

  /// Artifact manifest, in listing order (mono variant appended last)
  pub files: Vec<FileEntry>,
}

impl ReleaseRecord {
  /// Assemble a record at release-packaging time
  ///
  /// `release_date` is wall-clock "now"; regenerating a document after the
  /// fact does not preserve the historical date. For stable releases the
  /// supplied git reference is replaced with the `<version>-stable` tag
  /// sentinel.
  pub fn assemble(
    version: &str,
    status: &ReleaseStatus,
    git_reference: &str,
    primary_files: Vec<FileEntry>,
    variant_files: Vec<FileEntry>,
  ) -> Self {
    let raw_status = status.raw();

    let (name, git_reference) = if status.is_stable() {
      (version.to_string(), format!("{version}-stable"))
    } else {
      (format!("{version}-{raw_status}"), git_reference.to_string())
    };

    let mut files = primary_files;
    files.extend(variant_files);

    Self {
      name,
      version: version.to_string(),
      status: raw_status,
      release_date: Utc::now().timestamp(),
      git_reference,
      files,
    }
  }

  /// The git tag identifying this release (`<version>-<status>`)
  pub fn tag(&self) -> String {
    format!("{}-{}", self.version, self.status)
  }

  /// Parse the raw status string back into its tagged form
  pub fn release_status(&self) -> ReleaseStatus {
    ReleaseStatus::parse(&self.status)
  }

  /// Serialize the record as a JSON document at `path`, overwriting any
  /// existing file
  pub fn write(&self, path: &Path) -> ReleaseResult<()> {
    let json = serde_json::to_string_pretty(self)
      .map_err(|e| ReleaseError::message(format!("failed to serialize release record: {e}")))?;

    fs::write(path, json + "\n").context(format!(
      "failed to write release metadata to '{}'",
      path.display()
    ))
  }
}
