//! Checksum manifest parsing
//!
//! A manifest is the plain-text `SHA512-SUMS.txt` produced at packaging
//! time: one `"<checksum>  <filename>"` entry per line, two literal spaces
//! as the separator. Listing order is preserved; it becomes the `files`
//! order of the release document.

use crate::core::error::ManifestError;
use crate::release::record::FileEntry;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a checksum manifest into an ordered list of file entries
///
/// Fails if the manifest is missing or any line lacks the two-space
/// separator. An empty manifest is valid and yields an empty list.
pub fn read_manifest(path: &Path) -> Result<Vec<FileEntry>, ManifestError> {
  let content = fs::read_to_string(path).map_err(|source| match source.kind() {
    ErrorKind::NotFound => ManifestError::Missing {
      path: path.to_path_buf(),
    },
    _ => ManifestError::Io {
      path: path.to_path_buf(),
      source,
    },
  })?;

  let mut entries = Vec::new();
  for (idx, line) in content.lines().enumerate() {
    // Split on the first separator only; filenames may contain further runs
    // of spaces.
    let Some((checksum, filename)) = line.split_once("  ") else {
      return Err(ManifestError::Malformed {
        path: path.to_path_buf(),
        line: idx + 1,
      });
    };

    entries.push(FileEntry {
      filename: filename.trim_end().to_string(),
      checksum: checksum.to_string(),
    });
  }

  Ok(entries)
}

/// Parse a manifest that may legitimately not exist
///
/// Not every release ships a mono variant, so a missing manifest means
/// "zero extra files" rather than an error. Malformed content still fails.
pub fn read_optional_manifest(path: &Path) -> Result<Vec<FileEntry>, ManifestError> {
  match read_manifest(path) {
    Err(ManifestError::Missing { .. }) => Ok(Vec::new()),
    other => other,
  }
}
