//! Release catalog: the date-ordered collection of persisted release
//! documents
//!
//! The publishing drivers replay the catalog oldest-first, so loading
//! always sorts ascending by `release_date`. The sort is stable; equal
//! dates keep directory enumeration order, which is platform-dependent.

use crate::core::error::{ReleaseError, ReleaseResult, ResultExt};
use crate::release::record::ReleaseRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// A release record together with the document it was loaded from
///
/// The history driver needs the source path to `git add` each document.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
  pub path: PathBuf,
  pub record: ReleaseRecord,
}

/// Load every release document in `dir`, sorted ascending by release date
///
/// Non-regular-file entries (subdirectories and the like) are skipped.
/// Any document that fails to parse, or is missing a required field,
/// fails the whole load.
pub fn load_entries(dir: &Path) -> ReleaseResult<Vec<CatalogEntry>> {
  let read_dir = fs::read_dir(dir).context(format!(
    "failed to read releases directory '{}'",
    dir.display()
  ))?;

  let mut entries = Vec::new();
  for dir_entry in read_dir {
    let dir_entry = dir_entry.context("failed to enumerate releases directory")?;
    let path = dir_entry.path();
    if !path.is_file() {
      continue;
    }

    let content = fs::read_to_string(&path).context(format!(
      "failed to read release document '{}'",
      path.display()
    ))?;

    let record: ReleaseRecord = serde_json::from_str(&content).map_err(|e| ReleaseError::Parse {
      path: path.clone(),
      reason: e.to_string(),
    })?;

    entries.push(CatalogEntry { path, record });
  }

  entries.sort_by_key(|entry| entry.record.release_date);
  Ok(entries)
}

/// Load the catalog as bare records, sorted ascending by release date
pub fn load_catalog(dir: &Path) -> ReleaseResult<Vec<ReleaseRecord>> {
  Ok(load_entries(dir)?.into_iter().map(|entry| entry.record).collect())
}
