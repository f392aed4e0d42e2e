//! Progress indicator for catalog-wide driver loops
//!
//! Uses `linya`; the catalog can hold hundreds of releases, and the history
//! driver runs several git subprocesses per release.

use linya::{Bar, Progress};

/// Progress bar over the releases of a catalog
pub struct CatalogProgress {
  progress: Progress,
  bar: Bar,
}

impl CatalogProgress {
  pub fn new(total: usize, label: impl Into<String>) -> Self {
    let mut progress = Progress::new();
    let bar = progress.bar(total, label.into());
    Self { progress, bar }
  }

  /// Advance by one release
  pub fn inc(&mut self) {
    self.progress.inc_and_draw(&self.bar, 1);
  }
}
