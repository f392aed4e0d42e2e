//! Release data model and derivation rules
//!
//! This module implements the whole metadata/notes pipeline:
//!
//! # Core Invariants
//!
//! 1. **Release documents are write-once**
//!    - Created at packaging time, persisted as JSON, never mutated
//!    - `release_date` is observed exactly once, at assembly time
//!
//! 2. **File manifests are never reordered**
//!    - Entries keep checksum-manifest listing order
//!    - Mono variant entries are appended after the primary set
//!    - No deduplication is performed
//!
//! 3. **Stable releases use the `<version>-stable` git sentinel**
//!    - The supplied commit hash is replaced, not merely defaulted
//!
//! # Architecture
//!
//! - **manifest**: checksum manifest parsing (`"<checksum>  <filename>"` lines)
//! - **record**: `ReleaseRecord` assembly and JSON persistence
//! - **catalog**: date-sorted loading of a directory of release documents
//! - **version**: release flavor classification and display names
//! - **notes**: release-notes text composition

pub mod catalog;
pub mod manifest;
pub mod notes;
pub mod record;
pub mod version;

pub use catalog::{CatalogEntry, load_catalog, load_entries};
pub use manifest::{read_manifest, read_optional_manifest};
pub use notes::{SlugOverrides, compose};
pub use record::{FileEntry, ReleaseRecord};
pub use version::{ReleaseStatus, VersionFlavor, classify};
