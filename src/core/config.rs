//! Environment-driven configuration for the metadata pipeline
//!
//! The metadata command operates across two checkouts: the build-scripts
//! repository (where packaged artifacts and their checksum manifests live)
//! and the builds repository (where release documents are persisted). Both
//! are supplied through environment variables; absence is a fatal
//! configuration error.

use crate::core::error::ConfigError;
use std::env;
use std::path::PathBuf;

/// Environment variable naming the build-scripts checkout
pub const BASEDIR_ENV: &str = "basedir";

/// Environment variable naming the builds checkout
pub const BUILDSDIR_ENV: &str = "buildsdir";

/// Checksum manifest filename inside each release folder
pub const CHECKSUM_MANIFEST: &str = "SHA512-SUMS.txt";

/// Sub-path holding the mono variant build of a release
pub const MONO_SUBDIR: &str = "mono";

/// Resolved directory layout for the metadata command
#[derive(Debug, Clone)]
pub struct ReleaseDirs {
  /// Build-scripts checkout, holds `releases/<tag>/SHA512-SUMS.txt`
  pub base_dir: PathBuf,

  /// Builds checkout, receives `releases/godot-<tag>.json`
  pub builds_dir: PathBuf,
}

impl ReleaseDirs {
  /// Resolve both directories from the environment
  pub fn from_env() -> Result<Self, ConfigError> {
    Ok(Self {
      base_dir: require_env(BASEDIR_ENV)?,
      builds_dir: require_env(BUILDSDIR_ENV)?,
    })
  }

  /// Folder holding the packaged artifacts for one release
  pub fn release_folder(&self, tag: &str) -> PathBuf {
    self.base_dir.join("releases").join(tag)
  }

  /// Checksum manifest for the primary build set
  pub fn primary_manifest(&self, tag: &str) -> PathBuf {
    self.release_folder(tag).join(CHECKSUM_MANIFEST)
  }

  /// Checksum manifest for the mono variant (may not exist)
  pub fn mono_manifest(&self, tag: &str) -> PathBuf {
    self.release_folder(tag).join(MONO_SUBDIR).join(CHECKSUM_MANIFEST)
  }

  /// Destination path for the persisted release document
  pub fn metadata_output(&self, tag: &str) -> PathBuf {
    self.builds_dir.join("releases").join(format!("godot-{tag}.json"))
  }
}

/// Read a required environment variable, treating empty as unset
fn require_env(name: &'static str) -> Result<PathBuf, ConfigError> {
  match env::var(name) {
    Ok(value) if !value.is_empty() => Ok(PathBuf::from(value)),
    _ => Err(ConfigError::MissingEnv { name }),
  }
}
