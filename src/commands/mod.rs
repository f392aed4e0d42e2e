//! CLI commands for godot-releases
//!
//! - **metadata**: assemble and persist the release document for one release
//! - **notes**: compose the release-notes text for one release
//! - **history**: commit and tag every catalog document in date order
//! - **publish**: create a hosted release per catalog document, in date order
//!
//! The two driver commands (`history`, `publish`) are dry-run by default
//! and only touch git/gh with `--apply`.

pub mod history;
pub mod metadata;
pub mod notes;
pub mod publish;

pub use history::run_history;
pub use metadata::run_metadata;
pub use notes::run_notes;
pub use publish::run_publish;

use crate::core::error::{ConfigError, ReleaseResult};

/// Validate the shared `--version`/`--flavor`/`--git` argument trio
///
/// Empty version or git hash is fatal (the flags default to empty rather
/// than being parser-required, matching the historical tools). An empty
/// flavor normalizes to `stable`.
pub(crate) fn validate_release_args<'a>(
  version: &'a str,
  flavor: &'a str,
  git: &str,
) -> ReleaseResult<(&'a str, &'a str)> {
  if version.is_empty() || git.is_empty() {
    return Err(
      ConfigError::InvalidArgument(
        "version and git hash cannot be empty (pass --version and --git)".to_string(),
      )
      .into(),
    );
  }

  let flavor = if flavor.is_empty() { "stable" } else { flavor };
  Ok((version, flavor))
}
