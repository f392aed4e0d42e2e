//! Release-notes text composition
//!
//! Deterministic template assembly: given a release record, produce the
//! Markdown body attached to the hosted release. Composition is a pure
//! function of the record plus the URL constants below; it cannot fail.
//!
//! Release-notes article URLs are computed from the version, status, and
//! flavor. An optional override table can be injected for the handful of
//! historical releases whose article slugs do not follow the scheme
//! (formerly resolved against a scraped website version index).

use crate::core::error::{ReleaseError, ReleaseResult, ResultExt};
use crate::release::record::ReleaseRecord;
use crate::release::version::{ReleaseStatus, VersionFlavor, classify};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const PRODUCT: &str = "Godot";
const ISSUE_TRACKER_URL: &str = "https://github.com/godotengine/godot/issues";
const COMMIT_URL_BASE: &str = "https://github.com/godotengine/godot/commit";
const ARTICLE_URL_BASE: &str = "https://godotengine.org/article";
const INTERACTIVE_CHANGELOG_URL: &str = "https://godotengine.github.io/godot-interactive-changelog";
const CURATED_CHANGELOG_URL_BASE: &str = "https://github.com/godotengine/godot/blob";

/// Build-environment variable that marks a custom build with this status
const STATUS_ENV_NAME: &str = "GODOT_VERSION_STATUS";

/// Injected slug overrides for releases whose article URL does not follow
/// the computed scheme
#[derive(Debug, Default)]
pub struct SlugOverrides {
  entries: Vec<SlugOverride>,
}

#[derive(Debug, Deserialize)]
struct SlugOverride {
  version: String,
  status: String,
  url: String,
}

impl SlugOverrides {
  /// Load an override table from a JSON array of
  /// `{ "version", "status", "url" }` objects
  pub fn load(path: &Path) -> ReleaseResult<Self> {
    let content = fs::read_to_string(path).context(format!(
      "failed to read slug index '{}'",
      path.display()
    ))?;

    let entries: Vec<SlugOverride> =
      serde_json::from_str(&content).map_err(|e| ReleaseError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
      })?;

    Ok(Self { entries })
  }

  /// Look up an override for a `(version, status)` pair
  pub fn resolve(&self, version: &str, status: &str) -> Option<&str> {
    self
      .entries
      .iter()
      .find(|entry| entry.version == version && entry.status == status)
      .map(|entry| entry.url.as_str())
  }
}

/// Compose the release-notes text for one release
pub fn compose(record: &ReleaseRecord, overrides: Option<&SlugOverrides>) -> String {
  let status = record.release_status();
  let (flavor, name) = classify(&record.version, &status);
  let tag = record.tag();

  let mut notes = String::new();

  // Intro line.
  notes.push_str(&format!(
    "**{PRODUCT} {name}** is {}\n\n",
    version_description(&record.version, &status, flavor)
  ));

  // Link to the bug tracker.
  notes.push_str("Report bugs on GitHub after checking that they haven't been reported:\n");
  notes.push_str(&format!("- {ISSUE_TRACKER_URL}\n\n"));

  // Build provenance, for pre-releases only.
  if !status.is_stable() {
    let commit = &record.git_reference;
    notes.push_str(&format!(
      "Built from commit [{commit}]({COMMIT_URL_BASE}/{commit}).\n"
    ));
    notes.push_str(&format!(
      "To make a custom build which would also be recognized as {status}, you should define \
       `{STATUS_ENV_NAME}={status}` in your build environment prior to compiling.\n\n",
      status = record.status
    ));
  }

  notes.push_str("----\n\n");

  let url = overrides
    .and_then(|o| o.resolve(&record.version, &record.status))
    .map(str::to_string)
    .unwrap_or_else(|| release_notes_url(&record.version, &status, flavor));
  notes.push_str(&format!("- [Release notes]({url})\n"));

  if status.is_stable() {
    notes.push_str(&format!(
      "- [Complete changelog]({INTERACTIVE_CHANGELOG_URL}/#{})\n",
      record.version
    ));
    notes.push_str(&format!(
      "- [Curated changelog]({CURATED_CHANGELOG_URL_BASE}/{tag}/CHANGELOG.md)\n"
    ));
  } else {
    notes.push_str(&format!(
      "- [Complete changelog]({INTERACTIVE_CHANGELOG_URL}/#{tag})\n"
    ));
  }

  notes.push_str("\n----\n\n");
  notes.push_str("- **Download (GitHub):** Expand **Assets** below\n");

  notes
}

/// One-sentence description of what kind of release this is
///
/// Stable releases are described by flavor; pre-releases by status, with
/// the flavor woven into the wording. Unrecognized statuses read as dev
/// snapshots.
fn version_description(version: &str, status: &ReleaseStatus, flavor: VersionFlavor) -> String {
  if status.is_stable() {
    let text = match flavor {
      VersionFlavor::Major => {
        "a major release introducing new features and considerable changes to core systems. \
         **Major version releases contain compatibility breaking changes.**"
      }
      VersionFlavor::Minor => {
        "a feature release improving upon the previous version in many aspects, such as \
         usability and performance. Feature releases also contain new features, but preserve \
         compatibility with previous releases."
      }
      VersionFlavor::Patch => {
        "a maintenance release addressing stability and usability issues, and fixing all \
         sorts of bugs. Maintenance releases are compatible with previous releases and are \
         recommended for adoption."
      }
    };
    return text.to_string();
  }

  let kind = flavor.release_kind();
  match status {
    ReleaseStatus::Rc(_) => format!(
      "a release candidate for the {version} {kind} release. Release candidates focus on \
       finalizing the release and fixing remaining critical bugs."
    ),
    ReleaseStatus::Beta(_) => format!(
      "a beta snapshot for the {version} {kind} release. Beta snapshots are feature-complete \
       and provided for public beta testing to catch as many bugs as possible ahead of the \
       stable release."
    ),
    // Alphas, devs, and anything unrecognized.
    _ => format!(
      "a dev snapshot for the {version} {kind} release. Dev snapshots are in-development \
       builds of the engine provided for early testing and feature evaluation while the \
       engine is still being worked on."
    ),
  }
}

/// Compute the release-notes article URL for a release
///
/// The slug shapes are configuration asserted from published articles, not
/// derived from first principles; verify against the target site before
/// relying on a new combination.
pub fn release_notes_url(version: &str, status: &ReleaseStatus, flavor: VersionFlavor) -> String {
  let v = slugify(version);

  let slug = match status {
    ReleaseStatus::Stable => match flavor {
      VersionFlavor::Major => format!("major-release-godot-{v}"),
      VersionFlavor::Minor => format!("feature-release-godot-{v}"),
      VersionFlavor::Patch => format!("maintenance-release-godot-{v}"),
    },
    ReleaseStatus::Rc(n) => format!("release-candidate-godot-{v}-rc-{}", slugify(n)),
    ReleaseStatus::Beta(n) => format!("dev-snapshot-godot-{v}-beta-{}", slugify(n)),
    ReleaseStatus::Alpha(n) => format!("dev-snapshot-godot-{v}-alpha-{}", slugify(n)),
    ReleaseStatus::Dev(n) => format!("dev-snapshot-godot-{v}-dev-{}", slugify(n)),
    ReleaseStatus::Other(raw) => format!("dev-snapshot-godot-{v}-{}", slugify(raw)),
  };

  format!("{ARTICLE_URL_BASE}/{slug}/")
}

fn slugify(s: &str) -> String {
  s.replace('.', "-")
}
