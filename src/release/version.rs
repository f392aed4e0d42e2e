//! Version classification: release flavor and human-readable display names
//!
//! Versions are dotted numeric strings in the `major.minor[.patch]` form
//! used by Godot (the patch component is omitted for major and minor
//! releases). They are deliberately not semver: `"4.2"` is a valid version
//! here, so classification works on the string shape alone.

/// Classification of a version bump, derived from the version string shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionFlavor {
  Major,
  Minor,
  Patch,
}

impl VersionFlavor {
  /// Derive the flavor from a dotted version string
  ///
  /// Two components with a zero second component make a major release,
  /// two components otherwise a minor release. Anything else (including
  /// three-component versions and degenerate single-component strings)
  /// is a patch release.
  pub fn of(version: &str) -> Self {
    let bits: Vec<&str> = version.split('.').collect();
    match bits.as_slice() {
      [_, "0"] => Self::Major,
      [_, _] => Self::Minor,
      _ => Self::Patch,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Major => "major",
      Self::Minor => "minor",
      Self::Patch => "patch",
    }
  }

  /// Wording used in notes descriptions and URL slugs
  ///
  /// Marketing copy calls minor versions "feature releases" and patch
  /// versions "maintenance releases".
  pub fn release_kind(&self) -> &'static str {
    match self {
      Self::Major => "major",
      Self::Minor => "feature",
      Self::Patch => "maintenance",
    }
  }
}

/// A build's maturity marker
///
/// Known prefixes (`rc`, `beta`, `alpha`, `dev`) carry their numeric suffix
/// as an opaque string; anything unrecognized is kept verbatim so that
/// unusual historical statuses (e.g. one-off fixup builds) still round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseStatus {
  Stable,
  Rc(String),
  Beta(String),
  Alpha(String),
  Dev(String),
  Other(String),
}

impl ReleaseStatus {
  /// Parse a raw status string
  pub fn parse(raw: &str) -> Self {
    if raw == "stable" {
      Self::Stable
    } else if let Some(n) = raw.strip_prefix("rc") {
      Self::Rc(n.to_string())
    } else if let Some(n) = raw.strip_prefix("beta") {
      Self::Beta(n.to_string())
    } else if let Some(n) = raw.strip_prefix("alpha") {
      Self::Alpha(n.to_string())
    } else if let Some(n) = raw.strip_prefix("dev") {
      Self::Dev(n.to_string())
    } else {
      Self::Other(raw.to_string())
    }
  }

  pub fn is_stable(&self) -> bool {
    matches!(self, Self::Stable)
  }

  /// Reconstruct the raw status string, exactly as parsed
  pub fn raw(&self) -> String {
    match self {
      Self::Stable => "stable".to_string(),
      Self::Rc(n) => format!("rc{n}"),
      Self::Beta(n) => format!("beta{n}"),
      Self::Alpha(n) => format!("alpha{n}"),
      Self::Dev(n) => format!("dev{n}"),
      Self::Other(raw) => raw.clone(),
    }
  }
}

/// Human-readable name for a release: the version, plus a status label for
/// anything that is not stable
pub fn display_name(version: &str, status: &ReleaseStatus) -> String {
  match status {
    ReleaseStatus::Stable => version.to_string(),
    ReleaseStatus::Rc(n) => format!("{version} RC {n}"),
    ReleaseStatus::Beta(n) => format!("{version} beta {n}"),
    ReleaseStatus::Alpha(n) => format!("{version} alpha {n}"),
    ReleaseStatus::Dev(n) => format!("{version} dev {n}"),
    ReleaseStatus::Other(raw) => format!("{version} {raw}"),
  }
}

/// Classify a release: flavor derived from the version string, display name
/// derived from version and status
///
/// Pure function, never fails; unrecognized statuses fall through to the
/// verbatim form.
pub fn classify(version: &str, status: &ReleaseStatus) -> (VersionFlavor, String) {
  (VersionFlavor::of(version), display_name(version, status))
}
