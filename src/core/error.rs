//! Error types for the release tooling
//!
//! Every failure surfaces immediately at the process boundary: a printed
//! diagnostic and a non-zero exit. Nothing is retried, and the only failure
//! treated as benign is a missing optional manifest (handled at the call
//! site, not here).

use std::path::PathBuf;

pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Top-level error type for all commands
#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
  /// Missing or malformed checksum manifest
  #[error("manifest error: {0}")]
  Manifest(#[from] ManifestError),

  /// Malformed release document in the catalog
  #[error("failed to parse release document '{}': {reason}", path.display())]
  Parse { path: PathBuf, reason: String },

  /// Missing CLI argument or environment variable
  #[error("configuration error: {0}")]
  Config(#[from] ConfigError),

  /// I/O failure with a human-readable context line
  #[error("{context}: {source}")]
  Io {
    context: String,
    #[source]
    source: std::io::Error,
  },

  /// External command (git, gh) exited unsuccessfully
  #[error("command failed: {command}\n{stderr}")]
  Command { command: String, stderr: String },

  #[error("{0}")]
  Message(String),
}

impl ReleaseError {
  /// Convenience constructor for one-off error messages
  pub fn message(msg: impl Into<String>) -> Self {
    Self::Message(msg.into())
  }

  /// Process exit status for this error
  ///
  /// The pipeline has no partial-success reporting, so every error maps to
  /// the same non-zero status.
  pub fn exit_code(&self) -> i32 {
    1
  }
}

/// Checksum manifest errors (see `release::manifest`)
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
  #[error("checksum manifest not found: {}", path.display())]
  Missing { path: PathBuf },

  #[error("malformed line {line} in '{}': expected \"<checksum>  <filename>\"", path.display())]
  Malformed { path: PathBuf, line: usize },

  #[error("failed to read '{}': {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// Configuration errors (CLI arguments and environment variables)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("environment variable '{name}' is unset or empty")]
  MissingEnv { name: &'static str },

  #[error("{0}")]
  InvalidArgument(String),
}

/// Print a diagnostic for a top-level error
pub fn print_error(err: &ReleaseError) {
  eprintln!("Error: {err}");
  if matches!(err, ReleaseError::Config(_)) {
    eprintln!("Run 'godot-releases <command> --help' for usage.");
  }
}

/// Extension trait to attach context to raw I/O results
pub trait ResultExt<T> {
  fn context(self, msg: impl Into<String>) -> ReleaseResult<T>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
  fn context(self, msg: impl Into<String>) -> ReleaseResult<T> {
    self.map_err(|source| ReleaseError::Io {
      context: msg.into(),
      source,
    })
  }
}
