mod commands;
mod core;
mod release;
mod ui;
mod vcs;

use crate::core::error::{ReleaseError, print_error};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Release metadata and release notes generation for Godot's distribution
/// pipeline
#[derive(Parser)]
#[command(name = "godot-releases")]
// No propagate_version: subcommands define their own `--version` argument
// (the release version), which would clash with clap's version flag.
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Generate the release metadata document from checksum manifests
  ///
  /// Requires the `basedir` (build-scripts checkout) and `buildsdir`
  /// (builds checkout) environment variables.
  Metadata {
    /// Godot version in the major.minor.patch format (patch omitted for
    /// major and minor releases)
    #[arg(short = 'v', long, default_value = "")]
    version: String,
    /// Release flavor, e.g. dev1, alpha2, beta3, rc4, stable
    #[arg(short = 'f', long, default_value = "stable")]
    flavor: String,
    /// Git commit hash tagged for this release
    #[arg(short = 'g', long, default_value = "")]
    git: String,
  },

  /// Generate release notes for a single release
  Notes {
    /// Godot version in the major.minor.patch format (patch omitted for
    /// major and minor releases)
    #[arg(short = 'v', long, default_value = "")]
    version: String,
    /// Release flavor, e.g. dev1, alpha2, beta3, rc4, stable
    #[arg(short = 'f', long, default_value = "stable")]
    flavor: String,
    /// Git commit hash tagged for this release
    #[arg(short = 'g', long, default_value = "")]
    git: String,
    /// JSON table of release-notes URL overrides
    #[arg(long)]
    slug_index: Option<PathBuf>,
  },

  /// Commit and tag every release document in date order
  History {
    /// Directory of release documents
    #[arg(long, default_value = "./releases")]
    releases_dir: PathBuf,
    /// Actually run git (default: dry-run listing the planned commits)
    #[arg(long)]
    apply: bool,
  },

  /// Create a hosted release for every release document, in date order
  Publish {
    /// Directory of release documents
    #[arg(long, default_value = "./releases")]
    releases_dir: PathBuf,
    /// Directory receiving the composed notes files
    #[arg(long, default_value = "tmp/notes")]
    notes_dir: PathBuf,
    /// JSON table of release-notes URL overrides
    #[arg(long)]
    slug_index: Option<PathBuf>,
    /// Actually run gh (default: dry-run printing the planned commands)
    #[arg(long)]
    apply: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Commands::Metadata {
      version,
      flavor,
      git,
    } => commands::run_metadata(version, flavor, git),
    Commands::Notes {
      version,
      flavor,
      git,
      slug_index,
    } => commands::run_notes(version, flavor, git, slug_index),
    Commands::History {
      releases_dir,
      apply,
    } => commands::run_history(releases_dir, apply),
    Commands::Publish {
      releases_dir,
      notes_dir,
      slug_index,
      apply,
    } => commands::run_publish(releases_dir, notes_dir, slug_index, apply),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: ReleaseError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code());
}
