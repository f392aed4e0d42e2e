//! Shared building blocks for the release tooling
//!
//! - **config**: environment-driven directory layout for the metadata pipeline
//! - **error**: error taxonomy and process-boundary diagnostics

pub mod config;
pub mod error;
