//! Version-control operations for the history driver

pub mod system_git;

pub use system_git::{SystemGit, commit_date};
