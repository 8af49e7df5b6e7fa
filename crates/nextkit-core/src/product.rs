//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to brand the scaffolder: its identity,
//! the author block written into `package.json`, where local templates may
//! be configured from, and the instructions shown once the project exists.

use crate::config::ProjectSelections;
use serde::Serialize;
use std::path::Path;

/// `author` entry of the generated `package.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: &'static str,
    pub email: &'static str,
    pub url: &'static str,
}

/// Configuration trait for CLI products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable pointing at a local template directory
    fn template_dir_env(&self) -> &'static str;

    /// Author written into every generated `package.json`
    fn author(&self) -> Author;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, selections: &ProjectSelections) -> Vec<String>;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;
}
