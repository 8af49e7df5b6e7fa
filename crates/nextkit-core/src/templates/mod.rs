//! Template fragments copied or merged into generated projects
//!
//! Fragments come from one of two sources:
//! - the bundle compiled into the binary (default)
//! - a local directory with the same layout (for template development)

pub mod copier;

use crate::error::{Result, ScaffoldError};
use crate::fs;
use crate::product::ProductConfig;
use include_dir::{include_dir, Dir};
use std::path::{Path, PathBuf};

pub use copier::{copy_artifact, copy_tree, Artifact};

/// Templates shipped with the tool
static BUNDLE: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Template source - either the embedded bundle or a local directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Bundled,
    Local(PathBuf),
}

impl TemplateSource {
    /// Pick the source: explicit directory, then the product's env var, then the bundle
    pub fn resolve<C: ProductConfig>(config: &C, template_dir: Option<PathBuf>) -> Self {
        template_dir
            .or_else(|| std::env::var_os(config.template_dir_env()).map(PathBuf::from))
            .map(Self::Local)
            .unwrap_or(Self::Bundled)
    }

    /// Read a fragment, e.g. `libs/resend.txt`
    pub fn read(&self, name: &str) -> Result<Vec<u8>> {
        match self {
            TemplateSource::Bundled => BUNDLE
                .get_file(name)
                .map(|file| file.contents().to_vec())
                .ok_or_else(|| ScaffoldError::MissingTemplate(name.to_string())),
            TemplateSource::Local(root) => {
                let path = root.join(name);
                if !path.is_file() {
                    return Err(ScaffoldError::MissingTemplate(name.to_string()));
                }
                std::fs::read(&path).map_err(|e| ScaffoldError::io(path, e))
            }
        }
    }

    pub fn read_text(&self, name: &str) -> Result<String> {
        let bytes = self.read(name)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Copy a whole fragment directory (e.g. `locales`) under `dest`.
    /// Returns the number of files written.
    pub fn copy_dir(&self, name: &str, dest: &Path) -> Result<usize> {
        match self {
            TemplateSource::Bundled => {
                let dir = BUNDLE
                    .get_dir(name)
                    .ok_or_else(|| ScaffoldError::MissingTemplate(name.to_string()))?;
                write_bundled_dir(dir, Path::new(name), dest)
            }
            TemplateSource::Local(root) => {
                let path = root.join(name);
                if !path.is_dir() {
                    return Err(ScaffoldError::MissingTemplate(name.to_string()));
                }
                fs::copy_dir(&path, dest)
            }
        }
    }
}

/// Entry paths inside the bundle are relative to the bundle root, so strip
/// the fragment prefix before joining onto `dest`.
fn write_bundled_dir(dir: &Dir<'_>, prefix: &Path, dest: &Path) -> Result<usize> {
    let mut written = 0;

    for file in dir.files() {
        let relative = file.path().strip_prefix(prefix).unwrap_or(file.path());
        fs::write_bytes(&dest.join(relative), file.contents())?;
        written += 1;
    }

    for sub in dir.dirs() {
        written += write_bundled_dir(sub, prefix, dest)?;
    }

    Ok(written)
}
