//! Configuration patch engine
//!
//! The submodules hold pure merge operations (`json`, `tailwind`) and the
//! directory relocation. The helpers here pair each operation with its
//! file I/O: read the artifact, compute the merge, write it back.

pub mod json;
pub mod relocate;
pub mod tailwind;

use crate::error::{Result, ScaffoldError};
use crate::fs;
use std::path::{Path, PathBuf};

pub use json::JsonPatch;
pub use relocate::{relocate_app, Relocation};

/// Merge `patch` into the JSON file at `path` and rewrite it
pub fn patch_json_file(path: &Path, patch: &JsonPatch) -> Result<()> {
    let existing = fs::read_json(path)?;
    fs::write_json(path, &patch.apply(&existing))
}

/// Outcome of patching the tailwind config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TailwindPatch {
    Updated(PathBuf),
    AlreadyPatched(PathBuf),
}

/// Patch the first tailwind config found in `instance_root`
pub fn patch_tailwind_config(instance_root: &Path) -> Result<TailwindPatch> {
    let path = tailwind::CONFIG_FILES
        .iter()
        .map(|name| instance_root.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| ScaffoldError::MissingTarget(instance_root.join(tailwind::CONFIG_FILES[0])))?;

    let source = fs::read_text(&path)?;
    let patched = tailwind::patch_config(&source);

    if patched == source {
        return Ok(TailwindPatch::AlreadyPatched(path));
    }

    fs::write_text(&path, &patched)?;
    Ok(TailwindPatch::Updated(path))
}
