//! Synchronous filesystem helpers used by every patch step
//!
//! All paths are passed explicitly; nothing here depends on the process
//! working directory.

use crate::error::{Result, ScaffoldError};
use serde_json::Value;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ScaffoldError::MissingTarget(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))
}

pub fn read_json(path: &Path) -> Result<Value> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|e| ScaffoldError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `content`, creating parent directories as needed
pub fn write_bytes(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(|e| ScaffoldError::io(path, e))
}

pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_bytes(path, content.as_bytes())
}

/// Pretty-print `value` with two-space indentation and a trailing newline
pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    write_text(path, &to_pretty_json(value))
}

pub fn to_pretty_json(value: &Value) -> String {
    // Serializing a `Value` cannot fail
    let mut content = serde_json::to_string_pretty(value).unwrap_or_default();
    content.push('\n');
    content
}

pub fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ScaffoldError::io(path, e))
}

pub fn rename(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| ScaffoldError::io(from, e))
}

/// Remove a file if present. Returns whether anything was deleted.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|e| ScaffoldError::io(path, e))?;
    Ok(true)
}

/// Names of the direct children of `dir`, sorted
pub fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ScaffoldError::io(dir, e))? {
        let entry = entry.map_err(|e| ScaffoldError::io(dir, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Recursively copy `from` into `to`, overwriting existing files.
/// Returns the number of files copied.
pub fn copy_dir(from: &Path, to: &Path) -> Result<usize> {
    if !from.is_dir() {
        return Err(ScaffoldError::MissingTarget(from.to_path_buf()));
    }

    let mut copied = 0;
    for entry in WalkDir::new(from).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(from).to_path_buf();
            ScaffoldError::io(path, e.into())
        })?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .unwrap_or_else(|_| entry.path());
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target).map_err(|e| ScaffoldError::io(entry.path(), e))?;
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_write_text_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("src/lib/next-safe-action.ts");

        write_text(&path, "export {};").unwrap();
        assert_eq!(read_text(&path).unwrap(), "export {};");
    }

    #[test]
    fn test_read_missing_file_is_missing_target() {
        let tmp = TempDir::new().unwrap();
        let err = read_text(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ScaffoldError::MissingTarget(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_json_is_two_space_indented() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("package.json");

        write_json(&path, &json!({"name": "app", "private": true})).unwrap();
        let content = read_text(&path).unwrap();
        assert_eq!(content, "{\n  \"name\": \"app\",\n  \"private\": true\n}\n");
        assert_eq!(read_json(&path).unwrap()["name"], "app");
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tsconfig.json");
        write_text(&path, "{ not json").unwrap();

        let err = read_json(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::Json { .. }));
        assert!(err.to_string().contains("tsconfig.json"));
    }

    #[test]
    fn test_copy_dir_recurses() {
        let tmp = TempDir::new().unwrap();
        let from = tmp.path().join("locales");
        write_text(&from.join("server.ts"), "server").unwrap();
        write_text(&from.join("_locales/en.ts"), "en").unwrap();

        let to = tmp.path().join("out/locales");
        let copied = copy_dir(&from, &to).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(read_text(&to.join("_locales/en.ts")).unwrap(), "en");
    }

    #[test]
    fn test_remove_file_if_exists() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("next.config.mjs");

        assert!(!remove_file_if_exists(&path).unwrap());
        write_text(&path, "export default {}").unwrap();
        assert!(remove_file_if_exists(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_list_dir_sorted() {
        let tmp = TempDir::new().unwrap();
        write_text(&tmp.path().join("page.tsx"), "").unwrap();
        write_text(&tmp.path().join("about.tsx"), "").unwrap();

        assert_eq!(list_dir(tmp.path()).unwrap(), vec!["about.tsx", "page.tsx"]);
    }
}
