//! Error type shared by the filesystem layer, patch engine and command runner

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scaffolding a project.
///
/// Only command failures are fatal. Everything else is a soft precondition
/// miss: the affected artifact is skipped and the run continues.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A shelled command exited with a non-zero status
    #[error("An error occurred while executing command: {command}{}", code.map(|c| format!(" (exit code {})", c)).unwrap_or_default())]
    CommandFailed { command: String, code: Option<i32> },

    /// A shelled command could not be started at all
    #[error("Failed to start command: {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A template fragment is absent from the active template source
    #[error("Template '{0}' not found")]
    MissingTemplate(String),

    /// A file or directory the step patches does not exist
    #[error("{} does not exist", .0.display())]
    MissingTarget(PathBuf),
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error must terminate the run
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CommandFailed { .. } | Self::Spawn { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_command_errors_are_fatal() {
        let failed = ScaffoldError::CommandFailed {
            command: "bun add zod".to_string(),
            code: Some(1),
        };
        assert!(failed.is_fatal());
        assert!(failed.to_string().contains("bun add zod"));
        assert!(failed.to_string().contains("exit code 1"));

        let missing = ScaffoldError::MissingTemplate("libs/resend.txt".to_string());
        assert!(!missing.is_fatal());

        let target = ScaffoldError::MissingTarget(PathBuf::from("tsconfig.json"));
        assert!(!target.is_fatal());
    }
}
