//! Verbatim template copies into the generated project

use super::TemplateSource;
use crate::config::{Database, ProjectSelections};
use crate::error::{Result, ScaffoldError};
use crate::fs;
use std::path::{Path, PathBuf};

/// Which selection enables an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    Mdx,
    Mail,
    Prisma,
    Drizzle,
    I18n,
}

impl Gate {
    pub fn is_enabled(&self, selections: &ProjectSelections) -> bool {
        match self {
            Gate::Always => true,
            Gate::Mdx => selections.use_mdx,
            Gate::Mail => selections.use_mail,
            Gate::Prisma => selections.database == Database::Prisma,
            Gate::Drizzle => selections.database == Database::Drizzle,
            Gate::I18n => selections.use_i18n,
        }
    }
}

/// How the fragment is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Bytes copied as-is
    Raw,
    /// Parsed and re-written as two-space indented JSON
    Json,
}

/// A template fragment and where it lands in the project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifact {
    pub template: &'static str,
    pub destination: &'static str,
    pub gate: Gate,
    pub format: Format,
}

const fn artifact(template: &'static str, destination: &'static str, gate: Gate) -> Artifact {
    Artifact {
        template,
        destination,
        gate,
        format: Format::Raw,
    }
}

pub const README: Artifact = artifact("base/readme.md", "README.md", Gate::Always);
pub const CURSOR_RULES: Artifact = artifact("base/cursor.txt", ".cursorrules", Gate::Always);
pub const ESLINT_RC: Artifact = Artifact {
    format: Format::Json,
    ..artifact("configs/eslintrc.json", ".eslintrc.json", Gate::Always)
};
pub const PRETTIER_RC: Artifact = Artifact {
    format: Format::Json,
    ..artifact("configs/prettierrc.json", ".prettierrc", Gate::Always)
};
pub const ENV: Artifact = artifact("base/env.txt", ".env", Gate::Always);
pub const SAFE_ACTION: Artifact = artifact(
    "libs/next-safe-actions.txt",
    "src/lib/next-safe-action.ts",
    Gate::Always,
);
pub const NEXT_CONFIG: Artifact = artifact("configs/next-config.txt", "next.config.js", Gate::Mdx);
pub const RESEND: Artifact = artifact("libs/resend.txt", "src/lib/resend.ts", Gate::Mail);
pub const PRISMA_SCHEMA: Artifact =
    artifact("libs/prisma.txt", "prisma/schema.prisma", Gate::Prisma);
pub const DRIZZLE_SCHEMA: Artifact = artifact("libs/drizzle.txt", "src/db/schema.ts", Gate::Drizzle);
pub const SITEMAP: Artifact = artifact(
    "configs/next-sitemap.txt",
    "next-sitemap.config.js",
    Gate::Always,
);
pub const APP_CONFIG: Artifact = artifact("configs/app.config.txt", "src/app.config.ts", Gate::Always);
pub const MIDDLEWARE: Artifact = artifact("configs/middleware.txt", "middleware.ts", Gate::I18n);

/// Every single-file artifact, in the order they are applied
pub const ARTIFACTS: &[Artifact] = &[
    README,
    CURSOR_RULES,
    ESLINT_RC,
    PRETTIER_RC,
    ENV,
    SAFE_ACTION,
    NEXT_CONFIG,
    RESEND,
    PRISMA_SCHEMA,
    DRIZZLE_SCHEMA,
    SITEMAP,
    APP_CONFIG,
    MIDDLEWARE,
];

/// Locale tree copied to `locales/` when internationalization is selected
pub const LOCALES_DIR: &str = "locales";

/// Copy one artifact into `instance_root`, overwriting any existing file.
/// Returns the written path.
pub fn copy_artifact(
    source: &TemplateSource,
    artifact: &Artifact,
    instance_root: &Path,
) -> Result<PathBuf> {
    let target = instance_root.join(artifact.destination);

    match artifact.format {
        Format::Raw => {
            let content = source.read(artifact.template)?;
            fs::write_bytes(&target, &content)?;
        }
        Format::Json => {
            let content = source.read_text(artifact.template)?;
            let value = serde_json::from_str(&content).map_err(|e| ScaffoldError::Json {
                path: PathBuf::from(artifact.template),
                source: e,
            })?;
            fs::write_json(&target, &value)?;
        }
    }

    Ok(target)
}

/// Copy a fragment directory to `destination` under `instance_root`
pub fn copy_tree(
    source: &TemplateSource,
    template_dir: &str,
    destination: &str,
    instance_root: &Path,
) -> Result<usize> {
    source.copy_dir(template_dir, &instance_root.join(destination))
}
