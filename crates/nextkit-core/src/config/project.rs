//! User selections and the settings derived from them for a single run

use crate::templates::TemplateSource;
use clap::ValueEnum;
use std::fmt;
use std::path::{Path, PathBuf};

/// Package manager used to generate the project and install dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum PackageManager {
    #[default]
    Bun,
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [Self::Bun, Self::Npm, Self::Pnpm, Self::Yarn];

    /// Name of the executable on PATH
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Bun => "bun",
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Installation docs shown when the binary is missing
    pub fn docs_url(&self) -> &'static str {
        match self {
            PackageManager::Bun => "https://bun.sh/docs/installation",
            PackageManager::Npm => "https://docs.npmjs.com/downloading-and-installing-node-js-and-npm",
            PackageManager::Pnpm => "https://pnpm.io/installation",
            PackageManager::Yarn => "https://yarnpkg.com/getting-started/install",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

/// Date handling library installed into the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum DateUtility {
    #[default]
    #[value(name = "date-fns")]
    DateFns,
    #[value(name = "moment")]
    Moment,
    #[value(name = "none")]
    None,
}

impl DateUtility {
    pub fn display_name(&self) -> &'static str {
        match self {
            DateUtility::DateFns => "date-fns",
            DateUtility::Moment => "moment",
            DateUtility::None => "None",
        }
    }
}

impl fmt::Display for DateUtility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Database toolkit; the variants are mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Database {
    #[default]
    Prisma,
    Drizzle,
    None,
}

impl Database {
    pub fn display_name(&self) -> &'static str {
        match self {
            Database::Prisma => "Prisma",
            Database::Drizzle => "Drizzle",
            Database::None => "None",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Everything the user chose. Immutable once collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSelections {
    pub package_manager: PackageManager,
    pub project_name: String,
    pub use_mail: bool,
    pub use_i18n: bool,
    pub use_mdx: bool,
    pub date_utility: DateUtility,
    pub database: Database,
}

/// Default project name offered by the prompt
pub const DEFAULT_PROJECT_NAME: &str = "my-next-app";

impl Default for ProjectSelections {
    fn default() -> Self {
        Self {
            package_manager: PackageManager::Bun,
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            use_mail: true,
            use_i18n: true,
            use_mdx: true,
            date_utility: DateUtility::DateFns,
            database: Database::Prisma,
        }
    }
}

/// Selections plus the locations the run works with
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub selections: ProjectSelections,
    /// Directory the tool was invoked from; the generator runs here
    pub working_dir: PathBuf,
    /// Directory holding the running executable
    pub tool_root: PathBuf,
    /// Where template fragments are read from
    pub templates: TemplateSource,
    /// Root of the generated project
    pub instance_root: PathBuf,
}

impl AppSettings {
    /// Build settings for a project generated under `working_dir`
    pub fn new(selections: ProjectSelections, templates: TemplateSource, working_dir: &Path) -> Self {
        let tool_root = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| working_dir.to_path_buf());
        let instance_root = working_dir.join(&selections.project_name);

        Self {
            selections,
            working_dir: working_dir.to_path_buf(),
            tool_root,
            templates,
            instance_root,
        }
    }

    /// Local template directory, if templates are not read from the bundle
    pub fn template_root(&self) -> Option<&Path> {
        match &self.templates {
            TemplateSource::Local(path) => Some(path),
            TemplateSource::Bundled => None,
        }
    }

    /// Where templates come from, for the run's log output
    pub fn template_origin(&self) -> String {
        match self.template_root() {
            Some(dir) => format!("local templates from {}", dir.display()),
            None => format!("templates bundled with {}", self.tool_root.display()),
        }
    }
}
