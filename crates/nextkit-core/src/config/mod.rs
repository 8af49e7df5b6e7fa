//! Project selections and per-run settings

pub mod project;

pub use project::{
    AppSettings, Database, DateUtility, PackageManager, ProjectSelections, DEFAULT_PROJECT_NAME,
};
