//! nextkit core - scaffolding of opinionated Next.js projects
//!
//! The library drives `create-next-app`, installs the selected feature
//! stacks and then patches the generated project with bundled templates.
//! Binaries brand it through [`ProductConfig`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - command catalog, patch engine, template copies, tool detection
//! - **Layer 2: Workflow Orchestration** - [`workflow::Workflow`] running every step through a [`CommandRunner`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use nextkit_core::{AppSettings, ProjectSelections, SystemRunner, TemplateSource};
//! use nextkit_core::workflow::{Workflow, WorkflowOptions};
//!
//! let settings = AppSettings::new(ProjectSelections::default(), TemplateSource::Bundled, &cwd);
//! let report = Workflow::new(&MyConfig, &settings, SystemRunner, WorkflowOptions::default())
//!     .run()
//!     .await?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod fs;
pub mod patch;
pub mod product;
pub mod runtime;
pub mod templates;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{AppSettings, Database, DateUtility, PackageManager, ProjectSelections};
pub use error::ScaffoldError;
pub use product::{Author, ProductConfig};
pub use runtime::{check_prerequisites, CommandRunner, RuntimeInfo, SystemRunner};
pub use templates::TemplateSource;

#[cfg(feature = "tui")]
pub use tui::run;
