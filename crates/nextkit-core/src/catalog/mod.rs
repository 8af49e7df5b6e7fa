//! Static feature-to-package mapping and the command lines built from it

pub mod commands;
pub mod dependencies;

pub use commands::ShellCommand;
pub use dependencies::DependencySet;
