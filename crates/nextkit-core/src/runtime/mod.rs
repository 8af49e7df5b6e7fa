//! Tool detection and command execution
//!
//! This module provides:
//! - Detection of the package manager, Node.js and git
//! - The `CommandRunner` seam every shelled command goes through

pub mod check;
pub mod exec;

pub use check::{check_prerequisites, RuntimeInfo};
pub use exec::{CommandRunner, SystemRunner};
