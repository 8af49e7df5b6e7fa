//! Blocking execution of external commands
//!
//! Every command inherits the terminal so the user sees (and can answer)
//! the generator and package-manager output. The orchestrator waits for
//! each command to exit before starting the next one.

use crate::catalog::ShellCommand;
use crate::error::{Result, ScaffoldError};
use colored::Colorize;
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Runs shelled commands on behalf of the orchestrator
pub trait CommandRunner {
    /// Run `command` in `cwd` to completion. A non-zero exit is an error.
    fn run(&mut self, command: &ShellCommand, cwd: &Path) -> impl Future<Output = Result<()>>;
}

/// Runs commands as real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&mut self, command: &ShellCommand, cwd: &Path) -> Result<()> {
        println!("{} {}", "Running:".dimmed(), command.to_string().yellow());

        let (program, args) = invocation(command, cfg!(target_os = "windows"));
        let status = TokioCommand::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| ScaffoldError::Spawn {
                command: command.to_string(),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}

/// Program and arguments actually spawned. On Windows `npx`, `pnpm` and
/// `yarn` are `.cmd` shims that only `cmd.exe` resolves.
pub(crate) fn invocation(command: &ShellCommand, windows: bool) -> (&str, Vec<&str>) {
    let args = command.args.iter().map(String::as_str);
    if windows {
        let mut wrapped = vec!["/C", command.program.as_str()];
        wrapped.extend(args);
        ("cmd.exe", wrapped)
    } else {
        (command.program.as_str(), args.collect())
    }
}
