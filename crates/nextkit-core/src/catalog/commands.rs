//! Command lines for the package manager, generators and git

use super::dependencies::DependencySet;
use crate::config::PackageManager;
use std::fmt;

/// A program and its arguments, run without an intermediate shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(|c: char| c.is_whitespace() || c == '*') {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Package runner for one-off tools (`npx` and friends)
pub fn exec_prefix(pm: PackageManager) -> &'static [&'static str] {
    match pm {
        PackageManager::Npm => &["npx"],
        PackageManager::Pnpm => &["pnpm", "dlx"],
        PackageManager::Yarn => &["yarn"],
        PackageManager::Bun => &["bunx"],
    }
}

/// `<pmx> <args...>`
pub fn pm_exec<I, S>(pm: PackageManager, args: I) -> ShellCommand
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let prefix = exec_prefix(pm);
    let mut command = ShellCommand::new(prefix[0], prefix[1..].iter().copied());
    command.args.extend(args.into_iter().map(Into::into));
    command
}

/// Commands installing a dependency set: runtime packages, then dev packages if any
pub fn install(pm: PackageManager, deps: &DependencySet) -> Vec<ShellCommand> {
    let mut commands = Vec::new();

    if !deps.base.is_empty() {
        let mut args = vec!["add"];
        args.extend_from_slice(deps.base);
        commands.push(ShellCommand::new(pm.binary(), args));
    }

    if !deps.dev.is_empty() {
        let mut args = vec!["add", "-D"];
        args.extend_from_slice(deps.dev);
        commands.push(ShellCommand::new(pm.binary(), args));
    }

    commands
}

/// The external project generator
pub fn create_next_app(pm: PackageManager, project_name: &str) -> ShellCommand {
    pm_exec(
        pm,
        [
            "create-next-app@latest",
            project_name,
            "--typescript",
            "--eslint",
            "--tailwind",
            "--app",
            "--src-dir",
            "--import-alias",
            "@/*",
        ],
    )
}

pub fn shadcn_init(pm: PackageManager) -> ShellCommand {
    pm_exec(pm, ["shadcn@latest", "init"])
}

pub fn shadcn_add(pm: PackageManager, component: &str) -> ShellCommand {
    pm_exec(pm, ["shadcn@latest", "add", component])
}

pub fn prisma_init(pm: PackageManager) -> ShellCommand {
    pm_exec(pm, ["prisma", "init"])
}

/// Fold everything into the generator's initial commit
pub fn commit() -> Vec<ShellCommand> {
    vec![
        ShellCommand::new("git", ["add", "."]),
        ShellCommand::new("git", ["commit", "--amend", "--no-edit"]),
    ]
}
