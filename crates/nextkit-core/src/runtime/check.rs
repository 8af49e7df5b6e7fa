//! Detection of the tools a run depends on: the package manager, Node.js and git

use super::exec::invocation;
use crate::catalog::ShellCommand;
use crate::config::PackageManager;
use anyhow::Result;
use semver::Version;
use std::process::Command;

/// Oldest Node.js release supported by `create-next-app`
pub const MIN_NODE_VERSION: &str = "18.18.0";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Run `<binary> --version` and capture the trimmed output
fn check_tool(name: &'static str, binary: &str) -> RuntimeInfo {
    let probe = ShellCommand::new(binary, ["--version"]);
    let (program, args) = invocation(&probe, cfg!(target_os = "windows"));
    let output = Command::new(program).args(args).output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

pub fn check_node() -> RuntimeInfo {
    check_tool("Node.js", "node")
}

pub fn check_git() -> RuntimeInfo {
    check_tool("git", "git")
}

pub fn check_package_manager(pm: PackageManager) -> RuntimeInfo {
    let name = match pm {
        PackageManager::Bun => "Bun",
        PackageManager::Npm => "npm",
        PackageManager::Pnpm => "pnpm",
        PackageManager::Yarn => "Yarn",
    };
    check_tool(name, pm.binary())
}

/// Parse version string, handling a leading 'v' (`node --version` prints `v20.11.0`)
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

/// Whether `version` satisfies [`MIN_NODE_VERSION`]. Unparsable versions pass.
pub fn node_version_supported(version: &str) -> bool {
    let (Ok(found), Ok(minimum)) = (parse_version(version), parse_version(MIN_NODE_VERSION))
    else {
        return true; // Can't compare, skip warning
    };
    found >= minimum
}

/// Check everything the run needs. Fails listing every missing tool.
pub fn check_prerequisites(pm: PackageManager, needs_git: bool) -> Result<Vec<RuntimeInfo>> {
    let mut tools = vec![check_package_manager(pm), check_node()];
    if needs_git {
        tools.push(check_git());
    }
    evaluate(pm, tools)
}

fn evaluate(pm: PackageManager, tools: Vec<RuntimeInfo>) -> Result<Vec<RuntimeInfo>> {
    let mut missing = Vec::new();

    for tool in &tools {
        if !tool.available {
            let hint = match tool.name {
                "Node.js" => "https://nodejs.org".to_string(),
                "git" => "https://git-scm.com/downloads".to_string(),
                _ => pm.docs_url().to_string(),
            };
            missing.push(format!("{} (install from {})", tool.name, hint));
        } else if tool.name == "Node.js" {
            let version = tool.version.as_deref().unwrap_or_default();
            if !node_version_supported(version) {
                missing.push(format!(
                    "Node.js {} or newer (found {})",
                    MIN_NODE_VERSION, version
                ));
            }
        }
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required tools:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(tools)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &'static str, version: Option<&str>) -> RuntimeInfo {
        RuntimeInfo {
            name,
            version: version.map(str::to_string),
            available: version.is_some(),
        }
    }

    #[test]
    fn test_parse_version_strips_prefix() {
        assert_eq!(parse_version("v20.11.0\n").unwrap(), Version::new(20, 11, 0));
        assert!(parse_version("invalid").is_err());
    }

    #[test]
    fn test_node_version_supported() {
        assert!(node_version_supported("v20.11.0"));
        assert!(node_version_supported("v18.18.0"));
        assert!(!node_version_supported("v16.20.2"));
        assert!(node_version_supported("nightly"));
    }

    #[test]
    fn test_all_present() {
        let tools = vec![info("Bun", Some("1.1.0")), info("Node.js", Some("v22.0.0"))];
        assert_eq!(evaluate(PackageManager::Bun, tools).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_tools_are_listed() {
        let tools = vec![
            info("pnpm", None),
            info("Node.js", Some("v16.0.0")),
            info("git", None),
        ];
        let err = evaluate(PackageManager::Pnpm, tools).unwrap_err().to_string();

        assert!(err.contains("pnpm (install from https://pnpm.io/installation)"));
        assert!(err.contains("Node.js 18.18.0 or newer (found v16.0.0)"));
        assert!(err.contains("git (install from https://git-scm.com/downloads)"));
    }
}
