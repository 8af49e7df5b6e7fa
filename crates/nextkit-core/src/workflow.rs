//! Orchestration of a full scaffolding run
//!
//! generate → install dependencies → patch project files → relocate `app/`
//! → commit. Steps run one at a time. A failing command aborts the run;
//! a missing template or target file only skips the affected artifact.

use crate::catalog::{commands, dependencies, DependencySet, ShellCommand};
use crate::config::AppSettings;
use crate::error::Result;
use crate::fs;
use crate::patch::{self, json, TailwindPatch};
use crate::product::ProductConfig;
use crate::runtime::CommandRunner;
use crate::templates::copier::{self, Artifact};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Config files replaced by the MDX-enabled `next.config.js`
pub const LEGACY_NEXT_CONFIGS: &[&str] = &["next.config.mjs", "next.config.ts"];

/// Per-run switches that are not project selections
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowOptions {
    /// Leave the generated repository uncommitted
    pub skip_commit: bool,
}

/// What a run did, for the summary and for tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Every command run, in order
    pub commands: Vec<String>,
    /// Files written or patched, relative to the project root
    pub written: Vec<PathBuf>,
    /// Steps skipped because a precondition was missing
    pub skipped: Vec<String>,
}

pub struct Workflow<'a, C: ProductConfig, R: CommandRunner> {
    config: &'a C,
    settings: &'a AppSettings,
    runner: R,
    options: WorkflowOptions,
    report: Report,
}

impl<'a, C: ProductConfig, R: CommandRunner> Workflow<'a, C, R> {
    pub fn new(config: &'a C, settings: &'a AppSettings, runner: R, options: WorkflowOptions) -> Self {
        Self {
            config,
            settings,
            runner,
            options,
            report: Report::default(),
        }
    }

    fn root(&self) -> &'a Path {
        let settings: &'a AppSettings = self.settings;
        &settings.instance_root
    }

    /// Run every step. Only command failures are returned as errors.
    pub async fn run(mut self) -> Result<Report> {
        self.generate().await?;
        self.install_dependencies().await?;
        self.update_project_files().await?;
        self.relocate_app();

        if self.options.skip_commit {
            step("Skipping final commit");
        } else {
            self.commit().await?;
        }

        Ok(self.report)
    }

    /// Run `create-next-app` from the invocation directory. The project
    /// name is passed as-is, so nested names like `apps/web` resolve there.
    pub async fn generate(&mut self) -> Result<()> {
        step("Initiating the creation of the Next.js project...");
        let settings = self.settings;
        let selections = &settings.selections;
        let command = commands::create_next_app(selections.package_manager, &selections.project_name);
        self.exec(&command, &settings.working_dir).await
    }

    /// Install the base stack, shadcn components and every selected feature
    pub async fn install_dependencies(&mut self) -> Result<()> {
        let settings = self.settings;
        let selections = &settings.selections;
        let pm = selections.package_manager;

        step("Installing base libraries...");
        self.install(&dependencies::BASE).await?;

        step("Installing and configuring shadcn...");
        self.exec_in_root(&commands::shadcn_init(pm)).await?;
        for component in dependencies::SHADCN_COMPONENTS {
            self.exec_in_root(&commands::shadcn_add(pm, component)).await?;
        }

        if selections.use_mail {
            step("Installing dependencies for email management...");
            self.install(&dependencies::MAIL).await?;
        }

        if let Some(deps) = dependencies::date(selections.date_utility) {
            step(&format!("Installing {}...", selections.date_utility));
            self.install(&deps).await?;
        }

        if selections.use_mdx {
            step("Installing dependencies for MDX content...");
            self.install(&dependencies::MDX).await?;
        }

        if selections.use_i18n {
            step("Installing packages for internationalization...");
            self.install(&dependencies::I18N).await?;
        }

        if let Some(deps) = dependencies::database(selections.database) {
            step(&format!("Installing {}...", selections.database));
            self.install(&deps).await?;
        }

        Ok(())
    }

    /// Patch generated config files and copy template artifacts
    pub async fn update_project_files(&mut self) -> Result<()> {
        let root = self.root();
        let settings = self.settings;
        let selections = &settings.selections;

        step("Updating package.json...");
        let package_json = root.join("package.json");
        let result = patch::patch_json_file(&package_json, &json::package_json(&self.config.author()));
        if self.soft("package.json", result).is_some() {
            self.record(&package_json);
        }

        step("Configuring Tailwind...");
        match self.soft("tailwind config", patch::patch_tailwind_config(root)) {
            Some(TailwindPatch::Updated(path)) => {
                println!("   Tailwind configuration updated with @tailwindcss/typography plugin.");
                self.record(&path);
            }
            Some(TailwindPatch::AlreadyPatched(_)) => {
                println!("   Tailwind configuration already includes @tailwindcss/typography.");
            }
            None => {}
        }

        for artifact in copier::ARTIFACTS {
            if !artifact.gate.is_enabled(selections) {
                continue;
            }

            if *artifact == copier::PRISMA_SCHEMA {
                step("Initializing Prisma...");
                self.exec_in_root(&commands::prisma_init(selections.package_manager))
                    .await?;
            }

            if *artifact == copier::MIDDLEWARE {
                step("Adding the @locales path alias to tsconfig.json...");
                let tsconfig = root.join("tsconfig.json");
                let result = patch::patch_json_file(&tsconfig, &json::tsconfig_locales());
                if self.soft("tsconfig.json", result).is_some() {
                    self.record(&tsconfig);
                }
            }

            self.copy(artifact);

            if *artifact == copier::NEXT_CONFIG {
                self.remove_legacy_next_configs();
            }
        }

        if selections.use_i18n {
            step("Copying locales...");
            let result = copier::copy_tree(
                &settings.templates,
                copier::LOCALES_DIR,
                copier::LOCALES_DIR,
                root,
            );
            if self.soft("locales", result).is_some() {
                self.record(&root.join(copier::LOCALES_DIR));
            }
        }

        Ok(())
    }

    /// Move `src/app` to `app` and point shadcn at the new stylesheet
    pub fn relocate_app(&mut self) {
        let root = self.root();
        let settings = self.settings;
        let use_i18n = settings.selections.use_i18n;

        step("Moving the app directory to the project root...");
        let Some(relocation) = self.soft(
            "app directory",
            patch::relocate_app(root, &settings.templates, use_i18n),
        ) else {
            return;
        };

        let Some(app_dir) = relocation.app_dir else {
            println!("   src/app does not exist. Nothing to move.");
            return;
        };
        self.record(&app_dir);

        let components = root.join("components.json");
        let result = patch::patch_json_file(&components, &json::components_css());
        if self.soft("components.json", result).is_some() {
            self.record(&components);
        }

        if let Some(error) = relocation.layout_error {
            warn("layout", &error);
            self.report.skipped.push("layout".to_string());
        } else if use_i18n {
            self.record(&app_dir.join("layout.tsx"));
        }

        if !relocation.localized.is_empty() {
            println!(
                "   Moved {} into app/[locale]",
                relocation.localized.join(", ")
            );
        }
    }

    /// Fold all changes into the generator's initial commit
    pub async fn commit(&mut self) -> Result<()> {
        step("Committing the project...");
        for command in commands::commit() {
            self.exec_in_root(&command).await?;
        }
        Ok(())
    }

    async fn install(&mut self, deps: &DependencySet) -> Result<()> {
        let pm = self.settings.selections.package_manager;
        for command in commands::install(pm, deps) {
            self.exec_in_root(&command).await?;
        }
        Ok(())
    }

    async fn exec_in_root(&mut self, command: &ShellCommand) -> Result<()> {
        let root = self.root();
        self.exec(command, root).await
    }

    async fn exec(&mut self, command: &ShellCommand, cwd: &Path) -> Result<()> {
        self.report.commands.push(command.to_string());
        self.runner.run(command, cwd).await
    }

    fn copy(&mut self, artifact: &Artifact) {
        let settings = self.settings;
        let result = copier::copy_artifact(&settings.templates, artifact, self.root());
        if let Some(path) = self.soft(artifact.destination, result) {
            self.record(&path);
        }
    }

    fn remove_legacy_next_configs(&mut self) {
        for name in LEGACY_NEXT_CONFIGS {
            let result = fs::remove_file_if_exists(&self.root().join(name));
            if let Some(true) = self.soft(name, result) {
                println!("   Removed {}", name);
            }
        }
    }

    /// Turn a soft error into a warning and a skipped entry
    fn soft<T>(&mut self, label: &str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn(label, &e.to_string());
                self.report.skipped.push(label.to_string());
                None
            }
        }
    }

    fn record(&mut self, path: &Path) {
        let relative = path.strip_prefix(self.root()).unwrap_or(path);
        self.report.written.push(relative.to_path_buf());
    }
}

fn step(message: &str) {
    println!("{} {}", "->".blue(), message);
}

fn warn(label: &str, message: &str) {
    eprintln!("{} skipping {}: {}", "Warning:".yellow(), label, message);
}
