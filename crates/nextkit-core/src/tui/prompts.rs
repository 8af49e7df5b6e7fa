//! Charm-style CLI prompts using cliclack

use crate::config::{AppSettings, Database, DateUtility, PackageManager, ProjectSelections};
use crate::product::ProductConfig;
use crate::runtime::{check, SystemRunner};
use crate::templates::TemplateSource;
use crate::workflow::{Report, Workflow, WorkflowOptions};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// CLI arguments for the create command. A `Some` answers its prompt.
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name, also the directory created under the current one
    pub name: Option<String>,

    pub package_manager: Option<PackageManager>,

    pub mail: Option<bool>,

    pub i18n: Option<bool>,

    pub mdx: Option<bool>,

    pub date: Option<DateUtility>,

    pub database: Option<Database>,

    /// Local directory to use for templates instead of the bundled ones
    pub template_dir: Option<PathBuf>,

    /// Skip the package manager, Node.js and git checks
    pub skip_check: bool,

    /// Leave the generated repository uncommitted
    pub skip_commit: bool,

    /// Accept defaults for every unanswered prompt (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Collect selections
    let selections = select_options(&args)?;

    // Step 2: Check the tools the run shells out to
    if args.skip_check {
        cliclack::log::info("Skipping tool check")?;
    } else {
        handle_tool_check(&selections, &args)?;
    }

    // Step 3: Resolve where templates and the project live
    let templates = TemplateSource::resolve(config, args.template_dir.clone());
    let working_dir = std::env::current_dir().context("Failed to read the current directory")?;
    let settings = AppSettings::new(selections, templates, &working_dir);
    cliclack::log::info(format!("Using {}", settings.template_origin()))?;
    confirm_target(&settings, args.yes)?;

    // Step 4: Generate, install, patch, relocate, commit
    let options = WorkflowOptions {
        skip_commit: args.skip_commit,
    };
    let report = match Workflow::new(config, &settings, SystemRunner, options)
        .run()
        .await
    {
        Ok(report) => report,
        Err(e) => {
            cliclack::log::error(e.to_string())?;
            return Err(anyhow::Error::new(e).context("Project creation failed"));
        }
    };

    print_summary(&report)?;

    // Step 5: Show next steps
    print_next_steps(config, &settings)?;

    Ok(())
}

/// Resolve every selection: flag, then prompt (or default with `--yes`)
pub fn select_options(args: &CreateArgs) -> Result<ProjectSelections> {
    let defaults = ProjectSelections::default();

    let package_manager = answer(args.package_manager, args.yes, defaults.package_manager, |initial| {
        let mut select =
            cliclack::select("Which package manager do you want to use?").initial_value(initial);
        for pm in PackageManager::ALL {
            select = select.item(pm, pm.to_string(), "");
        }
        Ok(select.interact()?)
    })?;

    let project_name = answer(args.name.clone(), args.yes, defaults.project_name, |initial| {
        let input: String = cliclack::input("What is the name of your project?")
            .placeholder(&initial)
            .default_input(&initial)
            .interact()?;
        Ok(input)
    })?;

    let use_mail = answer(args.mail, args.yes, defaults.use_mail, |initial| {
        confirm("Do you want to use the email functionality?", initial)
    })?;

    let use_i18n = answer(args.i18n, args.yes, defaults.use_i18n, |initial| {
        confirm("Do you want to use internationalization (i18n)?", initial)
    })?;

    let use_mdx = answer(args.mdx, args.yes, defaults.use_mdx, |initial| {
        confirm("Do you want to use MDX?", initial)
    })?;

    let date_utility = answer(args.date, args.yes, defaults.date_utility, |initial| {
        let mut select =
            cliclack::select("Which date utility do you want to use?").initial_value(initial);
        for utility in [DateUtility::DateFns, DateUtility::Moment, DateUtility::None] {
            select = select.item(utility, utility.display_name(), "");
        }
        Ok(select.interact()?)
    })?;

    let database = answer(args.database, args.yes, defaults.database, |initial| {
        let mut select =
            cliclack::select("Which database toolkit do you want to use?").initial_value(initial);
        for database in [Database::Prisma, Database::Drizzle, Database::None] {
            select = select.item(database, database.display_name(), "");
        }
        Ok(select.interact()?)
    })?;

    Ok(ProjectSelections {
        package_manager,
        project_name,
        use_mail,
        use_i18n,
        use_mdx,
        date_utility,
        database,
    })
}

/// The flag value if given, the default in `--yes` mode, otherwise ask
fn answer<T, F>(flag: Option<T>, yes: bool, default: T, prompt: F) -> Result<T>
where
    F: FnOnce(T) -> Result<T>,
{
    match flag {
        Some(value) => Ok(value),
        None if yes => Ok(default),
        None => prompt(default),
    }
}

fn confirm(prompt: &str, initial: bool) -> Result<bool> {
    Ok(cliclack::confirm(prompt).initial_value(initial).interact()?)
}

fn handle_tool_check(selections: &ProjectSelections, args: &CreateArgs) -> Result<()> {
    let pm = selections.package_manager;

    let spinner = cliclack::spinner();
    spinner.start("Checking tools...");

    let missing = match check::check_prerequisites(pm, !args.skip_commit) {
        Ok(tools) => {
            let info: Vec<String> = tools
                .iter()
                .map(|t| format!("{} ({})", t.name, t.version.as_deref().unwrap_or("unknown")))
                .collect();
            spinner.stop(format!("Detected tools: {}", info.join(", ")));
            return Ok(());
        }
        Err(e) => e,
    };

    spinner.stop("Missing tools");
    cliclack::log::warning(format!("{}", missing))?;

    // In non-interactive mode, only the package manager is mandatory
    if args.yes {
        if check::check_package_manager(pm).available {
            cliclack::log::info("Continuing anyway (--yes mode)")?;
            return Ok(());
        }
        anyhow::bail!("{} is required to create the project.", pm);
    }

    let action: &str = cliclack::select("What would you like to do?")
        .item("docs", format!("Open {} documentation ({})", pm, pm.docs_url()), "")
        .item("continue", "Continue anyway", "")
        .item("abort", "Abort", "")
        .interact()?;

    match action {
        "docs" => {
            open::that(pm.docs_url())
                .with_context(|| format!("Failed to open {}", pm.docs_url()))?;
            cliclack::outro("After installing the missing tools, run this command again.")?;
            std::process::exit(0);
        }
        "continue" => {
            cliclack::log::info("Continuing without the missing tools")?;
            Ok(())
        }
        _ => anyhow::bail!("Setup cancelled."),
    }
}

/// Warn when the project directory already has content
fn confirm_target(settings: &AppSettings, yes: bool) -> Result<()> {
    let path = &settings.instance_root;
    if !path.is_dir() {
        return Ok(());
    }

    let count = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .count();
    if count == 0 {
        return Ok(());
    }

    cliclack::log::warning(format!(
        "Directory {} has {} existing items",
        path.display(),
        count
    ))?;

    // Auto-confirm with --yes flag
    let proceed = yes
        || cliclack::confirm("Continue anyway?")
            .initial_value(false)
            .interact()?;

    if !proceed {
        anyhow::bail!("Setup cancelled.");
    }
    Ok(())
}

fn print_summary(report: &Report) -> Result<()> {
    cliclack::log::success(format!(
        "Project created successfully! ({} commands run, {} files written)",
        report.commands.len(),
        report.written.len()
    ))?;

    if !report.skipped.is_empty() {
        cliclack::log::warning(format!("Skipped: {}", report.skipped.join(", ")))?;
    }
    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, settings: &AppSettings) -> Result<()> {
    let steps = config.next_steps(&settings.instance_root, &settings.selections);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!("Happy coding! Docs: {}", config.docs_url()))?;

    Ok(())
}
