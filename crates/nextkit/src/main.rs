//! nextkit CLI - Opinionated Next.js project scaffolding

use anyhow::Result;
use clap::{Parser, Subcommand};
use nextkit_core::catalog::commands::exec_prefix;
use nextkit_core::tui::CreateArgs;
use nextkit_core::{
    Author, Database, DateUtility, PackageManager, ProductConfig, ProjectSelections,
};
use std::path::{Path, PathBuf};

/// nextkit product configuration
#[derive(Clone)]
pub struct NextkitConfig;

impl ProductConfig for NextkitConfig {
    fn name(&self) -> &'static str {
        "nextkit"
    }

    fn display_name(&self) -> &'static str {
        "nextkit"
    }

    fn template_dir_env(&self) -> &'static str {
        "NEXTKIT_TEMPLATE_DIR"
    }

    fn author(&self) -> Author {
        Author {
            name: "Alfred Mouelle",
            email: "alfredmouelle@gmail.com",
            url: "https://alfredmouelle.com",
        }
    }

    fn docs_url(&self) -> &'static str {
        "https://nextjs.org/docs"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding opinionated Next.js projects"
    }

    fn next_steps(&self, dir: &Path, selections: &ProjectSelections) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();
        let pm = selections.package_manager;

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            let shown = current
                .as_deref()
                .and_then(|cwd| dir.strip_prefix(cwd).ok())
                .unwrap_or(dir);
            steps.push(format!("cd {}", shown.display()));
        }

        // Step 2: Database setup
        match selections.database {
            Database::Prisma => {
                steps.push(format!(
                    "Set DATABASE_URL in .env, then run: {} prisma migrate dev",
                    exec_hint(pm)
                ));
            }
            Database::Drizzle => {
                steps.push(format!(
                    "Set DATABASE_URL in .env, then run: {} drizzle-kit push",
                    exec_hint(pm)
                ));
            }
            Database::None => {}
        }

        // Step 3: Locales
        if selections.use_i18n {
            steps.push("Add translations under locales/_locales".to_string());
        }

        // Step 4: Start dev server
        steps.push(format!("{} run dev", pm));

        steps
    }
}

fn exec_hint(pm: PackageManager) -> String {
    exec_prefix(pm).join(" ")
}

#[derive(Parser, Debug)]
#[command(name = "nextkit")]
#[command(about = "CLI for scaffolding opinionated Next.js projects")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub create: CliCreateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Next.js project
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Project name (also the directory to create)
    pub name: Option<String>,

    /// Package manager used to generate the project and install dependencies
    #[arg(long = "package-manager", value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Set up Resend and react-email
    #[arg(long, value_name = "BOOL")]
    pub mail: Option<bool>,

    /// Set up next-international with en/fr locales
    #[arg(long, value_name = "BOOL")]
    pub i18n: Option<bool>,

    /// Set up MDX pages
    #[arg(long, value_name = "BOOL")]
    pub mdx: Option<bool>,

    /// Date utility to install
    #[arg(long, value_enum)]
    pub date: Option<DateUtility>,

    /// Database toolkit to install
    #[arg(long, value_enum)]
    pub database: Option<Database>,

    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Skip the package manager, Node.js and git checks
    #[arg(long = "skip-check")]
    pub skip_check: bool,

    /// Do not amend the generator's initial git commit
    #[arg(long = "skip-commit")]
    pub skip_commit: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            package_manager: args.package_manager,
            mail: args.mail,
            i18n: args.i18n,
            mdx: args.mdx,
            date: args.date,
            database: args.database,
            template_dir: args.template_dir,
            skip_check: args.skip_check,
            skip_commit: args.skip_commit,
            yes: args.yes,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = NextkitConfig;

    // No subcommand defaults to create
    let create_args = match args.command {
        Some(Command::Create(create_args)) => create_args,
        None => args.create,
    };

    let result = nextkit_core::run(&config, create_args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
