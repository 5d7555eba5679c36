//! rppc CLI - Python package scaffolding

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use rppc_core::tui::InitArgs;
use rppc_core::{PackageSpec, ProductConfig};
use std::path::{Path, PathBuf};

/// rppc product configuration
#[derive(Clone)]
pub struct RppcConfig;

impl ProductConfig for RppcConfig {
    fn name(&self) -> &'static str {
        "rppc"
    }

    fn display_name(&self) -> &'static str {
        "rppc - Python package creator"
    }

    fn api_url_env(&self) -> &'static str {
        "RPPC_API_URL"
    }

    fn next_steps(&self, dir: &Path, spec: &PackageSpec) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        steps.push("pip install -r requirements.txt -r requirements-dev.txt".to_string());
        steps.push("pip install -e .".to_string());
        steps.push("pytest -vv tests".to_string());
        steps.push(format!("Start coding in {}/__init__.py", spec.name()));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "rppc")]
#[command(about = "CLI for scaffolding Python packages")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Python package
    Init(CliInitArgs),
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// YAML file with the package name, description, author and dependencies
    #[arg(short = 'f', long = "spec-file")]
    pub spec_file: Option<PathBuf>,

    /// Create a GitHub repository and push the initial commit to it
    #[arg(long)]
    pub github: bool,
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        InitArgs {
            spec_file: args.spec_file,
            github: args.github,
        }
    }
}

#[tokio::main]
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

    rppc_core::logging::init();

    let args = Args::parse();
    let config = RppcConfig;

    match args.command {
        Some(Command::Init(init_args)) => {
            let result = rppc_core::run(&config, init_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        None => {
            Args::command().print_help()?;
            Ok(())
        }
    }
}
