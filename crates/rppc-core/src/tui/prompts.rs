//! Charm-style CLI prompts using cliclack

use crate::error::Error;
use crate::package::{PackageInput, PackageSpec, SpecFile};
use crate::product::ProductConfig;
use crate::remote::{CreateOutcome, Credentials, GitHubClient, LicenseCatalog};
use crate::scaffold::{Reporter, ScaffoldOptions, ScaffoldReport, Scaffolder};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// YAML specification file used instead of the package prompts
    pub spec_file: Option<PathBuf>,

    /// Create a GitHub repository and push the initial commit
    pub github: bool,
}

/// Reporter rendering scaffold progress as cliclack log lines
struct CliReporter;

impl Reporter for CliReporter {
    fn step(&self, message: &str) {
        let _ = cliclack::log::step(message);
    }

    fn warn(&self, message: &str) {
        let _ = cliclack::log::warning(message);
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: InitArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Load the license catalog (once per run)
    let client = GitHubClient::from_config(config)?;
    let catalog = load_catalog(&client).await?;

    // Step 2: Collect package facts
    let spec = match &args.spec_file {
        Some(path) => spec_from_file(path, &catalog)?,
        None => spec_from_prompts(&catalog)?,
    };

    // Step 3: Credentials for the remote repository
    let (spec, credentials) = if args.github {
        let credentials = collect_credentials(config, &spec)?;
        let spec = spec.with_github_username(credentials.username.clone());
        (spec, Some(credentials))
    } else {
        (spec, None)
    };

    // Step 4: Check the target directory
    let base_dir = std::env::current_dir().context("Failed to read current directory")?;
    confirm_target(&base_dir.join(spec.name()), args.spec_file.is_some())?;

    // Step 5: Scaffold
    let mut options = ScaffoldOptions::new(base_dir);
    options.remote = credentials;
    options.gitignore_template = config.gitignore_template().to_string();
    options.commit_message = config.commit_message().to_string();

    let report = Scaffolder::new(&client, &catalog, &CliReporter)
        .run(&spec, &options)
        .await?;

    // Step 6: Summary and next steps
    print_summary(&report)?;
    print_next_steps(config, &report.package_dir, &spec)?;

    Ok(())
}

async fn load_catalog(client: &GitHubClient) -> Result<LicenseCatalog> {
    let spinner = cliclack::spinner();
    spinner.start("Loading licenses...");

    match LicenseCatalog::fetch(client).await {
        Ok(catalog) if catalog.is_empty() => {
            spinner.stop("No licenses available");
            anyhow::bail!("The license catalog is empty.");
        }
        Ok(catalog) => {
            spinner.stop(format!("Loaded {} licenses", catalog.len()));
            Ok(catalog)
        }
        Err(e) => {
            spinner.stop("Failed to load licenses");
            Err(e.into())
        }
    }
}

fn spec_from_file(path: &Path, catalog: &LicenseCatalog) -> Result<PackageSpec> {
    cliclack::log::info(format!("Using specification file {}", path.display()))?;
    let file = SpecFile::from_path(path)?;

    let license_index = match &file.license {
        Some(key) => catalog.position(key)?,
        None => select_license(catalog)?,
    };

    Ok(PackageSpec::new(file.into_input(license_index))?)
}

fn spec_from_prompts(catalog: &LicenseCatalog) -> Result<PackageSpec> {
    let name: String = cliclack::input("Package name")
        .placeholder("my_package")
        .validate(|input: &String| {
            if input.trim().is_empty() {
                Err("Please enter a package name")
            } else {
                Ok(())
            }
        })
        .interact()?;

    let description: String = cliclack::input("Initial package description")
        .required(false)
        .interact()?;

    let author_name: String = cliclack::input("Primary author name").interact()?;

    let author_email: String = cliclack::input("Primary author email").interact()?;

    let dependencies: String = cliclack::input("Package dependencies (comma separated)")
        .placeholder("requests, pyyaml")
        .required(false)
        .interact()?;

    let github_username: String = cliclack::input("GitHub username")
        .required(false)
        .interact()?;

    let license_index = select_license(catalog)?;

    Ok(PackageSpec::new(PackageInput {
        name,
        description,
        author_name,
        author_email,
        dependencies,
        license_index,
        github_username: Some(github_username),
    })?)
}

fn select_license(catalog: &LicenseCatalog) -> Result<usize> {
    let mut select = cliclack::select("Select a license");
    for (idx, entry) in catalog.entries().iter().enumerate() {
        select = select.item(idx, &entry.name, entry.spdx_id.as_deref().unwrap_or(""));
    }

    let selected: usize = select.interact()?;
    Ok(selected)
}

fn collect_credentials<C: ProductConfig>(config: &C, spec: &PackageSpec) -> Result<Credentials> {
    let username = match spec.github_username() {
        Some(username) => username.to_string(),
        None => cliclack::input("GitHub username").interact()?,
    };

    let token = match std::env::var(config.token_env()) {
        Ok(token) if !token.trim().is_empty() => {
            cliclack::log::info(format!("Using token from {}", config.token_env()))?;
            token
        }
        _ => cliclack::password("GitHub token")
            .mask('▪')
            .interact()?,
    };

    match Credentials::new(username, token) {
        Ok(credentials) => Ok(credentials),
        Err(Error::MissingAuth) => {
            cliclack::log::error("Authentication required. Please provide a username and token!")?;
            Err(Error::MissingAuth.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn confirm_target(package_dir: &Path, non_interactive: bool) -> Result<()> {
    if !package_dir.is_dir() {
        return Ok(());
    }

    let count = std::fs::read_dir(package_dir)
        .map(|entries| entries.count())
        .unwrap_or(0);
    if count == 0 {
        return Ok(());
    }

    cliclack::log::warning(format!(
        "{} already has {} items; generated files will overwrite existing ones",
        package_dir.display(),
        count
    ))?;

    let confirm = if non_interactive {
        true
    } else {
        cliclack::confirm("Continue anyway?")
            .initial_value(false)
            .interact()?
    };

    if !confirm {
        anyhow::bail!("Setup cancelled.");
    }

    Ok(())
}

fn print_summary(report: &ScaffoldReport) -> Result<()> {
    cliclack::log::success(format!(
        "Created {} files in {}",
        report.files.len(),
        report.package_dir.display()
    ))?;

    match &report.remote {
        Some(CreateOutcome::Created(repo)) if report.pushed => {
            cliclack::log::success(format!("Pushed to {}", repo.clone_url))?;
        }
        Some(CreateOutcome::AlreadyExists(repo)) => {
            cliclack::log::info(format!(
                "Left the existing repository {} untouched",
                repo.full_name
            ))?;
        }
        _ => {}
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, package_dir: &Path, spec: &PackageSpec) -> Result<()> {
    let steps = config.next_steps(package_dir, spec);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
