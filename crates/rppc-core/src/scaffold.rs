//! End-to-end scaffold run
//!
//! [`Scaffolder::run`] performs every step in a fixed order. Each step's
//! error halts the run, except the optional external tools (versioneer,
//! sphinx-quickstart), whose absence or failure becomes a warning.

use crate::error::Result;
use crate::package::{PackageSpec, DEFAULT_GITHUB_USERNAME};
use crate::remote::{self, CreateOutcome, Credentials, GitHubClient, LicenseCatalog};
use crate::runtime::tool::{self, ToolConfig, ToolManager};
use crate::runtime::{Git, Signature};
use crate::templates::{ensure_directory, render, write_file};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Receives progress from a scaffold run
pub trait Reporter {
    fn step(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Inputs of a run besides the package facts
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Directory the package directory is created in
    pub base_dir: PathBuf,
    /// Create a GitHub repository and push to it
    pub remote: Option<Credentials>,
    /// GitHub gitignore template for `.gitignore`
    pub gitignore_template: String,
    pub commit_message: String,
    /// Run versioneer and sphinx-quickstart
    pub run_tools: bool,
    pub versioneer: ToolConfig,
    pub sphinx: ToolConfig,
}

impl ScaffoldOptions {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            remote: None,
            gitignore_template: "Python".to_string(),
            commit_message: "Initialize package repository".to_string(),
            run_tools: true,
            versioneer: tool::versioneer_config(),
            sphinx: tool::sphinx_config(),
        }
    }
}

/// What a run produced
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub package_dir: PathBuf,
    /// Every generated file, relative to `package_dir`, `.git` excluded
    pub files: Vec<PathBuf>,
    pub remote: Option<CreateOutcome>,
    pub pushed: bool,
    pub warnings: Vec<String>,
}

pub struct Scaffolder<'a> {
    client: &'a GitHubClient,
    catalog: &'a LicenseCatalog,
    reporter: &'a dyn Reporter,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        client: &'a GitHubClient,
        catalog: &'a LicenseCatalog,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            client,
            catalog,
            reporter,
        }
    }

    pub async fn run(&self, spec: &PackageSpec, options: &ScaffoldOptions) -> Result<ScaffoldReport> {
        let name = spec.name();
        let mut warnings = Vec::new();

        let repository = match &options.remote {
            Some(credentials) => {
                self.reporter
                    .step(&format!("Creating GitHub repository {}/{}", credentials.username, name));
                let outcome = remote::create_repository(
                    self.client,
                    name,
                    spec.description(),
                    credentials,
                )
                .await?;
                if let CreateOutcome::AlreadyExists(existing) = &outcome {
                    let msg = format!(
                        "{} already exists on GitHub; skipping push",
                        existing.full_name
                    );
                    self.reporter.warn(&msg);
                    warnings.push(msg);
                }
                Some(outcome)
            }
            None => None,
        };

        self.reporter.step(&format!("Creating package directory {name}"));
        let package_dir = ensure_directory(&options.base_dir, name).await?;

        self.reporter.step("Initializing git repository");
        let git = Git::new(&package_dir);
        git.init().await?;
        let gitignore = remote::fetch_gitignore(self.client, &options.gitignore_template).await?;
        write_file(&package_dir, ".gitignore", &render::gitignore(&gitignore)).await?;

        let code_dir = ensure_directory(&package_dir, name).await?;
        write_file(&code_dir, "__init__.py", &render::package_init(spec.author_name())).await?;

        let notebooks_dir = ensure_directory(&package_dir, "notebooks").await?;
        write_file(&notebooks_dir, ".gitkeep", "").await?;

        self.reporter.step("Writing LICENSE");
        let license = self
            .catalog
            .resolve(self.client, spec.license_index(), spec.author_name())
            .await?;
        write_file(&package_dir, "LICENSE", &license.body).await?;

        self.reporter.step("Writing package files");
        let owner = options
            .remote
            .as_ref()
            .map(|credentials| credentials.username.as_str())
            .or(spec.github_username())
            .unwrap_or(DEFAULT_GITHUB_USERNAME);
        self.write_package_files(spec, &package_dir, owner, license.identifier())
            .await?;

        if options.run_tools {
            let docs_dir = ensure_directory(&package_dir, "docs").await?;
            let steps = [
                (
                    ToolManager::new(options.versioneer.clone()),
                    tool::versioneer_args(),
                ),
                (
                    ToolManager::new(options.sphinx.clone()),
                    tool::sphinx_args(name, spec.author_name(), &docs_dir),
                ),
            ];
            for (manager, args) in &steps {
                if let Err(msg) = self.run_tool(manager, &package_dir, args).await {
                    self.reporter.warn(&msg);
                    warnings.push(msg);
                }
            }
        }

        self.reporter.step("Committing files");
        git.add_all().await?;
        git.commit(
            &options.commit_message,
            Signature {
                name: spec.author_name(),
                email: spec.author_email(),
            },
        )
        .await?;

        let mut pushed = false;
        if let (Some(CreateOutcome::Created(repo)), Some(credentials)) = (&repository, &options.remote)
        {
            self.reporter.step(&format!("Pushing to {}", repo.clone_url));
            git.remote_add("origin", &repo.clone_url).await?;
            git.push("origin", credentials).await?;
            pushed = true;
        }

        Ok(ScaffoldReport {
            files: generated_files(&package_dir),
            package_dir,
            remote: repository,
            pushed,
            warnings,
        })
    }

    async fn write_package_files(
        &self,
        spec: &PackageSpec,
        package_dir: &Path,
        github_username: &str,
        license_id: &str,
    ) -> Result<()> {
        let name = spec.name();

        let files = [
            (".flake8", render::flake8(name)),
            (
                "AUTHORS.md",
                render::authors(spec.author_name(), spec.author_email()),
            ),
            ("CONTRIBUTING.md", render::contributing(name, github_username)),
            ("README.md", render::readme(name, spec.description())),
            ("requirements.txt", render::requirements(spec.dependencies())),
            ("requirements-dev.txt", render::dev_requirements("")),
            ("setup.py", render::setup_py(spec, license_id)),
            ("setup.cfg", render::setup_cfg(name)),
            ("MANIFEST.in", render::manifest("")),
            (".travis.yml", render::travis(name)),
        ];
        for (filename, content) in &files {
            write_file(package_dir, filename, content).await?;
        }

        let tests_dir = ensure_directory(package_dir, "tests").await?;
        write_file(&tests_dir, "__init__.py", "").await?;
        write_file(&tests_dir, "test_example.py", &render::test_example()).await?;

        Ok(())
    }

    /// Run an optional tool, turning any failure into a warning message
    async fn run_tool(
        &self,
        tool: &ToolManager,
        dir: &Path,
        args: &[String],
    ) -> std::result::Result<(), String> {
        let config = tool.config();
        if !tool.is_installed() {
            return Err(format!(
                "{} not found, skipped (install with `{}`)",
                config.display_name, config.install_hint
            ));
        }

        let version = tool.get_version().unwrap_or_else(|| "unknown version".to_string());
        self.reporter
            .step(&format!("Running {} ({})", config.display_name, version));
        tool.run(dir, args)
            .await
            .map_err(|e| format!("{} failed: {}", config.display_name, e))
    }
}

/// Files under `dir`, relative and sorted, skipping the `.git` directory
fn generated_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.path().strip_prefix(dir).ok().map(Path::to_path_buf))
        .collect();
    files.sort();
    files
}
