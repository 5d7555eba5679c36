//! rppc Core - library behind the `rppc` Python package scaffolder
//!
//! Given a handful of package facts, the library writes a ready-to-commit
//! Python package (license, readme, packaging metadata, CI and lint config,
//! test stub, docs skeleton), commits it, and optionally creates and pushes
//! to a GitHub repository.
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - file writing, template rendering, GitHub
//!   API calls (`templates`, `remote`, `runtime`)
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and `Scaffolder`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use rppc_core::{GitHubClient, LicenseCatalog, PackageInput, PackageSpec};
//! use rppc_core::scaffold::{Reporter, ScaffoldOptions, Scaffolder};
//!
//! struct Quiet;
//! impl Reporter for Quiet {
//!     fn step(&self, _: &str) {}
//!     fn warn(&self, _: &str) {}
//! }
//!
//! let client = GitHubClient::from_config(&MyConfig)?;
//! let catalog = LicenseCatalog::fetch(&client).await?;
//! let spec = PackageSpec::new(PackageInput { name: "foo".into(), ..Default::default() })?;
//! let report = Scaffolder::new(&client, &catalog, &Quiet)
//!     .run(&spec, &ScaffoldOptions::new("."))
//!     .await?;
//! ```

pub mod error;
pub mod logging;
pub mod package;
pub mod product;
pub mod remote;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use package::{PackageInput, PackageSpec, SpecFile};
pub use product::ProductConfig;
pub use remote::{CreateOutcome, Credentials, GitHubClient, LicenseCatalog, RepoLookup};
pub use scaffold::{ScaffoldOptions, ScaffoldReport, Scaffolder};

#[cfg(feature = "tui")]
pub use tui::run;
