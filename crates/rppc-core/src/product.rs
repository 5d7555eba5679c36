//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to define the scaffolder's identity,
//! the remote endpoints it talks to, and the instructions shown at the end
//! of a run.

use crate::package::PackageSpec;
use std::path::Path;

/// Configuration trait for the scaffolding CLI
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Default base URL of the GitHub REST API
    fn default_api_url(&self) -> &'static str {
        "https://api.github.com"
    }

    /// Environment variable name for overriding the API base URL
    fn api_url_env(&self) -> &'static str;

    /// Environment variable holding the token used for `--github`
    fn token_env(&self) -> &'static str {
        "GITHUB_TOKEN"
    }

    /// Name of the GitHub gitignore template written to `.gitignore`
    fn gitignore_template(&self) -> &'static str {
        "Python"
    }

    /// Message of the initial commit
    fn commit_message(&self) -> &'static str {
        "Initialize package repository"
    }

    /// Generate the "next steps" instructions after the package is created
    fn next_steps(&self, dir: &Path, spec: &PackageSpec) -> Vec<String>;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
