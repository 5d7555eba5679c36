//! Package facts collected from the user or from a specification file

use crate::error::{Error, Result};
use crate::templates::render::parse_dependencies;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// GitHub username used in generated docs when none was supplied
pub const DEFAULT_GITHUB_USERNAME: &str = "someuser";

/// Raw, untrimmed answers as they come out of prompts or a spec file
#[derive(Debug, Clone, Default)]
pub struct PackageInput {
    pub name: String,
    pub description: String,
    pub author_name: String,
    pub author_email: String,
    /// Comma-separated dependency list
    pub dependencies: String,
    pub license_index: usize,
    pub github_username: Option<String>,
}

/// Validated package facts, immutable for the rest of the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    name: String,
    description: String,
    author_name: String,
    author_email: String,
    dependencies: Vec<String>,
    license_index: usize,
    github_username: Option<String>,
}

impl PackageSpec {
    /// Trim every field and reject an empty package name
    pub fn new(input: PackageInput) -> Result<Self> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::InvalidSpec("package name must not be empty".into()));
        }

        let github_username = input
            .github_username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        Ok(Self {
            name,
            description: input.description.trim().to_string(),
            author_name: input.author_name.trim().to_string(),
            author_email: input.author_email.trim().to_string(),
            dependencies: parse_dependencies(&input.dependencies),
            license_index: input.license_index,
            github_username,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn author_email(&self) -> &str {
        &self.author_email
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn license_index(&self) -> usize {
        self.license_index
    }

    pub fn github_username(&self) -> Option<&str> {
        self.github_username.as_deref()
    }

    /// Same facts with a different GitHub owner (the authenticated user wins over the spec file)
    pub fn with_github_username(mut self, username: impl Into<String>) -> Self {
        let username = username.into().trim().to_string();
        self.github_username = Some(username).filter(|u| !u.is_empty());
        self
    }
}

/// Author block of a specification file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecAuthor {
    pub name: String,
    pub email: String,
}

/// Structured specification file (YAML) replacing the interactive prompts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecFile {
    pub name: String,

    pub description: String,

    pub author: SpecAuthor,

    #[serde(default)]
    pub dependencies: Vec<String>,

    /// GitHub username of the repository owner
    #[serde(default, rename = "github-id")]
    pub github_id: Option<String>,

    /// License catalog key (e.g. `mit`); prompted for when absent
    #[serde(default)]
    pub license: Option<String>,
}

impl SpecFile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_yaml::from_str(&content).map_err(|source| Error::SpecFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Convert into prompt-equivalent input with the chosen license index
    pub fn into_input(self, license_index: usize) -> PackageInput {
        PackageInput {
            name: self.name,
            description: self.description,
            author_name: self.author.name,
            author_email: self.author.email,
            dependencies: self.dependencies.join(","),
            license_index,
            github_username: self.github_id,
        }
    }
}
