//! GitHub API access
//!
//! This module provides:
//! - A small REST client with typed errors
//! - The license catalog and license resolution
//! - Repository existence checking and creation
//! - Gitignore template lookup

pub mod client;
pub mod license;
pub mod repos;

use crate::error::Result;
use serde::Deserialize;

pub use client::{Credentials, GitHubClient};
pub use license::{LicenseCatalog, LicenseDetail, LicenseEntry};
pub use repos::{create_repository, find_repository, CreateOutcome, RepoLookup, RepositoryRecord};

#[derive(Debug, Deserialize)]
struct GitignoreTemplate {
    source: String,
}

/// Fetch a gitignore template (e.g. `Python`) from `GET /gitignore/templates/{name}`
pub async fn fetch_gitignore(client: &GitHubClient, name: &str) -> Result<String> {
    let url = client.endpoint(&["gitignore", "templates", name])?;
    let template: GitignoreTemplate = client.get_json(url).await?;
    Ok(template.source)
}
