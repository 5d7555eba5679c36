//! Repository existence check and creation

use super::client::{Credentials, GitHubClient};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Maximum page size of the repository listing endpoint
pub const PER_PAGE: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub full_name: String,
    #[serde(default)]
    pub clone_url: String,
}

/// Answer of the creation endpoint; unlike listings, `clone_url` is required
#[derive(Debug, Deserialize)]
struct CreatedRepository {
    full_name: String,
    clone_url: String,
}

impl From<CreatedRepository> for RepositoryRecord {
    fn from(created: CreatedRepository) -> Self {
        Self {
            full_name: created.full_name,
            clone_url: created.clone_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct UserProfile {
    public_repos: u64,
}

/// Result of scanning a user's repositories for a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoLookup {
    Found(RepositoryRecord),
    NotFound { pages_scanned: u64 },
}

/// Result of asking for a new repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(RepositoryRecord),
    /// A repository with the same full name was already there; nothing was created
    AlreadyExists(RepositoryRecord),
}

impl CreateOutcome {
    pub fn record(&self) -> &RepositoryRecord {
        match self {
            CreateOutcome::Created(r) | CreateOutcome::AlreadyExists(r) => r,
        }
    }
}

#[derive(Debug, Serialize)]
struct NewRepository<'a> {
    name: &'a str,
    description: &'a str,
    homepage: String,
    private: bool,
    has_issues: bool,
    has_projects: bool,
    has_wiki: bool,
}

/// Number of listing pages for a user with `public_repos` repositories
pub fn page_count(public_repos: u64) -> u64 {
    public_repos / PER_PAGE + 1
}

/// Project page advertised as the repository homepage
pub fn homepage_url(username: &str, name: &str) -> String {
    format!("https://{username}.github.io/{name}")
}

/// Scan `username`'s public repositories for `username/name`
///
/// Pages are requested in order and the scan stops at the first match.
/// A failed profile or page request is returned as an error, never as `NotFound`.
pub async fn find_repository(
    client: &GitHubClient,
    username: &str,
    name: &str,
) -> Result<RepoLookup> {
    let profile: UserProfile = client.get_json(client.endpoint(&["users", username])?).await?;
    let pages = page_count(profile.public_repos);
    let target = format!("{username}/{name}");

    for page in 1..=pages {
        let mut url = client.endpoint(&["users", username, "repos"])?;
        url.query_pairs_mut()
            .append_pair("per_page", &PER_PAGE.to_string())
            .append_pair("page", &page.to_string());

        let repos: Vec<RepositoryRecord> = client.get_json(url).await?;
        if let Some(found) = repos.into_iter().find(|r| r.full_name == target) {
            tracing::warn!(repo = %found.full_name, page, "repository already exists");
            return Ok(RepoLookup::Found(found));
        }
    }

    Ok(RepoLookup::NotFound {
        pages_scanned: pages,
    })
}

/// Create `name` under the authenticated user unless it already exists
pub async fn create_repository(
    client: &GitHubClient,
    name: &str,
    description: &str,
    credentials: &Credentials,
) -> Result<CreateOutcome> {
    if let RepoLookup::Found(existing) =
        find_repository(client, &credentials.username, name).await?
    {
        return Ok(CreateOutcome::AlreadyExists(existing));
    }

    let payload = NewRepository {
        name,
        description,
        homepage: homepage_url(&credentials.username, name),
        private: false,
        has_issues: true,
        has_projects: true,
        has_wiki: true,
    };
    let url = client.endpoint(&["user", "repos"])?;
    let created: RepositoryRecord = client
        .post_json::<_, CreatedRepository>(url, &payload, credentials)
        .await?
        .into();
    tracing::debug!(repo = %created.full_name, clone_url = %created.clone_url, "created repository");
    Ok(CreateOutcome::Created(created))
}
