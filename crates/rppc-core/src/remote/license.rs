//! License catalog lookup and placeholder substitution

use super::client::GitHubClient;
use crate::error::{Error, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use url::Url;

const YEAR_TOKEN: &str = "[year]";
const FULLNAME_TOKEN: &str = "[fullname]";

/// One entry of `GET /licenses`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseEntry {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub spdx_id: Option<String>,
    /// Detail endpoint for this license
    pub url: String,
}

/// Full license as returned by the detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseDetail {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub spdx_id: Option<String>,
    pub body: String,
}

impl LicenseDetail {
    /// Identifier used in packaging metadata, falling back to the catalog key
    pub fn identifier(&self) -> &str {
        self.spdx_id.as_deref().unwrap_or(&self.key)
    }
}

/// Ordered license catalog, fetched once and read-only afterwards
#[derive(Debug, Clone)]
pub struct LicenseCatalog {
    entries: Vec<LicenseEntry>,
}

impl LicenseCatalog {
    pub fn new(entries: Vec<LicenseEntry>) -> Self {
        Self { entries }
    }

    pub async fn fetch(client: &GitHubClient) -> Result<Self> {
        let url = client.endpoint(&["licenses"])?;
        let entries: Vec<LicenseEntry> = client.get_json(url).await?;
        tracing::debug!(count = entries.len(), "fetched license catalog");
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[LicenseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry with the given key (case-insensitive)
    pub fn position(&self, key: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.key.eq_ignore_ascii_case(key.trim()))
            .ok_or_else(|| Error::UnknownLicense(key.to_string()))
    }

    /// Fetch the selected license and fill in the current year and the author name
    ///
    /// The index is checked before any request is made.
    pub async fn resolve(
        &self,
        client: &GitHubClient,
        index: usize,
        fullname: &str,
    ) -> Result<LicenseDetail> {
        let entry = self.entries.get(index).ok_or(Error::LicenseOutOfRange {
            index,
            len: self.entries.len(),
        })?;

        let url = Url::parse(&entry.url)?;
        let mut detail: LicenseDetail = client.get_json(url).await?;
        let year = chrono::Local::now().year();
        detail.body = fill_placeholders(&detail.body, year, fullname);
        Ok(detail)
    }
}

/// Replace every `[year]` and `[fullname]` token
pub fn fill_placeholders(body: &str, year: i32, fullname: &str) -> String {
    body.replace(YEAR_TOKEN, &year.to_string())
        .replace(FULLNAME_TOKEN, fullname)
}
