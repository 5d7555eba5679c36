//! Thin GitHub REST client
//!
//! Every remote call of the scaffolder goes through [`GitHubClient`], which
//! owns the API base URL, the user agent, and the mapping of transport and
//! status failures onto [`Error`].

use crate::error::{Error, Result};
use crate::product::ProductConfig;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::fmt;
use url::Url;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Username and token used for authenticated calls and for pushing
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Credentials {
    /// Build credentials, failing with [`Error::MissingAuth`] when either part is blank
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let username = username.into().trim().to_string();
        let token = token.into().trim().to_string();
        if username.is_empty() || token.is_empty() {
            return Err(Error::MissingAuth);
        }
        Ok(Self { username, token })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

pub struct GitHubClient {
    base: Url,
    client: reqwest::Client,
}

impl GitHubClient {
    /// Create a new client with a custom user agent
    pub fn new(base: Url, user_agent: &str) -> Self {
        Self {
            base,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a client from a product config, honouring the API URL override
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let url_str = std::env::var(config.api_url_env())
            .unwrap_or_else(|_| config.default_api_url().to_string());
        let base = Url::parse(&url_str)?;
        Ok(Self::new(base, config.user_agent()))
    }

    /// Build an API URL by appending path segments to the base, preserving its path
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET a JSON document
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .await
            .map_err(|source| Error::Network {
                url: url.to_string(),
                source,
            })?;
        Self::decode(url, response, |status| status.is_success()).await
    }

    /// POST a JSON body with bearer authentication and decode the JSON answer
    ///
    /// Only `200 OK` and `201 Created` count as success.
    pub async fn post_json<B, T>(&self, url: Url, body: &B, credentials: &Credentials) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(%url, user = %credentials.username, "POST");
        let response = self
            .client
            .post(url.clone())
            .header(ACCEPT, GITHUB_ACCEPT)
            .bearer_auth(&credentials.token)
            .json(body)
            .send()
            .await
            .map_err(|source| Error::Network {
                url: url.to_string(),
                source,
            })?;
        Self::decode(url, response, |status| {
            status == StatusCode::OK || status == StatusCode::CREATED
        })
        .await
    }

    async fn decode<T: DeserializeOwned>(
        url: Url,
        response: reqwest::Response,
        accepted: impl Fn(StatusCode) -> bool,
    ) -> Result<T> {
        let status = response.status();
        if !accepted(status) {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        response.json().await.map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }
}
