//! Error type shared by every library operation

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (DNS, TLS, connection reset, ...)
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered with a non-success status
    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not have the expected shape
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("license selection {index} is out of range (catalog has {len} entries)")]
    LicenseOutOfRange { index: usize, len: usize },

    #[error("unknown license '{0}'")]
    UnknownLicense(String),

    #[error("authentication required: provide a GitHub username and token")]
    MissingAuth,

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external process could not be spawned or exited unsuccessfully
    #[error("`{command}` failed: {detail}")]
    Process { command: String, detail: String },

    #[error("invalid specification file {}: {source}", path.display())]
    SpecFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid package: {0}")]
    InvalidSpec(String),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
