//! `git` invocations bound to one working directory
//!
//! Every command runs with an explicit `current_dir`; the process working
//! directory is never changed.

use crate::error::{Error, Result};
use crate::remote::Credentials;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

const USERNAME_VAR: &str = "RPPC_GIT_USERNAME";
const TOKEN_VAR: &str = "RPPC_GIT_TOKEN";

/// Inline helper answering `get` from the child environment only
const CREDENTIAL_HELPER: &str = "credential.helper=!f() { test \"$1\" = get || exit 0; \
     echo \"username=${RPPC_GIT_USERNAME}\"; echo \"password=${RPPC_GIT_TOKEN}\"; }; f";

/// Push credentials handed to one `git push` through its environment
///
/// The configured helper list is reset first so that no persistent helper
/// is asked to `store` the token after a successful push. Dropping the scope
/// zeroes its own copy of the token; the caller's [`Credentials`] are not touched.
struct CredentialScope {
    username: String,
    token: String,
}

impl CredentialScope {
    fn acquire(credentials: &Credentials) -> Self {
        Self {
            username: credentials.username.clone(),
            token: credentials.token.clone(),
        }
    }

    fn config_args(&self) -> [&'static str; 4] {
        ["-c", "credential.helper=", "-c", CREDENTIAL_HELPER]
    }

    fn envs(&self) -> [(&'static str, &str); 3] {
        [
            (USERNAME_VAR, self.username.as_str()),
            (TOKEN_VAR, self.token.as_str()),
            ("GIT_TERMINAL_PROMPT", "0"),
        ]
    }
}

impl Drop for CredentialScope {
    fn drop(&mut self) {
        let len = self.token.len();
        self.token.replace_range(.., &"\0".repeat(len));
        self.token.clear();
    }
}

/// Identity recorded on commits
#[derive(Debug, Clone, Copy)]
pub struct Signature<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

pub struct Git {
    dir: PathBuf,
}

impl Git {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn init(&self) -> Result<()> {
        self.run(&["init"], &[]).await.map(drop)
    }

    pub async fn add_all(&self) -> Result<()> {
        self.run(&["add", "."], &[]).await.map(drop)
    }

    /// Commit staged files; a blank name or email falls back to the user's git config
    pub async fn commit(&self, message: &str, author: Signature<'_>) -> Result<()> {
        let mut envs = Vec::new();
        if !author.name.is_empty() {
            envs.push(("GIT_AUTHOR_NAME", author.name));
            envs.push(("GIT_COMMITTER_NAME", author.name));
        }
        if !author.email.is_empty() {
            envs.push(("GIT_AUTHOR_EMAIL", author.email));
            envs.push(("GIT_COMMITTER_EMAIL", author.email));
        }
        self.run(&["commit", "-m", message], &envs).await.map(drop)
    }

    pub async fn remote_add(&self, name: &str, url: &str) -> Result<()> {
        self.run(&["remote", "add", name, url], &[]).await.map(drop)
    }

    /// Push `HEAD` to `remote` and set upstream, authenticating with in-memory credentials
    pub async fn push(&self, remote: &str, credentials: &Credentials) -> Result<()> {
        let scope = CredentialScope::acquire(credentials);
        let mut args: Vec<&str> = scope.config_args().to_vec();
        args.extend(["push", "-u", remote, "HEAD"]);
        let envs = scope.envs();
        self.run(&args, &envs).await.map(drop)
    }

    /// Paths tracked at `HEAD`, relative to the repository root
    pub async fn tracked_files(&self) -> Result<Vec<String>> {
        let out = self.run(&["ls-files"], &[]).await?;
        Ok(out.lines().map(String::from).collect())
    }

    pub async fn commit_count(&self) -> Result<usize> {
        let out = self.run(&["rev-list", "--count", "HEAD"], &[]).await?;
        out.trim().parse().map_err(|_| Error::Process {
            command: "git rev-list --count HEAD".into(),
            detail: format!("unexpected output: {}", out.trim()),
        })
    }

    async fn run(&self, args: &[&str], envs: &[(&str, &str)]) -> Result<String> {
        let command_line = format!("git {}", redact(args).join(" "));
        tracing::debug!(command = %command_line, dir = %self.dir.display(), "running");

        let output = Command::new("git")
            .args(args)
            .envs(envs.iter().copied())
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| Error::Process {
                command: command_line.clone(),
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::Process {
                command: command_line,
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Shorten the inline credential helper in logs and error messages
fn redact<'a>(args: &[&'a str]) -> Vec<&'a str> {
    args.iter()
        .map(|a| {
            if *a == CREDENTIAL_HELPER {
                "credential.helper=<inline>"
            } else {
                *a
            }
        })
        .collect()
}
