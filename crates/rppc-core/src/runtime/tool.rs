//! External scaffolding tools
//!
//! Provides a reusable abstraction for checking and running CLI tools like
//! `versioneer` or `sphinx-quickstart` inside the generated package.

use crate::error::{Error, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// Configuration for a CLI tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "versioneer")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// How to get the tool when it is missing
    pub install_hint: &'static str,
}

/// Manager for checking and running CLI tools
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    /// Create a new tool manager with the given configuration
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Get the tool configuration
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Check if the tool is installed and available in PATH
    pub fn is_installed(&self) -> bool {
        std::process::Command::new("which")
            .arg(self.config.name)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Get the installed tool version (if available)
    pub fn get_version(&self) -> Option<String> {
        std::process::Command::new(self.config.name)
            .arg("--version")
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .map(|s| s.trim().to_string())
                } else {
                    None
                }
            })
    }

    /// Command line shown to the user
    pub fn command_line(&self, args: &[String]) -> String {
        std::iter::once(self.config.name)
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the tool in `dir`, streaming its output indented under the current step
    pub async fn run(&self, dir: &Path, args: &[String]) -> Result<()> {
        let cmd = self.command_line(args);
        tracing::debug!(command = %cmd, dir = %dir.display(), "running");
        println!("  {} {}", "Running:".dimmed(), cmd.yellow());

        let process_err = |detail: String| Error::Process {
            command: cmd.clone(),
            detail,
        };

        let mut child = TokioCommand::new(self.config.name)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| process_err(e.to_string()))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| process_err("stdout was not captured".into()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| process_err("stderr was not captured".into()))?;

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();
        let mut stdout_open = true;
        let mut stderr_open = true;

        while stdout_open || stderr_open {
            tokio::select! {
                line = stdout_reader.next_line(), if stdout_open => {
                    match line {
                        Ok(Some(line)) => println!("    {}", line.dimmed()),
                        Ok(None) => stdout_open = false,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            stdout_open = false;
                        }
                    }
                }
                line = stderr_reader.next_line(), if stderr_open => {
                    match line {
                        Ok(Some(line)) => eprintln!("    {}", line.yellow()),
                        Ok(None) => stderr_open = false,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                            stderr_open = false;
                        }
                    }
                }
            }
        }

        let status = child
            .wait()
            .await
            .map_err(|e| process_err(format!("failed to wait: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(process_err(format!(
                "exited with code {}",
                status.code().unwrap_or(-1)
            )))
        }
    }
}

/// Pre-configured tool config for versioneer
pub fn versioneer_config() -> ToolConfig {
    ToolConfig {
        name: "versioneer",
        display_name: "versioneer",
        install_hint: "pip install versioneer",
    }
}

/// Pre-configured tool config for sphinx-quickstart
pub fn sphinx_config() -> ToolConfig {
    ToolConfig {
        name: "sphinx-quickstart",
        display_name: "Sphinx",
        install_hint: "pip install sphinx nbsphinx",
    }
}

/// Arguments for `versioneer install`
pub fn versioneer_args() -> Vec<String> {
    vec!["install".to_string()]
}

/// Arguments for a non-interactive sphinx-quickstart into `docs_dir`
pub fn sphinx_args(project: &str, author: &str, docs_dir: &Path) -> Vec<String> {
    vec![
        "--sep".into(),
        format!("--project={project}"),
        format!("--author={author}"),
        "--ext-autodoc".into(),
        "--ext-viewcode".into(),
        "--extensions=sphinx.ext.napoleon".into(),
        "--extensions=nbsphinx".into(),
        "--makefile".into(),
        "--dot=_".into(),
        "--release=".into(),
        "-v".into(),
        "".into(),
        "--suffix=.rst".into(),
        "--language=en".into(),
        "--master=index".into(),
        "-q".into(),
        "--no-batchfile".into(),
        docs_dir.display().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sphinx_args_target_docs_dir() {
        let args = sphinx_args("foo", "Ada Lovelace", Path::new("/tmp/foo/docs"));
        assert!(args.contains(&"--project=foo".to_string()));
        assert!(args.contains(&"--author=Ada Lovelace".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("/tmp/foo/docs"));
    }

    #[test]
    fn test_command_line() {
        let tool = ToolManager::new(versioneer_config());
        assert_eq!(tool.command_line(&versioneer_args()), "versioneer install");
    }

    #[test]
    fn test_missing_tool_is_not_installed() {
        let tool = ToolManager::new(ToolConfig {
            name: "rppc-definitely-not-a-real-tool",
            display_name: "missing",
            install_hint: "",
        });
        assert!(!tool.is_installed());
        assert!(tool.get_version().is_none());
    }

    #[tokio::test]
    async fn test_run_reports_spawn_failure() {
        let tmp = TempDir::new().unwrap();
        let tool = ToolManager::new(ToolConfig {
            name: "rppc-definitely-not-a-real-tool",
            display_name: "missing",
            install_hint: "",
        });
        let err = tool.run(tmp.path(), &[]).await.unwrap_err();
        assert!(matches!(err, Error::Process { .. }));
    }
}
