//! External processes
//!
//! This module provides:
//! - `git` commands bound to an explicit working directory
//! - Generic tool management for `versioneer` and `sphinx-quickstart`

pub mod git;
pub mod tool;

pub use git::{Git, Signature};
pub use tool::ToolManager;
