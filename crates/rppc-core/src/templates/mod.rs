//! Generated file contents and the writer that puts them on disk
//!
//! This module provides:
//! - Pure renderers for every generated file
//! - Idempotent directory creation and unconditional file writes

pub mod render;
pub mod writer;

pub use render::parse_dependencies;
pub use writer::{ensure_directory, write_file};
