//! Directory creation and file writing for the generated tree

use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Create `base/name` if it does not exist yet and return its path
///
/// Only the last component is created: a missing `base` is an error.
pub async fn ensure_directory(base: &Path, name: &str) -> Result<PathBuf> {
    let dir = base.join(name);
    match fs::create_dir(&dir).await {
        Ok(()) => {
            tracing::debug!(dir = %dir.display(), "created directory");
            Ok(dir)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => Ok(dir),
        Err(e) => Err(Error::io(dir, e)),
    }
}

/// Overwrite `dir/filename` with `content`
pub async fn write_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(filename);
    fs::write(&path, content)
        .await
        .map_err(|e| Error::io(&path, e))?;
    Ok(path)
}
