//! Output writer shared by every exporter.

use std::path::Path;

use envdump_core::{ExportError, Result};

/// Creates `path` and every missing parent.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| ExportError::filesystem(path, e))
}

/// Writes `contents` to `path`, creating parent directories first and
/// truncating any existing file.
pub async fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }

    tokio::fs::write(path, contents)
        .await
        .map_err(|e| ExportError::filesystem(path, e))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}
