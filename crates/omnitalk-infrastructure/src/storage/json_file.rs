//! Whole-document JSON file helpers.
//!
//! Every write replaces the target file in place: no temp file, no rename,
//! no lock. A crash mid-write can leave a truncated document.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;

use omnitalk_core::OmnitalkError;
use omnitalk_core::error::Result;

/// Returns whether `path` exists.
pub async fn exists(path: &Path) -> Result<bool> {
    fs::try_exists(path).await.map_err(|e| {
        OmnitalkError::io(format!("Failed to stat {}: {}", path.display(), e))
    })
}

/// Reads and decodes a JSON document. A missing file yields `None`.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !exists(path).await? {
        return Ok(None);
    }

    let content = fs::read_to_string(path).await.map_err(|e| {
        OmnitalkError::io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let value = serde_json::from_str(&content).map_err(|e| OmnitalkError::Serialization {
        format: "JSON".to_string(),
        message: format!("{}: {}", path.display(), e),
    })?;

    tracing::debug!("Loaded JSON document: {:?}", path);
    Ok(Some(value))
}

/// Encodes `value` as pretty-printed JSON and overwrites `path`.
///
/// Creates the parent directory if needed. Non-ASCII text is written as-is.
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(|e| {
            OmnitalkError::io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let serialized = serde_json::to_string_pretty(value)?;

    fs::write(path, serialized).await.map_err(|e| {
        OmnitalkError::io(format!("Failed to write {}: {}", path.display(), e))
    })?;

    tracing::debug!("Wrote JSON document: {:?}", path);
    Ok(())
}

/// Deletes `path` if it exists. Returns whether a file was removed.
pub async fn remove_if_exists(path: &Path) -> Result<bool> {
    if !exists(path).await? {
        return Ok(false);
    }

    fs::remove_file(path).await.map_err(|e| {
        OmnitalkError::io(format!("Failed to remove {}: {}", path.display(), e))
    })?;

    tracing::debug!("Removed JSON document: {:?}", path);
    Ok(true)
}
