//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml`
//! (`~/.config/omnitalk/config.toml` by default).

use std::path::{Path, PathBuf};

use omnitalk_core::OmnitalkError;
use omnitalk_core::config::RootConfig;
use omnitalk_core::error::Result;

use crate::paths::{OmnitalkPaths, ServiceType};

/// Reads `config.toml`; a missing file means default configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service for the config file resolved by `paths`.
    pub fn new(paths: &OmnitalkPaths) -> Result<Self> {
        let path = paths.get_path(ServiceType::Config)?.into_path_buf();
        Ok(Self { path })
    }

    /// Creates a service for an explicit config file.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration from disk.
    pub async fn load(&self) -> Result<RootConfig> {
        if !tokio::fs::try_exists(&self.path).await? {
            tracing::debug!("No config file at {:?}, using defaults", self.path);
            return Ok(RootConfig::default());
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| OmnitalkError::io(format!("Failed to read config file: {}", e)))?;

        let config: RootConfig = toml::from_str(&content)
            .map_err(|e| OmnitalkError::Config(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Loads the configuration and resolves storage paths from it.
    pub async fn load_paths(&self) -> Result<OmnitalkPaths> {
        let config = self.load().await?;
        Ok(OmnitalkPaths::from_config(&config.storage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_config_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(&OmnitalkPaths::new(Some(temp_dir.path()))).unwrap();

        let config = service.load().await.unwrap();
        assert_eq!(config, RootConfig::default());
    }

    #[tokio::test]
    async fn test_load_paths_from_storage_table() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            format!(
                "[storage]\ndata_dir = {:?}\ncontexts_dir = \"history\"\n",
                data_dir.to_string_lossy()
            ),
        )
        .unwrap();

        let paths = ConfigService::with_path(config_path).load_paths().await.unwrap();
        let contexts = paths.get_path(ServiceType::Contexts).unwrap().into_path_buf();
        assert_eq!(contexts, data_dir.join("history"));
    }

    #[tokio::test]
    async fn test_invalid_config_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[storage\n").unwrap();

        let err = ConfigService::with_path(config_path).load().await.unwrap_err();
        assert!(err.is_config());
    }
}
