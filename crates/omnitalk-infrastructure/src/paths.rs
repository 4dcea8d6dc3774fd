//! Unified path management for omnitalk storage files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/omnitalk/          # Config directory
//! └── config.toml              # Storage configuration
//!
//! ~/.local/share/omnitalk/     # Data root (or [storage].data_dir)
//! ├── groups.json              # Group list
//! └── contexts/                # One context document per group
//!     ├── grp_all.json
//!     └── grp_<millis>.json
//! ```
//!
//! When an explicit base directory is given (tests, embedded use), both the
//! config file and the data files live directly under it.

use std::path::{Path, PathBuf};

use omnitalk_core::OmnitalkError;
use omnitalk_core::config::StorageConfig;

const APP_DIR: &str = "omnitalk";
const CONFIG_FILENAME: &str = "config.toml";

/// Extension of context documents.
pub const CONTEXT_EXTENSION: &str = "json";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for OmnitalkError {
    fn from(err: PathError) -> Self {
        OmnitalkError::config(err.to_string())
    }
}

/// Storage locations managed by [`OmnitalkPaths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    /// The group list file.
    Groups,
    /// The directory of per-group context documents.
    Contexts,
    /// The configuration file.
    Config,
}

/// A resolved location, tagged with what lives there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathType {
    File(PathBuf),
    Dir(PathBuf),
}

impl PathType {
    pub fn into_path_buf(self) -> PathBuf {
        match self {
            PathType::File(p) | PathType::Dir(p) => p,
        }
    }
}

/// Resolves every storage path from an optional base directory and the
/// storage configuration.
#[derive(Debug, Clone)]
pub struct OmnitalkPaths {
    base_dir: Option<PathBuf>,
    storage: StorageConfig,
}

impl OmnitalkPaths {
    /// Creates path management rooted at `base_dir`, or at the platform
    /// directories when `None`.
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
            storage: StorageConfig::default(),
        }
    }

    /// Creates path management from a loaded storage configuration.
    ///
    /// `storage.data_dir`, when set, becomes the base directory.
    pub fn from_config(storage: &StorageConfig) -> Self {
        Self {
            base_dir: storage.data_dir.clone(),
            storage: storage.clone(),
        }
    }

    /// Directory that holds `config.toml`.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|d| d.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Root directory of the group list and context documents.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::data_dir()
                .map(|d| d.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Resolves the location of a storage service.
    pub fn get_path(&self, service: ServiceType) -> Result<PathType, PathError> {
        let path = match service {
            ServiceType::Groups => PathType::File(self.data_dir()?.join(&self.storage.groups_file)),
            ServiceType::Contexts => {
                PathType::Dir(self.data_dir()?.join(&self.storage.contexts_dir))
            }
            ServiceType::Config => PathType::File(self.config_dir()?.join(CONFIG_FILENAME)),
        };
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dir_roots_every_service() {
        let base = Path::new("/tmp/omnitalk-test");
        let paths = OmnitalkPaths::new(Some(base));

        assert_eq!(
            paths.get_path(ServiceType::Groups).unwrap(),
            PathType::File(base.join("groups.json"))
        );
        assert_eq!(
            paths.get_path(ServiceType::Contexts).unwrap(),
            PathType::Dir(base.join("contexts"))
        );
        assert_eq!(
            paths.get_path(ServiceType::Config).unwrap(),
            PathType::File(base.join("config.toml"))
        );
    }

    #[test]
    fn test_from_config_uses_custom_names() {
        let storage = StorageConfig {
            data_dir: Some(PathBuf::from("/data")),
            groups_file: "g.json".to_string(),
            contexts_dir: "ctx".to_string(),
        };
        let paths = OmnitalkPaths::from_config(&storage);

        let groups = paths.get_path(ServiceType::Groups).unwrap().into_path_buf();
        assert_eq!(groups, PathBuf::from("/data/g.json"));
        let contexts = paths.get_path(ServiceType::Contexts).unwrap().into_path_buf();
        assert_eq!(contexts, PathBuf::from("/data/ctx"));
    }

    #[test]
    fn test_default_data_dir_is_app_scoped() {
        let paths = OmnitalkPaths::new(None);
        if let Ok(dir) = paths.data_dir() {
            assert!(dir.ends_with(APP_DIR));
        }
    }
}
