//! Storage configuration model.
//!
//! Loaded from the `[storage]` table of `config.toml`. Every field is
//! optional in the file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_groups_file() -> String {
    "groups.json".to_string()
}

fn default_contexts_dir() -> String {
    "contexts".to_string()
}

/// Where the group list and the context documents live.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Root directory for all data files. `None` selects the platform data
    /// directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// File name of the group list, relative to the data root.
    #[serde(default = "default_groups_file")]
    pub groups_file: String,
    /// Directory name holding one context document per group, relative to
    /// the data root.
    #[serde(default = "default_contexts_dir")]
    pub contexts_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            groups_file: default_groups_file(),
            contexts_dir: default_contexts_dir(),
        }
    }
}

/// Top-level layout of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RootConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
        assert_eq!(config.storage.groups_file, "groups.json");
        assert_eq!(config.storage.contexts_dir, "contexts");
    }

    #[test]
    fn test_partial_storage_table() {
        let config: RootConfig = toml::from_str(
            r#"
            [storage]
            data_dir = "/srv/omnitalk"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.data_dir, Some(PathBuf::from("/srv/omnitalk")));
        assert_eq!(config.storage.contexts_dir, "contexts");
    }
}
