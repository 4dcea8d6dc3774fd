//! Group repository implementation.
//!
//! Stores the whole group list as one pretty-printed JSON array.
//!
//! File location: `{data_dir}/groups.json`

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use omnitalk_core::error::Result;
use omnitalk_core::group::{Group, GroupRepository};

use crate::paths::{OmnitalkPaths, ServiceType};
use crate::storage::json_file;

/// File-based group repository.
///
/// The first `get_all` against a missing file seeds it with the default
/// group.
pub struct JsonGroupRepository {
    path: PathBuf,
}

impl JsonGroupRepository {
    /// Creates a repository using the resolved `Groups` path.
    pub fn new(paths: &OmnitalkPaths) -> Result<Self> {
        let path = paths.get_path(ServiceType::Groups)?.into_path_buf();
        Ok(Self { path })
    }

    /// Creates a repository backed by an explicit file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GroupRepository for JsonGroupRepository {
    async fn get_all(&self) -> Result<Vec<Group>> {
        if let Some(groups) = json_file::read_json::<Vec<Group>>(&self.path).await? {
            return Ok(groups);
        }

        let groups = vec![Group::default_group(chrono::Local::now())];
        tracing::info!("Seeding group list with default group at {:?}", self.path);

        // The seeded list is still returned when it cannot be written.
        if let Err(e) = self.save_all(&groups).await {
            tracing::warn!("Failed to persist default group list: {}", e);
        }

        Ok(groups)
    }

    async fn save_all(&self, groups: &[Group]) -> Result<()> {
        json_file::write_json(&self.path, groups)
            .await
            .inspect_err(|e| tracing::error!("Failed to save groups: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnitalk_core::group::DEFAULT_GROUP_ID;
    use tempfile::TempDir;

    fn repo_in(temp_dir: &TempDir) -> JsonGroupRepository {
        JsonGroupRepository::new(&OmnitalkPaths::new(Some(temp_dir.path()))).unwrap()
    }

    #[tokio::test]
    async fn test_first_load_seeds_default_group() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        assert!(!repo.path().exists());

        let groups = repo.get_all().await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, DEFAULT_GROUP_ID);
        assert!(groups[0].is_default);
        assert_eq!(groups[0].bots, omnitalk_core::bot::default_bot_ids());

        let raw = std::fs::read_to_string(repo.path()).unwrap();
        let on_disk: Vec<Group> = serde_json::from_str(&raw).unwrap();
        assert_eq!(on_disk, groups);
        assert!(raw.contains("全员群"));
    }

    #[tokio::test]
    async fn test_second_load_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        let first = repo.get_all().await.unwrap();
        let second = repo.get_all().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_save_and_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        let now = chrono::Local::now();
        let mut a = Group::new("a", vec!["kimi".into()], now);
        a.id = "grp_2".into();
        let mut b = Group::new("b", vec!["qwen".into()], now);
        b.id = "grp_1".into();

        repo.save_all(&[a.clone(), b.clone()]).await.unwrap();
        let loaded = repo.get_all().await.unwrap();
        assert_eq!(loaded, vec![a, b]);
    }

    #[tokio::test]
    async fn test_malformed_file_fails_fast() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        std::fs::write(repo.path(), r#"[{"id": "grp_all"}]"#).unwrap();

        let err = repo.get_all().await.unwrap_err();
        assert!(err.is_serialization());
    }
}
