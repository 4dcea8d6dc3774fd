//! Context repository implementation.
//!
//! One JSON document per group, mapping bot id to its message list.
//!
//! File location: `{data_dir}/contexts/{group_id}.json`

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use omnitalk_core::OmnitalkError;
use omnitalk_core::context::{ContextRepository, GroupContext, Message};
use omnitalk_core::error::Result;

use crate::paths::{CONTEXT_EXTENSION, OmnitalkPaths, ServiceType};
use crate::storage::json_file;

/// File-based context repository.
pub struct JsonContextRepository {
    contexts_dir: PathBuf,
}

impl JsonContextRepository {
    /// Creates a repository using the resolved `Contexts` directory.
    pub fn new(paths: &OmnitalkPaths) -> Result<Self> {
        let contexts_dir = paths.get_path(ServiceType::Contexts)?.into_path_buf();
        Ok(Self { contexts_dir })
    }

    /// Creates a repository over an explicit directory (for testing).
    pub fn with_dir(contexts_dir: PathBuf) -> Self {
        Self { contexts_dir }
    }

    pub fn contexts_dir(&self) -> &Path {
        &self.contexts_dir
    }

    /// Returns the path of a group's context document.
    ///
    /// Ids that could escape the contexts directory are refused.
    pub fn context_path(&self, group_id: &str) -> Result<PathBuf> {
        if group_id.is_empty()
            || group_id.contains(['/', '\\'])
            || group_id.starts_with('.')
        {
            return Err(OmnitalkError::not_found("group", group_id));
        }
        Ok(self
            .contexts_dir
            .join(format!("{}.{}", group_id, CONTEXT_EXTENSION)))
    }

    async fn load(&self, path: &Path) -> Result<Option<GroupContext>> {
        json_file::read_json::<GroupContext>(path).await
    }
}

#[async_trait]
impl ContextRepository for JsonContextRepository {
    async fn get(&self, group_id: &str) -> Result<GroupContext> {
        let path = self.context_path(group_id)?;
        Ok(self.load(&path).await?.unwrap_or_default())
    }

    async fn init(&self, group_id: &str) -> Result<()> {
        let path = self.context_path(group_id)?;
        if json_file::exists(&path).await? {
            return Ok(());
        }
        json_file::write_json(&path, &GroupContext::new()).await
    }

    async fn append(&self, group_id: &str, bot: &str, message: Message) -> Result<()> {
        let path = self.context_path(group_id)?;
        let mut context = self.load(&path).await?.unwrap_or_default();
        context.push(bot, message);
        json_file::write_json(&path, &context).await
    }

    async fn clear_bot(&self, group_id: &str, bot: &str) -> Result<()> {
        let path = self.context_path(group_id)?;
        let Some(mut context) = self.load(&path).await? else {
            return Ok(());
        };

        if context.remove_bot(bot) {
            tracing::debug!("Cleared context of bot '{}' in group '{}'", bot, group_id);
        }
        json_file::write_json(&path, &context).await
    }

    async fn clear(&self, group_id: &str) -> Result<()> {
        let path = self.context_path(group_id)?;
        json_file::remove_if_exists(&path).await?;
        json_file::write_json(&path, &GroupContext::new()).await
    }

    async fn remove(&self, group_id: &str) -> Result<()> {
        let path = self.context_path(group_id)?;
        json_file::remove_if_exists(&path).await?;
        Ok(())
    }
}
