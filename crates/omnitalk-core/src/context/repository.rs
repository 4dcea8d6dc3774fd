//! Context repository trait.

use async_trait::async_trait;

use super::model::{GroupContext, Message};
use crate::error::Result;

/// Persistence for per-group conversation context.
///
/// Every mutating operation is a full read-modify-write of the group's
/// document. Concurrent writers to the same group are not coordinated.
#[async_trait]
pub trait ContextRepository: Send + Sync {
    /// Loads a group's context. A group without a document has an empty
    /// context; nothing is created.
    async fn get(&self, group_id: &str) -> Result<GroupContext>;

    /// Creates an empty document for the group if none exists.
    async fn init(&self, group_id: &str) -> Result<()>;

    /// Appends `message` to `bot`'s history in the group, creating the
    /// document first when needed.
    async fn append(&self, group_id: &str, bot: &str, message: Message) -> Result<()>;

    /// Removes `bot`'s history from the group.
    ///
    /// A group without a document is already clear; no document is created.
    async fn clear_bot(&self, group_id: &str, bot: &str) -> Result<()>;

    /// Discards the group's whole context and leaves an empty document.
    async fn clear(&self, group_id: &str) -> Result<()>;

    /// Deletes the group's document if present.
    async fn remove(&self, group_id: &str) -> Result<()>;
}
