//! Group and context use cases.
//!
//! Coordinates the group list with the per-group context documents:
//! - creating a group initializes its empty context
//! - adding bots to a group wipes their history in that group
//! - deleting a group deletes its context

use std::sync::Arc;

use chrono::Local;
use omnitalk_core::OmnitalkError;
use omnitalk_core::context::{AggregatedContext, ContextRepository, GroupContext, Message};
use omnitalk_core::error::Result;
use omnitalk_core::group::{Group, GroupRepository, GroupSummary, MAX_GROUPS, group_id_from_millis};

/// Group management and context access for the chat layer.
#[derive(Clone)]
pub struct GroupUseCase {
    groups: Arc<dyn GroupRepository>,
    contexts: Arc<dyn ContextRepository>,
}

impl GroupUseCase {
    pub fn new(groups: Arc<dyn GroupRepository>, contexts: Arc<dyn ContextRepository>) -> Self {
        Self { groups, contexts }
    }

    // ============================================================================
    // Groups
    // ============================================================================

    /// All groups in stored order, most recently created first.
    pub async fn list_groups(&self) -> Result<Vec<Group>> {
        self.groups.get_all().await
    }

    /// All groups in display form.
    pub async fn list_group_summaries(&self) -> Result<Vec<GroupSummary>> {
        let groups = self.groups.get_all().await?;
        Ok(groups.iter().map(Group::summary).collect())
    }

    /// Looks up a group by id.
    pub async fn get_group(&self, group_id: &str) -> Result<Option<Group>> {
        let groups = self.groups.get_all().await?;
        Ok(groups.into_iter().find(|g| g.id == group_id))
    }

    /// Creates a group and its empty context document.
    ///
    /// Refused when [`MAX_GROUPS`] groups already exist or `name` is taken.
    /// These checks happen only here; `update_group` does not repeat them.
    pub async fn create_group(&self, name: &str, bots: Vec<String>) -> Result<Group> {
        let mut groups = self.groups.get_all().await?;

        if groups.len() >= MAX_GROUPS {
            tracing::warn!("Refusing to create group '{}': limit reached", name);
            return Err(OmnitalkError::GroupLimitReached { limit: MAX_GROUPS });
        }

        if groups.iter().any(|g| g.name == name) {
            tracing::warn!("Refusing to create group '{}': name in use", name);
            return Err(OmnitalkError::DuplicateGroupName(name.to_string()));
        }

        let now = Local::now();
        let mut group = Group::new(name, bots, now);
        // Two creations within the same millisecond must not share an id.
        let mut millis = now.timestamp_millis();
        while groups.iter().any(|g| g.id == group.id) {
            millis += 1;
            group.id = group_id_from_millis(millis);
        }

        groups.insert(0, group.clone());
        self.groups.save_all(&groups).await?;
        self.contexts.init(&group.id).await?;

        tracing::info!("Created group '{}' ({})", group.name, group.id);
        Ok(group)
    }

    /// Renames a group and replaces its bot list.
    ///
    /// Bots added by this update lose any history they had in this group;
    /// that cleanup runs only after the group list was saved. History in
    /// other groups is untouched.
    pub async fn update_group(&self, group_id: &str, name: &str, bots: Vec<String>) -> Result<Group> {
        let mut groups = self.groups.get_all().await?;

        let group = groups
            .iter_mut()
            .find(|g| g.id == group_id)
            .ok_or_else(|| OmnitalkError::not_found("group", group_id))?;

        if group.is_default {
            tracing::warn!("Refusing to update default group '{}'", group_id);
            return Err(OmnitalkError::DefaultGroupImmutable(group_id.to_string()));
        }

        let added: Vec<String> = group.added_bots(&bots).into_iter().map(String::from).collect();
        group.name = name.to_string();
        group.bots = bots;
        let updated = group.clone();

        self.groups.save_all(&groups).await?;

        for bot in &added {
            self.contexts.clear_bot(group_id, bot).await?;
        }

        tracing::info!(
            "Updated group '{}' ({}), cleared context of {} added bot(s)",
            updated.name,
            updated.id,
            added.len()
        );
        Ok(updated)
    }

    /// Deletes a group together with its context document.
    pub async fn delete_group(&self, group_id: &str) -> Result<()> {
        let mut groups = self.groups.get_all().await?;

        let index = groups
            .iter()
            .position(|g| g.id == group_id)
            .ok_or_else(|| OmnitalkError::not_found("group", group_id))?;

        if groups[index].is_default {
            tracing::warn!("Refusing to delete default group '{}'", group_id);
            return Err(OmnitalkError::DefaultGroupImmutable(group_id.to_string()));
        }

        self.contexts.remove(group_id).await?;
        let removed = groups.remove(index);
        self.groups.save_all(&groups).await?;

        tracing::info!("Deleted group '{}' ({})", removed.name, removed.id);
        Ok(())
    }

    // ============================================================================
    // Context
    // ============================================================================

    /// Full context of a group; empty when nothing was recorded yet.
    pub async fn get_context(&self, group_id: &str) -> Result<GroupContext> {
        self.contexts.get(group_id).await
    }

    /// One bot's history within a group.
    pub async fn get_bot_messages(&self, group_id: &str, bot: &str) -> Result<Vec<Message>> {
        let context = self.contexts.get(group_id).await?;
        Ok(context.messages(bot).to_vec())
    }

    /// Creates an empty context document for a group if missing.
    pub async fn init_context(&self, group_id: &str) -> Result<()> {
        self.contexts.init(group_id).await
    }

    /// Records a message in `bot`'s history within a group.
    pub async fn append_message(
        &self,
        group_id: &str,
        bot: &str,
        role: &str,
        content: &str,
    ) -> Result<()> {
        self.contexts
            .append(group_id, bot, Message::new(role, content))
            .await
    }

    /// Forgets `bot`'s history within a group.
    pub async fn clear_bot_context(&self, group_id: &str, bot: &str) -> Result<()> {
        self.contexts.clear_bot(group_id, bot).await
    }

    /// Forgets every bot's history within a group.
    pub async fn clear_group_context(&self, group_id: &str) -> Result<()> {
        self.contexts.clear(group_id).await
    }

    /// Concatenates each requested bot's history across every group.
    ///
    /// Groups are visited in list order. Every requested bot gets an entry,
    /// empty when it has no history anywhere.
    pub async fn aggregate_context(&self, bots: &[String]) -> Result<AggregatedContext> {
        let groups = self.groups.get_all().await?;

        let mut result: AggregatedContext =
            bots.iter().map(|bot| (bot.clone(), Vec::new())).collect();

        for group in &groups {
            let context = self.contexts.get(&group.id).await?;
            for (bot, messages) in result.iter_mut() {
                messages.extend_from_slice(context.messages(bot));
            }
        }

        Ok(result)
    }
}
