//! Group domain model.
//!
//! A group is a named set of bots sharing one conversation scope. The first
//! group (`grp_all`) is created automatically, holds every known bot, and
//! can never be changed.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::bot::{bot_display_name, default_bot_ids};

/// Identifier of the default group.
pub const DEFAULT_GROUP_ID: &str = "grp_all";

/// Name of the default group ("everyone").
pub const DEFAULT_GROUP_NAME: &str = "全员群";

/// Maximum number of groups, the default group included.
pub const MAX_GROUPS: usize = 6;

/// Prefix of every group identifier.
pub const GROUP_ID_PREFIX: &str = "grp_";

/// A stored group record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// `grp_all` or `grp_<epoch_millis>`
    pub id: String,
    /// Unique across all groups
    pub name: String,
    /// Bot identifiers in display order
    pub bots: Vec<String>,
    #[serde(default)]
    pub is_default: bool,
    /// ISO-8601 creation time
    pub created_at: String,
}

impl Group {
    /// Builds the immutable default group containing every known bot.
    pub fn default_group(now: DateTime<Local>) -> Self {
        Self {
            id: DEFAULT_GROUP_ID.to_string(),
            name: DEFAULT_GROUP_NAME.to_string(),
            bots: default_bot_ids(),
            is_default: true,
            created_at: now.to_rfc3339(),
        }
    }

    /// Builds a user group whose id is derived from `now`.
    pub fn new(name: impl Into<String>, bots: Vec<String>, now: DateTime<Local>) -> Self {
        Self {
            id: group_id_from_millis(now.timestamp_millis()),
            name: name.into(),
            bots,
            is_default: false,
            created_at: now.to_rfc3339(),
        }
    }

    /// Bots present in `new_bots` but not in this group's current list.
    pub fn added_bots<'a>(&self, new_bots: &'a [String]) -> Vec<&'a str> {
        let mut added: Vec<&str> = Vec::new();
        for bot in new_bots {
            if !self.bots.contains(bot) && !added.contains(&bot.as_str()) {
                added.push(bot);
            }
        }
        added
    }

    /// Projects this record into its display form.
    pub fn summary(&self) -> GroupSummary {
        GroupSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            bots: self.bots.clone(),
            bot_names: self.bots.iter().map(|b| bot_display_name(b)).collect(),
            bot_count: self.bots.len(),
            is_default: self.is_default,
            created_at: self.created_at.clone(),
        }
    }
}

/// Formats a group identifier from a millisecond timestamp.
pub fn group_id_from_millis(millis: i64) -> String {
    format!("{GROUP_ID_PREFIX}{millis}")
}

/// Display projection of a group, with bot display names resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: String,
    pub name: String,
    pub bots: Vec<String>,
    pub bot_names: Vec<String>,
    pub bot_count: usize,
    pub is_default: bool,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.timestamp_millis_opt(1_700_000_000_123).unwrap()
    }

    #[test]
    fn test_default_group_shape() {
        let group = Group::default_group(fixed_now());
        assert_eq!(group.id, DEFAULT_GROUP_ID);
        assert!(group.is_default);
        assert_eq!(group.bots.len(), 10);
        assert_eq!(group.bots[0], "chatgpt");
    }

    #[test]
    fn test_new_group_id_uses_epoch_millis() {
        let group = Group::new("dev", vec!["claude".into()], fixed_now());
        assert_eq!(group.id, "grp_1700000000123");
        assert!(!group.is_default);
    }

    #[test]
    fn test_added_bots_is_set_difference() {
        let group = Group::new(
            "dev",
            vec!["claude".into(), "grok".into()],
            fixed_now(),
        );
        let new_bots: Vec<String> = vec!["grok".into(), "qwen".into(), "seed".into(), "qwen".into()];
        assert_eq!(group.added_bots(&new_bots), vec!["qwen", "seed"]);
    }

    #[test]
    fn test_summary_resolves_display_names() {
        let group = Group::new("mix", vec!["deepseek".into(), "custom".into()], fixed_now());
        let summary = group.summary();
        assert_eq!(summary.bot_names, vec!["DeepSeek", "custom"]);
        assert_eq!(summary.bot_count, 2);
    }

    #[test]
    fn test_record_json_field_names() {
        let group = Group::default_group(fixed_now());
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value["id"], "grp_all");
        assert_eq!(value["is_default"], true);
        assert!(value["created_at"].is_string());
        assert!(value["bots"].is_array());
    }
}
