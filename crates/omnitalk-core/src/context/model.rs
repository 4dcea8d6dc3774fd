//! Conversation context models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Role written for messages typed by the user.
pub const ROLE_USER: &str = "user";

/// Role written for bot replies.
pub const ROLE_ASSISTANT: &str = "assistant";

/// One turn of a bot's conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ROLE_USER, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ROLE_ASSISTANT, content)
    }
}

/// Per-bot message history of a single group.
///
/// Serialized as a plain JSON object mapping bot id to its messages. A bot
/// without a key has no history; an empty map is a valid initialized state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupContext {
    bots: BTreeMap<String, Vec<Message>>,
}

impl GroupContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bots.is_empty()
    }

    /// Whether `bot` has an entry (possibly empty) in this context.
    pub fn contains_bot(&self, bot: &str) -> bool {
        self.bots.contains_key(bot)
    }

    /// Messages recorded for `bot`, or an empty slice.
    pub fn messages(&self, bot: &str) -> &[Message] {
        self.bots.get(bot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends a message to `bot`'s history, creating the entry if needed.
    pub fn push(&mut self, bot: impl Into<String>, message: Message) {
        self.bots.entry(bot.into()).or_default().push(message);
    }

    /// Drops `bot`'s entry entirely. Returns whether anything was removed.
    pub fn remove_bot(&mut self, bot: &str) -> bool {
        self.bots.remove(bot).is_some()
    }

    /// Bot ids with an entry, in key order.
    pub fn bots(&self) -> impl Iterator<Item = &str> {
        self.bots.keys().map(String::as_str)
    }
}

/// Messages of several bots gathered from every group, keyed by bot id.
pub type AggregatedContext = BTreeMap<String, Vec<Message>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_creates_entry() {
        let mut ctx = GroupContext::new();
        assert!(!ctx.contains_bot("kimi"));

        ctx.push("kimi", Message::user("hello"));
        ctx.push("kimi", Message::assistant("hi"));

        assert_eq!(ctx.messages("kimi").len(), 2);
        assert_eq!(ctx.messages("kimi")[1].role, ROLE_ASSISTANT);
        assert!(ctx.messages("qwen").is_empty());
    }

    #[test]
    fn test_remove_bot() {
        let mut ctx = GroupContext::new();
        ctx.push("grok", Message::user("x"));
        assert!(ctx.remove_bot("grok"));
        assert!(!ctx.remove_bot("grok"));
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut ctx = GroupContext::new();
        ctx.push("claude", Message::user("你好"));

        let json = serde_json::to_string(&ctx).unwrap();
        assert_eq!(json, r#"{"claude":[{"role":"user","content":"你好"}]}"#);

        let empty: GroupContext = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_rejects_malformed_message() {
        let result: Result<GroupContext, _> =
            serde_json::from_str(r#"{"claude":[{"role":"user"}]}"#);
        assert!(result.is_err());
    }
}
