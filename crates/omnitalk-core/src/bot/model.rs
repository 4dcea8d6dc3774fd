//! Known bot catalogue.
//!
//! The chat application talks to a fixed set of bots. Each bot is addressed
//! by a short lowercase key (stored in groups and context files) and shown
//! to users under a display name.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// A bot the application knows how to talk to.
///
/// Declaration order is the order used for the default group's bot list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum KnownBot {
    Chatgpt,
    Claude,
    Grok,
    Gemini,
    Glm,
    Kimi,
    Minimax,
    Qwen,
    Deepseek,
    Seed,
}

impl KnownBot {
    /// The identifier stored on disk (e.g. `"deepseek"`).
    pub fn id(&self) -> &'static str {
        match self {
            KnownBot::Chatgpt => "chatgpt",
            KnownBot::Claude => "claude",
            KnownBot::Grok => "grok",
            KnownBot::Gemini => "gemini",
            KnownBot::Glm => "glm",
            KnownBot::Kimi => "kimi",
            KnownBot::Minimax => "minimax",
            KnownBot::Qwen => "qwen",
            KnownBot::Deepseek => "deepseek",
            KnownBot::Seed => "seed",
        }
    }

    /// The name shown to users (e.g. `"DeepSeek"`).
    pub fn display_name(&self) -> &'static str {
        match self {
            KnownBot::Chatgpt => "ChatGPT",
            KnownBot::Claude => "Claude",
            KnownBot::Grok => "Grok",
            KnownBot::Gemini => "Gemini",
            KnownBot::Glm => "GLM",
            KnownBot::Kimi => "Kimi",
            KnownBot::Minimax => "MiniMax",
            KnownBot::Qwen => "Qwen",
            KnownBot::Deepseek => "DeepSeek",
            KnownBot::Seed => "Seed",
        }
    }

    /// Looks up a known bot by its stored identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        id.parse().ok()
    }
}

/// Identifiers of every known bot, in catalogue order.
pub fn default_bot_ids() -> Vec<String> {
    KnownBot::iter().map(|bot| bot.id().to_string()).collect()
}

/// Display name for a bot identifier.
///
/// Bots outside the catalogue are allowed in user groups; they are shown
/// under their raw identifier.
pub fn bot_display_name(id: &str) -> String {
    KnownBot::from_id(id)
        .map(|bot| bot.display_name().to_string())
        .unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_has_ten_bots_in_order() {
        let ids = default_bot_ids();
        assert_eq!(
            ids,
            vec![
                "chatgpt", "claude", "grok", "gemini", "glm", "kimi", "minimax", "qwen",
                "deepseek", "seed"
            ]
        );
    }

    #[test]
    fn test_strum_and_id_agree() {
        for bot in KnownBot::iter() {
            assert_eq!(bot.as_ref(), bot.id());
            assert_eq!(KnownBot::from_id(bot.id()), Some(bot));
        }
    }

    #[test]
    fn test_serde_uses_stored_identifier() {
        let json = serde_json::to_string(&KnownBot::Minimax).unwrap();
        assert_eq!(json, "\"minimax\"");
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        assert_eq!(bot_display_name("glm"), "GLM");
        assert_eq!(bot_display_name("my-local-llama"), "my-local-llama");
    }
}
