//! Bot catalogue module.

mod model;

pub use model::{KnownBot, bot_display_name, default_bot_ids};
