//! Conversation context domain module.
//!
//! Context is the per-bot message history scoped to one group.

mod model;
mod repository;

pub use model::{AggregatedContext, GroupContext, Message, ROLE_ASSISTANT, ROLE_USER};
pub use repository::ContextRepository;
