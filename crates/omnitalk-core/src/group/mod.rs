//! Group domain module.
//!
//! - `model`: the stored `Group` record, its display projection and limits
//! - `repository`: persistence trait for the group list

mod model;
mod repository;

pub use model::{
    DEFAULT_GROUP_ID, DEFAULT_GROUP_NAME, GROUP_ID_PREFIX, Group, GroupSummary, MAX_GROUPS,
    group_id_from_millis,
};
pub use repository::GroupRepository;
