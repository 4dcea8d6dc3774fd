//! Group repository trait.

use async_trait::async_trait;

use super::model::Group;
use crate::error::Result;

/// Persistence for the ordered group list.
///
/// The list is stored and replaced as a whole; implementations do not merge
/// or reorder records.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Loads every group in stored order.
    ///
    /// When no backing store exists yet, implementations seed it with the
    /// default group and return that single record.
    async fn get_all(&self) -> Result<Vec<Group>>;

    /// Replaces the stored list with `groups`.
    async fn save_all(&self, groups: &[Group]) -> Result<()>;
}
