//! Application layer for Omnitalk.
//!
//! Use cases that coordinate the group store and the context store, plus a
//! constructor wiring them to the JSON file repositories.

pub mod group_usecase;

use std::sync::Arc;

use omnitalk_core::error::Result;
use omnitalk_infrastructure::{
    ConfigService, JsonContextRepository, JsonGroupRepository, OmnitalkPaths,
};

pub use group_usecase::GroupUseCase;

/// Builds a [`GroupUseCase`] over the JSON stores under `paths`.
pub fn open_with_paths(paths: &OmnitalkPaths) -> Result<GroupUseCase> {
    let groups = JsonGroupRepository::new(paths)?;
    let contexts = JsonContextRepository::new(paths)?;
    tracing::debug!(
        "Opening stores: groups={:?}, contexts={:?}",
        groups.path(),
        contexts.contexts_dir()
    );
    Ok(GroupUseCase::new(Arc::new(groups), Arc::new(contexts)))
}

/// Builds a [`GroupUseCase`] from the user's `config.toml`.
pub async fn open_default() -> Result<GroupUseCase> {
    let config = ConfigService::new(&OmnitalkPaths::new(None))?;
    let paths = config.load_paths().await?;
    open_with_paths(&paths)
}
