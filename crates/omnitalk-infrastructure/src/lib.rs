pub mod config_service;
pub mod json_context_repository;
pub mod json_group_repository;
pub mod logging;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::json_context_repository::JsonContextRepository;
pub use crate::json_group_repository::JsonGroupRepository;
pub use crate::paths::OmnitalkPaths;
