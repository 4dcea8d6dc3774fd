//! Repository trait re-exports.
//!
//! This module provides centralized access to all repository traits.

// Re-export GroupRepository from group module
pub use crate::group::GroupRepository;

// Re-export ContextRepository from context module
pub use crate::context::ContextRepository;
