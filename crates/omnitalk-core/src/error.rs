//! Error types for the Omnitalk storage layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for every Omnitalk crate.
///
/// Variants fall into two families:
/// - rejections (`NotFound`, `GroupLimitReached`, `DuplicateGroupName`,
///   `DefaultGroupImmutable`): the request was refused and nothing on disk
///   changed.
/// - faults (`Io`, `Serialization`, `Config`, `Internal`): the underlying
///   storage or environment failed.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum OmnitalkError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The group cap has already been reached
    #[error("Group limit reached: at most {limit} groups are allowed")]
    GroupLimitReached { limit: usize },

    /// Another group already uses this name
    #[error("Group name already in use: '{0}'")]
    DuplicateGroupName(String),

    /// The default group cannot be renamed, edited, or deleted
    #[error("Default group '{0}' cannot be modified")]
    DefaultGroupImmutable(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON" or "TOML"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OmnitalkError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if the request was refused by a validation rule.
    ///
    /// Rejections never mutate storage; callers may surface them as a plain
    /// "not possible" result instead of a failure.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::GroupLimitReached { .. }
                | Self::DuplicateGroupName(_)
                | Self::DefaultGroupImmutable(_)
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for OmnitalkError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for OmnitalkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for OmnitalkError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, OmnitalkError>`.
pub type Result<T> = std::result::Result<T, OmnitalkError>;
