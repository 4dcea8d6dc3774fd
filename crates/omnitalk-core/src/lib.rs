pub mod bot;
pub mod config;
pub mod context;
pub mod error;
pub mod group;
pub mod repository;

// Re-export common error type
pub use error::OmnitalkError;
