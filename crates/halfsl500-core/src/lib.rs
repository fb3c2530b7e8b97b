//! halfsl500-core: Core library for build info, configuration, and errors
//!
//! This crate provides the foundational types and logic for the halfsl500 CLI.

/// Core error types for halfsl500 operations
pub mod error;

/// Configuration handling
pub mod config;

/// Build and version metadata
pub mod version;

// Re-exports for convenience
pub use config::{Config, Discovered, Halfsl500Config, VersionConfig};
pub use error::Halfsl500Error;
pub use version::{BuildInfo, get_build_info};
