//! CLI command implementations

pub mod version;

pub use version::{run_summary, run_version};
