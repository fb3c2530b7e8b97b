//! Error types for halfsl500 operations

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for halfsl500 operations
#[derive(Error, Debug)]
pub enum Halfsl500Error {
    /// File not found or unreadable
    #[error("file not found or unreadable: {0}")]
    FileNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl Halfsl500Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Halfsl500Error::FileNotFound(_) | Halfsl500Error::Io(_) => 2, // File errors

            Halfsl500Error::Config { .. } => 4, // Configuration error
        }
    }
}

/// Result type alias for halfsl500 operations
pub type Result<T> = std::result::Result<T, Halfsl500Error>;
