//! `--json` envelope
//!
//! Every `--json` run writes exactly one envelope line to stdout: the build
//! info under `data` on success, or `data: null` plus one issue when the run
//! fails.

use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: &str = "1";

/// One line of `--json` output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse<T> {
    /// Envelope layout version, bumped when fields change meaning
    pub schema_version: String,
    /// `version` on success, `halfsl500` when reporting a failure
    pub command: String,
    /// "ok" or "error"
    pub status: String,
    /// Build info on success
    pub data: T,
    /// Why the run failed; empty on success
    pub issues: Vec<JsonIssue>,
}

impl<T> JsonResponse<T> {
    /// Wrap a command's payload
    pub fn ok(command: &str, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "ok".to_string(),
            data,
            issues: vec![],
        }
    }

    /// Report a failure that produced no payload
    pub fn error(command: &str, data: T, issues: Vec<JsonIssue>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "error".to_string(),
            data,
            issues,
        }
    }
}

/// A failure reported inside the envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonIssue {
    /// Failure stage: `config` or `command`
    pub code: String,
    /// Always "error" today
    pub severity: String,
    /// Same text as the `error:` line on stderr
    pub message: String,
}

impl JsonIssue {
    /// Error raised at `code`
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            severity: "error".to_string(),
            message: message.into(),
        }
    }
}
