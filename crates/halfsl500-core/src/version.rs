//! Build and version metadata
//!
//! Values are captured by the crate's build script and baked in at compile
//! time, so [`get_build_info`] never touches the filesystem or the network.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Program name shown in version output
pub const PROGRAM_NAME: &str = "halfsl500";

/// Package version shared by every crate in the workspace
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short commit hash, or `unknown` when built outside a git checkout
pub const COMMIT: &str = env!("HALFSL500_COMMIT");

/// UTC build date (YYYY-MM-DD)
pub const BUILD_DATE: &str = env!("HALFSL500_BUILD_DATE");

/// Output of `rustc --version` for the compiler that built this binary
pub const RUSTC_VERSION: &str = env!("HALFSL500_RUSTC_VERSION");

/// Target triple
pub const TARGET: &str = env!("HALFSL500_TARGET");

/// Build and version metadata for the running binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Program name
    pub name: String,
    /// Semantic version, without a leading `v`
    pub version: String,
    /// Short commit hash
    pub commit: String,
    /// Build date
    pub build_date: String,
    /// Compiler version string
    pub rustc_version: String,
    /// Target triple
    pub target: String,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} (commit {}, built {})",
            self.name, self.version, self.commit, self.build_date
        )
    }
}

/// Get the build information of the running binary
pub fn get_build_info() -> BuildInfo {
    BuildInfo {
        name: PROGRAM_NAME.to_string(),
        version: VERSION.to_string(),
        commit: COMMIT.to_string(),
        build_date: BUILD_DATE.to_string(),
        rustc_version: RUSTC_VERSION.to_string(),
        target: TARGET.to_string(),
    }
}
