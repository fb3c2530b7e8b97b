//! Implementation of the `halfsl500 version` command
//!
//! Prints the build information of the running binary. Positional arguments
//! are accepted and ignored.

use std::io::{self, IsTerminal, Write};

use halfsl500_core::{BuildInfo, get_build_info};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::colors::COLORS;
use crate::output::JsonResponse;

/// How the version command renders its output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionMode {
    /// Append commit, build date, compiler and target lines
    pub verbose: bool,
    /// Emit a JSON envelope instead of text
    pub json: bool,
    /// Print nothing
    pub quiet: bool,
    /// Style verbose labels for a terminal
    pub color: bool,
}

/// Run the version command
///
/// # Arguments
/// * `args` - Residual positional arguments (ignored)
/// * `verbose` - Show extended build information
/// * `json_output` - Output in JSON format
/// * `quiet` - Suppress non-error output
pub fn run_version(
    args: &[String],
    verbose: bool,
    json_output: bool,
    quiet: bool,
) -> Result<i32, String> {
    if !args.is_empty() {
        debug!(?args, "ignoring arguments to version");
    }

    let stdout = io::stdout();
    let mode = VersionMode {
        verbose,
        json: json_output,
        quiet,
        color: stdout.is_terminal(),
    };

    let info = get_build_info();
    let mut out = stdout.lock();
    write_version(&mut out, &info, mode)
        .and_then(|()| out.flush())
        .map_err(|e| format!("failed to write version: {}", e))?;

    Ok(0)
}

/// Print build information and a usage hint when no subcommand is given
pub fn run_summary(quiet: bool) -> Result<i32, String> {
    if quiet {
        return Ok(0);
    }

    let info = get_build_info();
    let mut out = io::stdout().lock();
    write_summary(&mut out, &info)
        .and_then(|()| out.flush())
        .map_err(|e| format!("failed to write version: {}", e))?;

    Ok(0)
}

/// Write the build information line followed by a usage hint
pub fn write_summary<W: Write>(out: &mut W, info: &BuildInfo) -> io::Result<()> {
    writeln!(out, "{}", info)?;
    writeln!(out, "Use --help for usage information")
}

/// Write build information to `out` according to `mode`
///
/// Precedence is quiet, then json, then verbose.
pub fn write_version<W: Write>(out: &mut W, info: &BuildInfo, mode: VersionMode) -> io::Result<()> {
    if mode.quiet {
        return Ok(());
    }

    if mode.json {
        let response = JsonResponse::ok("version", info);
        let json = serde_json::to_string(&response).map_err(io::Error::other)?;
        return writeln!(out, "{}", json);
    }

    writeln!(out, "{}", info)?;

    if mode.verbose {
        let fields = [
            ("commit:", info.commit.as_str()),
            ("built:", info.build_date.as_str()),
            ("rustc:", info.rustc_version.as_str()),
            ("target:", info.target.as_str()),
        ];
        for (label, value) in fields {
            if mode.color {
                writeln!(out, "  {:<11} {}", label.style(COLORS.label), value)?;
            } else {
                writeln!(out, "  {:<11} {}", label, value)?;
            }
        }
    }

    Ok(())
}
