//! halfsl500 CLI - report build information

mod cli;
mod colors;
mod commands;
mod logging;
mod output;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use cli::Commands;
use halfsl500_core::Config;
use output::{JsonIssue, JsonResponse};
use tracing::{debug, warn};

fn main() -> ExitCode {
    let cli = cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let discovered = match Config::discover(&cwd) {
        Ok(found) => found,
        Err(e) => return report_error("config", &e.to_string(), e.exit_code(), cli.json),
    };
    let config = discovered.config;

    logging::init(cli.verbose, cli.quiet, &config.halfsl500.log_level);

    if let Some(e) = &discovered.skipped {
        warn!("ignoring configuration file: {}", e);
    }
    match &discovered.path {
        Some(path) => debug!(path = %path.display(), "loaded configuration"),
        None => debug!("no configuration file loaded, using defaults"),
    }

    let result = match cli.command {
        Some(Commands::Version { args }) => {
            let verbose = cli.verbose || config.version.verbose;
            commands::run_version(&args, verbose, cli.json, cli.quiet)
        }
        // No subcommand - print version info
        None => commands::run_summary(cli.quiet),
    };

    match result {
        Ok(code) => exit_code(code),
        Err(e) => report_error("command", &e, 1, cli.json),
    }
}

/// Convert a command exit code, treating out-of-range values as failure
fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(exit_byte(code))
}

fn exit_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

/// Print an error to stderr (and as a JSON envelope when requested)
fn report_error(code: &str, message: &str, exit: i32, json: bool) -> ExitCode {
    if json {
        let response = JsonResponse::error(
            "halfsl500",
            serde_json::Value::Null,
            vec![JsonIssue::error(code, message)],
        );
        if let Ok(rendered) = serde_json::to_string(&response) {
            // stdout may be the thing that failed
            let _ = writeln!(std::io::stdout().lock(), "{}", rendered);
        }
    }
    eprintln!("error: {}", message);
    exit_code(exit)
}
