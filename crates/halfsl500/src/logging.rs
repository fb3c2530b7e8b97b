//! Diagnostic logging to stderr via tracing

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "HALFSL500_LOG";

/// Filter used when neither the requested nor the configured directive parses
const FALLBACK_FILTER: &str = "warn";

/// Pick the filter directive for this run
///
/// `--quiet` wins, then `HALFSL500_LOG`, then `--verbose`, then the config value.
pub fn resolve_filter(env: Option<&str>, verbose: bool, quiet: bool, configured: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    if let Some(directive) = env.map(str::trim).filter(|d| !d.is_empty()) {
        return directive.to_string();
    }
    if verbose {
        return "debug".to_string();
    }
    configured.to_string()
}

/// Parse `directive`, falling back to `configured` and then `warn`
///
/// Returns the filter and, when a fallback was taken, a warning for stderr.
pub fn build_filter(directive: &str, configured: &str) -> (EnvFilter, Option<String>) {
    let err = match EnvFilter::try_new(directive) {
        Ok(filter) => return (filter, None),
        Err(e) => e,
    };

    let (filter, used) = match EnvFilter::try_new(configured) {
        Ok(filter) if configured != directive => (filter, configured),
        _ => (EnvFilter::new(FALLBACK_FILTER), FALLBACK_FILTER),
    };
    let warning = format!(
        "ignoring invalid log filter `{}` ({}), using `{}`",
        directive, err, used
    );
    (filter, Some(warning))
}

/// Install the global subscriber
///
/// Never fails: a bad filter is replaced and reported as a warning, and a
/// subscriber that is already installed is left in place.
pub fn init(verbose: bool, quiet: bool, configured: &str) {
    let env = std::env::var(LOG_ENV_VAR).ok();
    let directive = resolve_filter(env.as_deref(), verbose, quiet, configured);
    let (filter, warning) = build_filter(&directive, configured);

    if let Some(warning) = warning {
        eprintln!("warning: {}", warning);
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
