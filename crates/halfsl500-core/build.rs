//! Captures build metadata for `halfsl500_core::version`.
//!
//! Emits `HALFSL500_COMMIT`, `HALFSL500_BUILD_DATE`, `HALFSL500_RUSTC_VERSION`
//! and `HALFSL500_TARGET` as compile-time environment variables.

use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-env-changed=HALFSL500_COMMIT");
    println!("cargo:rerun-if-env-changed=HALFSL500_BUILD_DATE");
    println!("cargo:rerun-if-changed=../../.git/HEAD");

    let commit = override_var("HALFSL500_COMMIT")
        .or_else(|| command_output("git", &["rev-parse", "--short", "HEAD"]))
        .unwrap_or_else(|| UNKNOWN.to_string());

    let build_date = override_var("HALFSL500_BUILD_DATE")
        .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version =
        command_output(&rustc, &["--version"]).unwrap_or_else(|| UNKNOWN.to_string());

    let target = std::env::var("TARGET").unwrap_or_else(|_| UNKNOWN.to_string());

    println!("cargo:rustc-env=HALFSL500_COMMIT={}", commit);
    println!("cargo:rustc-env=HALFSL500_BUILD_DATE={}", build_date);
    println!("cargo:rustc-env=HALFSL500_RUSTC_VERSION={}", rustc_version);
    println!("cargo:rustc-env=HALFSL500_TARGET={}", target);
}

/// Non-empty value of an override variable
fn override_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// First line of a successful command's stdout
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    stdout
        .lines()
        .next()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
}
