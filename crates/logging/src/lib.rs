#![warn(missing_docs)]

//! Shared logging helpers and CLI argument definitions for the moveit workspace.
//!
//! moveit is normally bound to a hotkey and should stay silent, so the default
//! filter only lets warnings from our own crates through.

use std::env;

use clap::Args;
use tracing_subscriber::EnvFilter;

/// Logging controls for CLI apps.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Set global log level to trace (our crates only)
    #[arg(long, global = true, conflicts_with_all = ["debug", "log_level", "log_filter"])]
    pub trace: bool,

    /// Set global log level to debug (our crates only)
    #[arg(long, global = true, conflicts_with_all = ["trace", "log_level", "log_filter"])]
    pub debug: bool,

    /// Set a single global log level for our crates (error|warn|info|debug|trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Set an explicit tracing filter directive (overrides other flags)
    /// e.g. "moveit_core=debug,x11_winops=trace"
    #[arg(long, global = true)]
    pub log_filter: Option<String>,
}

impl LogArgs {
    /// Filter spec for these flags, consulting `RUST_LOG` when no flag is given.
    pub fn spec(&self) -> String {
        let rust_log = env::var("RUST_LOG").ok();
        compute_spec(
            self.trace,
            self.debug,
            self.log_level.as_deref(),
            self.log_filter.as_deref(),
            rust_log.as_deref(),
        )
    }
}

/// List of crate targets that constitute "our" logs.
pub fn our_crates() -> &'static [&'static str] {
    &["moveit", "moveit_core", "x11_winops", "config", "logging"]
}

/// Build a filter directive string that sets the same `level` for all of our crates.
pub fn level_spec_for(level: &str) -> String {
    let lvl = level.to_ascii_lowercase();
    our_crates()
        .iter()
        .map(|t| format!("{t}={lvl}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Compute the final filter spec string with precedence:
/// - `log_filter`
/// - `trace`/`debug`/`log_level` (crate-scoped)
/// - `rust_log` (the `RUST_LOG` environment value)
/// - default to crate-scoped `warn`
pub fn compute_spec(
    trace: bool,
    debug: bool,
    log_level: Option<&str>,
    log_filter: Option<&str>,
    rust_log: Option<&str>,
) -> String {
    if let Some(spec) = log_filter {
        return spec.to_string();
    }
    if trace {
        return level_spec_for("trace");
    }
    if debug {
        return level_spec_for("debug");
    }
    if let Some(lvl) = log_level {
        return level_spec_for(lvl);
    }
    match rust_log {
        Some(spec) if !spec.trim().is_empty() => spec.to_string(),
        _ => level_spec_for("warn"),
    }
}

/// Create an `EnvFilter` from a spec string.
pub fn env_filter_from_spec(spec: &str) -> EnvFilter {
    EnvFilter::new(spec)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        log: LogArgs,
    }

    #[test]
    fn explicit_filter_wins() {
        let spec = compute_spec(false, false, Some("info"), Some("x11_winops=trace"), Some("debug"));
        assert_eq!(spec, "x11_winops=trace");
    }

    #[test]
    fn levels_are_crate_scoped() {
        let spec = compute_spec(false, true, None, None, Some("trace"));
        assert!(spec.contains("moveit_core=debug"));
        assert!(spec.contains("x11_winops=debug"));
        assert_eq!(compute_spec(false, false, Some("INFO"), None, None), level_spec_for("info"));
    }

    #[test]
    fn env_then_quiet_default() {
        assert_eq!(compute_spec(false, false, None, None, Some("trace")), "trace");
        assert_eq!(compute_spec(false, false, None, None, Some("  ")), level_spec_for("warn"));
        assert_eq!(compute_spec(false, false, None, None, None), level_spec_for("warn"));
    }

    #[test]
    fn flags_conflict() {
        assert!(TestCli::try_parse_from(["t", "--trace", "--debug"]).is_err());
        let cli = TestCli::try_parse_from(["t", "--log-level", "info"]).unwrap();
        assert_eq!(cli.log.log_level.as_deref(), Some("info"));
    }
}
