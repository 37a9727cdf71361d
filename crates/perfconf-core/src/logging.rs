//! Shared logging initialization for perfconf binaries.

use std::sync::OnceLock;

static INIT: OnceLock<()> = OnceLock::new();

fn parse_level() -> tracing::Level {
    match std::env::var("PERFCONF_LOG")
        .unwrap_or_else(|_| "info".to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

/// Initialize process-level tracing output from `PERFCONF_LOG`.
///
/// Safe to call multiple times; only the first call installs the
/// subscriber. Best-effort and never returns an error.
pub fn init() {
    if INIT.get().is_some() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_max_level(parse_level())
        .with_target(false)
        .try_init();
    let _ = INIT.set(());
}
