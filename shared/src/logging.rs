//! Shared logging utilities for consistent tracing across the client and the suite

use tracing::info;

/// Crates whose events are shown at the requested level
const WORKSPACE_TARGETS: &[&str] = &["tester", "api", "shared"];

/// Build the `EnvFilter` directive string for a base level
///
/// HTTP plumbing stays at `warn` so request bodies never reach the console.
pub fn filter_directives(base_level: &str) -> String {
    let mut directives: Vec<String> = WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={base_level}"))
        .collect();
    directives.push("reqwest=warn".to_string());
    directives.push("hyper=warn".to_string());
    directives.join(",")
}

/// Initialize tracing subscriber for the suite
///
/// `RUST_LOG` wins over the computed filter when it is set.
pub fn init_tracing(verbose: bool) {
    init_tracing_with_level(Some(if verbose { "debug" } else { "info" }));
}

/// Initialize tracing subscriber with an explicit base level
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(base_level)));

    // A second call (e.g. from several tests) keeps the first subscriber
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &str, details: &str) {
    info!(component, "🚀 Starting {}", details);
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component: &str, reason: &str) {
    info!(component, "🛑 Shutting down: {}", reason);
}
