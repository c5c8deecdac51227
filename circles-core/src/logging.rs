//! Logging setup using **tracing**.
//!
//! Traversal code emits events through the tracing macros (debug for
//! dropped friend references, info for run summaries); these initializers
//! install the global collector that renders them.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing collector with structured JSON output.
///
/// This should be called *once* at the beginning of the application's
/// runtime. Writes to stderr so stdout stays clean for tool output.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=circles_core=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Initializes a compact human-readable collector for interactive use.
pub fn init_compact_logging() {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
