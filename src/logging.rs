//! Logging setup and diagnostic reporting through `tracing`.
//!
//! All output goes to stderr so stdout stays free for the written path or the
//! generated source.

use std::io::IsTerminal as _;

use crate::diagnostic::{Diagnostic, Severity};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Initializes the global tracing subscriber.
///
/// Call once at startup. `RUST_LOG` controls filtering (default `info`).
pub fn init(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Pretty => builder
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .without_time()
            .init(),
        LogFormat::Json => builder
            .json()
            .with_ansi(false)
            .with_current_span(true)
            .init(),
    }
}

/// Emits a diagnostic at the level matching its severity.
pub fn report(diagnostic: &Diagnostic) {
    match diagnostic.severity {
        Severity::Error => tracing::error!(code = diagnostic.code, "{}", diagnostic.message),
        Severity::Warning => tracing::warn!(code = diagnostic.code, "{}", diagnostic.message),
    }
}

/// Emits every diagnostic in order.
pub fn report_all<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) {
    for diagnostic in diagnostics {
        report(diagnostic);
    }
}
