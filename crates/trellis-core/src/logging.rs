//! Logging facilities for Trellis.
//!
//! Trellis instruments itself with the `tracing` crate and never installs a
//! subscriber. To see output, install one in the application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("trellis=trace,trellis_core=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "trellis_core";
    /// Control identity registry.
    pub const REGISTRY: &str = "trellis_core::registry";
    /// Event registry (connect, disconnect, dispatch).
    pub const EVENTS: &str = "trellis_core::events";
    /// Placement and removal of controls.
    pub const PLACEMENT: &str = "trellis::placement";
    /// Auto-navigation solver.
    pub const NAVIGATION: &str = "trellis::navigation";
    /// Window host lifecycle, focus and input entry points.
    pub const WINDOW: &str = "trellis::window";
    /// Performance spans.
    pub const PERF: &str = "trellis::perf";
}

/// A guard that keeps a performance span entered until dropped.
///
/// Subscribers that record span timings (e.g. `tracing-subscriber` with
/// `FmtSpan::CLOSE`) report the duration of the guarded operation.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Enter a new performance span for `operation`.
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let _span = PerfSpan::new("test_operation");
            tracing::trace!(target: targets::CORE, "inside span");
        });
    }
}
