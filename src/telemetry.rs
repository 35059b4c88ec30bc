//! Opt-in `tracing` subscriber setup for hosts embedding `scope-chart`.
//!
//! The engine only emits events. Scope changes, level replans and visibility
//! toggles log at `debug`; per-replan details log at `trace`.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACE_DIRECTIVE: &str = "scope_chart=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// `fallback_directive`.
///
/// Returns `false` without the `telemetry` feature, or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_tracing(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}

/// [`init_tracing`] with [`DEFAULT_TRACE_DIRECTIVE`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_TRACE_DIRECTIVE)
}
