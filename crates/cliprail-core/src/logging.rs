#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature the engine's log macros are re-exports from
//! `tracing`; without it they compile to nothing, so downstream crates can
//! write `cliprail_core::debug!(..)` unconditionally.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace, warn};

// Without tracing, the macros swallow their arguments. Spans still hand back
// something with `enter()` so call sites keep one shape.
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// No-op debug_span macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// A no-op span guard for when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Enter the no-op span (does nothing).
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// A no-op span guard.
#[cfg(not(feature = "tracing"))]
pub struct NoopGuard;

/// Error returned when a global subscriber could not be installed.
#[cfg(feature = "tracing-json")]
pub type SubscriberInitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install a global fmt subscriber writing to stderr.
///
/// `filter` uses `EnvFilter` directive syntax (e.g. `"cliprail_reorder=debug"`);
/// an unparsable directive falls back to `info`. With `json` set, each event is
/// emitted as one JSON object per line.
///
/// Fails if a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_subscriber(filter: &str, json: bool) -> Result<(), SubscriberInitError> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
