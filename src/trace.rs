//! Tracing integration for outcome-rail.
//!
//! Failures can be reported to the `tracing` ecosystem in the middle of a
//! chain without changing the outcome.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Level;

use crate::types::{Error, Outcome};

/// Extension trait that logs failures as structured `tracing` events.
///
/// Each event carries the error `code`, its `kind` (the variant name) and its
/// `message`. Successes emit nothing.
///
/// # Example
///
/// ```
/// use outcome_rail::trace::OutcomeTraceExt;
/// use outcome_rail::{Error, Outcome};
/// use tracing::Level;
///
/// let outcome: Outcome<u32> = Outcome::failure(Error::not_found("User.NotFound", "no such user"))
///     .trace_failure_at(Level::WARN);
///
/// assert!(outcome.is_failure());
/// ```
pub trait OutcomeTraceExt: Sized {
    /// Emits an `ERROR` event on failure and returns `self` unchanged.
    fn trace_failure(self) -> Self {
        self.trace_failure_at(Level::ERROR)
    }

    /// Emits an event at `level` on failure and returns `self` unchanged.
    fn trace_failure_at(self, level: Level) -> Self;
}

impl<T> OutcomeTraceExt for Outcome<T> {
    fn trace_failure_at(self, level: Level) -> Self {
        if let Outcome::Failure(error) = &self {
            emit(level, error);
        }
        self
    }
}

// `tracing` macros need a constant level, hence the dispatch.
fn emit(level: Level, error: &Error) {
    let code = error.code();
    let kind = error.variant_name();
    let message = error.message();
    if level == Level::ERROR {
        tracing::error!(code, kind, message, "outcome failed");
    } else if level == Level::WARN {
        tracing::warn!(code, kind, message, "outcome failed");
    } else if level == Level::INFO {
        tracing::info!(code, kind, message, "outcome failed");
    } else if level == Level::DEBUG {
        tracing::debug!(code, kind, message, "outcome failed");
    } else {
        tracing::trace!(code, kind, message, "outcome failed");
    }
}
