//! Conditional logging macros.
//!
//! With the `tracing` feature the geometry code emits `tracing` debug events
//! (clamped side counts, degenerate shapes, label direction fallbacks).
//! Without it the macros expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::debug;

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::debug;
