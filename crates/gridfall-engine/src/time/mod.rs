//! Frame-rate measurement and resize debouncing.
//!
//! Both units share the same monotonic clock but are parameterized on
//! caller-provided `Instant`s, so tests can drive them with synthetic
//! timelines instead of sleeping.

mod debounce;
mod fps;

pub use debounce::{DEFAULT_QUIET_WINDOW, ResizeDebouncer};
pub use fps::{FpsCounter, FpsReading};
