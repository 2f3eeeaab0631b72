//! Aspect-ratio preserving scaling.
//!
//! [`fit`] decides where a source image lands inside a viewport
//! (letterbox/windowbox); [`resample_nearest`] performs the CPU-side scaled
//! copy for backends that take scale factors instead of a destination
//! rectangle.

mod aspect;
mod resample;

pub use aspect::{AspectFit, FitError, fit};
pub use resample::resample_nearest;
