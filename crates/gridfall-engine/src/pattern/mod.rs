//! Procedural test-pattern generation.

mod buffer;
mod grid;

pub use buffer::{BYTES_PER_PIXEL, PixelBuffer};
pub use grid::GridPattern;
