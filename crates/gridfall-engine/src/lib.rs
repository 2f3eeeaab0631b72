//! Gridfall engine crate.
//!
//! Owns the demo's actual logic (aspect-fit placement, frame pacing,
//! resize debouncing, pattern generation) plus the presentation backends
//! that put pixels on screen.

pub mod backend;
pub mod coords;
pub mod driver;
pub mod pattern;
pub mod scale;
pub mod time;

pub mod logging;
