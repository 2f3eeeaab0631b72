//! Geometry types shared across the engine.
//!
//! Canonical space:
//! - Physical pixels
//! - Origin top-left
//! - +X right, +Y down

mod dims;
mod rect;

pub use dims::Dimensions;
pub use rect::Rect;
