//! Presentation backends.
//!
//! The frame driver hands a finished CPU frame plus a placement rectangle to
//! a [`PresentBackend`]; everything about surfaces, swapchains, and pixel
//! formats stays behind this boundary.

mod error;
mod wgpu_blit;

pub use error::{BackendError, PresentError};
pub use wgpu_blit::WgpuBlitBackend;

use crate::coords::{Dimensions, Rect};
use crate::pattern::PixelBuffer;

/// Output surface abstraction used by the frame driver.
pub trait PresentBackend {
    /// Current drawable size in physical pixels.
    ///
    /// May be zero-sized while the window is minimized; callers skip the
    /// frame in that case.
    fn viewport(&self) -> Dimensions;

    /// Reallocates the output surface for a new viewport size.
    ///
    /// This is the expensive operation the resize debouncer exists to gate.
    fn resize(&mut self, dims: Dimensions) -> Result<(), BackendError>;

    /// Draws `frame` scaled into `target`, clears the surrounding bars, and
    /// presents.
    ///
    /// `target` must lie within the current viewport.
    fn present(&mut self, frame: &PixelBuffer, target: Rect) -> Result<(), PresentError>;
}
