use thiserror::Error;

use crate::coords::{Dimensions, Rect};

/// Degenerate input to [`fit`].
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum FitError {
    #[error("invalid dimensions: image {image:?}, viewport {viewport:?} (all sides must be > 0)")]
    InvalidDimensions {
        image: Dimensions,
        viewport: Dimensions,
    },
}

/// Placement of a source image scaled uniformly into a viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AspectFit {
    /// Destination rectangle, centered and fully contained in the viewport.
    pub target: Rect,

    /// Horizontal scale factor, derived from the already-truncated target
    /// width.
    pub zoom_x: f64,

    /// Vertical scale factor, derived from the already-truncated target
    /// height.
    pub zoom_y: f64,
}

/// Computes the largest centered rectangle with `image`'s aspect ratio that
/// fits entirely inside `viewport`.
///
/// An image relatively wider than the viewport is letterboxed (bars top and
/// bottom); otherwise it is windowboxed (bars left and right). Equal ratios
/// take the windowbox branch and degenerate to an exact fit.
///
/// Fractional sizes are truncated toward zero and the leftover split evenly
/// by integer division, so a one-pixel remainder ends up on the
/// bottom/right bar.
///
/// The zoom factors are computed from the truncated target size rather than
/// the ideal one, so a CPU resample driven by them covers exactly the same
/// pixel area as a blit into `target`.
pub fn fit(image: Dimensions, viewport: Dimensions) -> Result<AspectFit, FitError> {
    if image.is_empty() || viewport.is_empty() {
        return Err(FitError::InvalidDimensions { image, viewport });
    }

    let image_ratio = image.aspect_ratio();
    let viewport_ratio = viewport.aspect_ratio();

    let target = if image_ratio > viewport_ratio {
        // Letterbox: full width, bars top and bottom.
        let height = (viewport.width as f32 / image_ratio) as u32;
        let y = (viewport.height - height) / 2;
        Rect::new(0, y as i32, viewport.width, height)
    } else {
        // Windowbox: full height, bars left and right.
        let width = (viewport.height as f32 * image_ratio) as u32;
        let x = (viewport.width - width) / 2;
        Rect::new(x as i32, 0, width, viewport.height)
    };

    Ok(AspectFit {
        target,
        zoom_x: f64::from(target.width) / f64::from(image.width),
        zoom_y: f64::from(target.height) / f64::from(image.height),
    })
}
