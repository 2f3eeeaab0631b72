use crate::coords::Dimensions;
use crate::pattern::PixelBuffer;

/// Nearest-neighbor scaled copy (no smoothing).
///
/// Output dimensions are `round(src · zoom)` per axis. Driving this with the
/// zoom factors from [`super::fit`], which are derived from the truncated
/// target rectangle, produces exactly the target's pixel size, so the CPU
/// path and a blit-with-rect backend cover the same area.
///
/// Zoom factors must be positive; this is a precondition, not a runtime
/// state.
pub fn resample_nearest(src: &PixelBuffer, zoom_x: f64, zoom_y: f64) -> PixelBuffer {
    debug_assert!(zoom_x > 0.0 && zoom_y > 0.0);

    let src_dims = src.dimensions();
    let dst_dims = Dimensions::new(
        ((f64::from(src_dims.width) * zoom_x).round() as u32).max(1),
        ((f64::from(src_dims.height) * zoom_y).round() as u32).max(1),
    );

    let mut dst = PixelBuffer::new(dst_dims);
    let src_stride = src_dims.width as usize;
    let dst_stride = dst_dims.width as usize;

    let src_px = src.pixels();
    let dst_px = dst.pixels_mut();

    for dy in 0..dst_dims.height as usize {
        let sy = ((dy as f64 / zoom_y) as u32).min(src_dims.height - 1) as usize;
        let src_row = &src_px[sy * src_stride..][..src_stride];
        let dst_row = &mut dst_px[dy * dst_stride..][..dst_stride];

        for (dx, out) in dst_row.iter_mut().enumerate() {
            let sx = ((dx as f64 / zoom_x) as u32).min(src_dims.width - 1) as usize;
            *out = src_row[sx];
        }
    }

    dst
}
