use std::time::Duration;

use super::PixelBuffer;

/// Animated grid test pattern.
///
/// A two-axis color gradient with a bright line every `cell` pixels on each
/// axis; the lines scroll diagonally at `speed` texture pixels per second.
#[derive(Debug, Clone)]
pub struct GridPattern {
    cell: u32,
    speed: f32,
    phase: u32,
}

impl GridPattern {
    /// `cell` is the grid spacing in pixels, `speed` the scroll rate in
    /// pixels per second.
    pub fn new(cell: u32, speed: f32) -> Self {
        debug_assert!(cell > 0);
        Self {
            cell,
            speed,
            phase: 0,
        }
    }

    #[inline]
    pub fn phase(&self) -> u32 {
        self.phase
    }

    /// Advances the scroll phase to `elapsed` total runtime.
    ///
    /// The phase is derived from absolute runtime rather than accumulated
    /// per-frame deltas, so a dropped or slow frame never desynchronizes the
    /// animation.
    pub fn advance(&mut self, elapsed: Duration) {
        self.phase = (elapsed.as_secs_f64() * f64::from(self.speed)) as u32 % self.cell;
    }

    /// Renders one frame of the pattern into `frame`.
    pub fn fill(&self, frame: &mut PixelBuffer) {
        let dims = frame.dimensions();
        for x in 0..dims.width {
            for y in 0..dims.height {
                let red = if y % self.cell == self.phase {
                    0xff
                } else {
                    (y * 255 / dims.height) as u8
                };
                let green = if x % self.cell == self.phase {
                    0xff
                } else {
                    (x * 255 / dims.width) as u8
                };
                let blue = (x + y) as u8;
                frame.put(x, y, [red, green, blue, 0xff]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Dimensions;

    #[test]
    fn phase_follows_total_runtime() {
        let mut pattern = GridPattern::new(40, 150.0);
        assert_eq!(pattern.phase(), 0);

        // 1s * 150 px/s = 150 px, mod 40 = 30.
        pattern.advance(Duration::from_secs(1));
        assert_eq!(pattern.phase(), 30);

        // Absolute, not cumulative: re-advancing to the same instant is a no-op.
        pattern.advance(Duration::from_secs(1));
        assert_eq!(pattern.phase(), 30);

        pattern.advance(Duration::from_millis(1200));
        assert_eq!(pattern.phase(), (180 % 40) as u32);
    }

    #[test]
    fn grid_lines_are_saturated() {
        let mut frame = PixelBuffer::new(Dimensions::new(80, 60));
        let mut pattern = GridPattern::new(40, 150.0);
        pattern.advance(Duration::from_millis(800)); // phase 120 % 40 = 0
        assert_eq!(pattern.phase(), 0);
        pattern.fill(&mut frame);

        // y = 0 is a horizontal line: red saturated everywhere on that row.
        assert_eq!(frame.pixel(17, 0)[0], 0xff);
        // x = 40 is a vertical line: green saturated on that column.
        assert_eq!(frame.pixel(40, 23)[1], 0xff);
    }

    #[test]
    fn off_grid_pixels_are_gradient() {
        let mut frame = PixelBuffer::new(Dimensions::new(80, 60));
        let pattern = GridPattern::new(40, 150.0); // phase 0
        pattern.fill(&mut frame);

        // (17, 23) sits on no line at phase 0.
        let [r, g, b, a] = frame.pixel(17, 23);
        assert_eq!(r, (23 * 255 / 60) as u8);
        assert_eq!(g, (17 * 255 / 80) as u8);
        assert_eq!(b, 40);
        assert_eq!(a, 0xff);
    }

    #[test]
    fn alpha_is_always_opaque() {
        let mut frame = PixelBuffer::new(Dimensions::new(16, 16));
        let pattern = GridPattern::new(4, 10.0);
        pattern.fill(&mut frame);
        for x in 0..16 {
            for y in 0..16 {
                assert_eq!(frame.pixel(x, y)[3], 0xff);
            }
        }
    }
}
