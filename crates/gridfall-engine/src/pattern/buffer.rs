use crate::coords::Dimensions;

/// RGBA8: one `u32` per pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// CPU-side RGBA8 image.
///
/// Pixels are stored as native `u32`s whose in-memory byte order is
/// R, G, B, A on every host, matching `Rgba8Unorm` texture uploads. Rows are
/// tightly packed; `pitch` reports the row stride in bytes for callers that
/// index byte-wise (`4·x + y·pitch`).
pub struct PixelBuffer {
    dims: Dimensions,
    data: Vec<u32>,
}

impl PixelBuffer {
    /// Allocates a zeroed (transparent black) buffer.
    pub fn new(dims: Dimensions) -> Self {
        let len = dims.width as usize * dims.height as usize;
        Self {
            dims,
            data: vec![0; len],
        }
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.dims.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.dims.height
    }

    /// Row stride in bytes, padding included (rows here are tightly packed).
    #[inline]
    pub fn pitch(&self) -> usize {
        self.dims.width as usize * BYTES_PER_PIXEL
    }

    /// Raw bytes in row-major R, G, B, A order, e.g. for texture upload.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Writes one pixel.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        debug_assert!(x < self.dims.width && y < self.dims.height);
        let i = y as usize * self.dims.width as usize + x as usize;
        self.data[i] = u32::from_ne_bytes(rgba);
    }

    /// Reads one pixel back as `[r, g, b, a]`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        debug_assert!(x < self.dims.width && y < self.dims.height);
        let i = y as usize * self.dims.width as usize + x as usize;
        self.data[i].to_ne_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_pixel_round_trips() {
        let mut buf = PixelBuffer::new(Dimensions::new(4, 3));
        buf.put(2, 1, [10, 20, 30, 255]);
        assert_eq!(buf.pixel(2, 1), [10, 20, 30, 255]);
        assert_eq!(buf.pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn bytes_are_rgba_order() {
        let mut buf = PixelBuffer::new(Dimensions::new(1, 1));
        buf.put(0, 0, [1, 2, 3, 4]);
        assert_eq!(buf.bytes(), &[1, 2, 3, 4]);
    }

    #[test]
    fn pitch_matches_tight_packing() {
        let buf = PixelBuffer::new(Dimensions::new(800, 342));
        assert_eq!(buf.pitch(), 800 * BYTES_PER_PIXEL);
        assert_eq!(buf.bytes().len(), buf.pitch() * 342);
    }
}
