/// Width/height pair in physical pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height, in single precision.
    ///
    /// Callers must reject empty dimensions first; dividing by a zero height
    /// here would produce infinity, not a panic.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
