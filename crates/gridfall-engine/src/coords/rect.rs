use super::Dimensions;

/// Placement rectangle inside a viewport (top-left origin).
///
/// The origin is signed to match platform blit APIs, but every rectangle the
/// engine computes has non-negative offsets and lies fully inside its
/// viewport.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn size(self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True iff the rectangle lies entirely within a viewport of `bounds`
    /// anchored at the origin.
    pub fn contained_in(self, bounds: Dimensions) -> bool {
        self.x >= 0
            && self.y >= 0
            && i64::from(self.x) + i64::from(self.width) <= i64::from(bounds.width)
            && i64::from(self.y) + i64::from(self.height) <= i64::from(bounds.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── contained_in ──────────────────────────────────────────────────────

    #[test]
    fn contained_exact_fill() {
        let r = Rect::new(0, 0, 100, 50);
        assert!(r.contained_in(Dimensions::new(100, 50)));
    }

    #[test]
    fn contained_with_offset() {
        let r = Rect::new(10, 20, 80, 30);
        assert!(r.contained_in(Dimensions::new(100, 50)));
    }

    #[test]
    fn not_contained_overflow_right() {
        let r = Rect::new(30, 0, 80, 50);
        assert!(!r.contained_in(Dimensions::new(100, 50)));
    }

    #[test]
    fn not_contained_negative_origin() {
        let r = Rect::new(-1, 0, 10, 10);
        assert!(!r.contained_in(Dimensions::new(100, 50)));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(Rect::new(0, 0, 0, 5).is_empty());
        assert!(Rect::new(0, 0, 5, 0).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }
}
