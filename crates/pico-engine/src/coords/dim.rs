/// Width/height pair in pixels.
///
/// Used for both the physical window size and the logical canvas size.
/// Components are signed so they mix with [`Point`](super::Point) arithmetic
/// without casts; valid sizes are positive.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Dim {
    pub w: i32,
    pub h: i32,
}

impl Dim {
    #[inline]
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { w: 0, h: 0 }
    }

    /// Both components strictly positive.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.w > 0 && self.h > 0
    }

    /// True when `self` is an exact multiple of `other` on both axes.
    #[inline]
    pub fn is_multiple_of(self, other: Dim) -> bool {
        other.is_valid() && self.w % other.w == 0 && self.h % other.h == 0
    }

    #[inline]
    pub fn area(self) -> usize {
        (self.w.max(0) as usize) * (self.h.max(0) as usize)
    }
}

impl From<(i32, i32)> for Dim {
    #[inline]
    fn from((w, h): (i32, i32)) -> Self {
        Dim::new(w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_of_exact_division() {
        assert!(Dim::new(500, 500).is_multiple_of(Dim::new(100, 100)));
        assert!(Dim::new(200, 100).is_multiple_of(Dim::new(10, 50)));
    }

    #[test]
    fn multiple_of_rejects_remainder_and_zero() {
        assert!(!Dim::new(101, 10).is_multiple_of(Dim::new(10, 10)));
        assert!(!Dim::new(100, 100).is_multiple_of(Dim::new(0, 5)));
    }

    #[test]
    fn area_ignores_negative() {
        assert_eq!(Dim::new(3, 4).area(), 12);
        assert_eq!(Dim::new(-3, 4).area(), 0);
    }
}
