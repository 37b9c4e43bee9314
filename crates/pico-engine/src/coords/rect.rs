use super::{Dim, Point};

/// Axis-aligned integer rectangle.
///
/// What `pos` means depends on the caller: for draw arguments it is the anchor
/// reference point, after the anchor transform it is the top-left corner.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub const fn from_pos_dim(pos: Point, dim: Dim) -> Self {
        Self { x: pos.x, y: pos.y, w: dim.w, h: dim.h }
    }

    #[inline]
    pub fn pos(self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn dim(self) -> Dim {
        Dim::new(self.w, self.h)
    }

    #[inline]
    pub fn max(self) -> Point {
        Point::new(self.x + self.w, self.y + self.h)
    }

    /// Zero or negative extent on either axis.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut r = self;
        if r.w < 0 {
            r.x += r.w;
            r.w = -r.w;
        }
        if r.h < 0 {
            r.y += r.h;
            r.h = -r.h;
        }
        r
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        let r = self.normalized();
        p.x >= r.x && p.y >= r.y && p.x < r.x + r.w && p.y < r.y + r.h
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let (ax0, ay0, ax1, ay1) = self.edges();
        let (bx0, by0, bx1, by1) = other.edges();

        let (x0, y0) = (ax0.max(bx0), ay0.max(by0));
        let (x1, y1) = (ax1.min(bx1), ay1.min(by1));

        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(
            i32::try_from(x0).ok()?,
            i32::try_from(y0).ok()?,
            i32::try_from(x1 - x0).ok()?,
            i32::try_from(y1 - y0).ok()?,
        ))
    }

    /// Normalized edges `(left, top, right, bottom)`, right and bottom
    /// exclusive. Widened so extreme positions and extents cannot overflow.
    #[inline]
    pub fn edges(self) -> (i64, i64, i64, i64) {
        let span = |p: i32, len: i32| {
            let (p, len) = (i64::from(p), i64::from(len));
            if len < 0 { (p + len, p) } else { (p, p + len) }
        };
        let (x0, x1) = span(self.x, self.w);
        let (y0, y1) = span(self.y, self.h);
        (x0, y0, x1, y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: i32, h: i32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1, 2, 10, 20);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_extent() {
        assert_eq!(r(10, 0, -4, 5).normalized(), r(6, 0, 4, 5));
        assert_eq!(r(0, 10, 5, -3).normalized(), r(0, 7, 5, 3));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0, 0, 10, 10).contains(Point::new(0, 0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0, 0, 10, 10).contains(Point::new(10, 10)));
        assert!(r(0, 0, 10, 10).contains(Point::new(9, 9)));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        assert_eq!(r(0, 0, 10, 10).intersect(r(5, 5, 10, 10)), Some(r(5, 5, 5, 5)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        assert!(r(0, 0, 10, 10).intersect(r(10, 0, 10, 10)).is_none());
    }

    #[test]
    fn intersect_handles_extreme_extents() {
        let bounds = r(0, 0, 100, 100);
        assert_eq!(r(i32::MIN, 50, i32::MAX, 10).intersect(bounds), None);
        assert_eq!(r(-5, -5, i32::MAX, i32::MAX).intersect(bounds), Some(bounds));
        assert_eq!(r(i32::MAX, 0, i32::MIN, 1).intersect(bounds), Some(r(0, 0, 100, 1)));
    }

    #[test]
    fn edges_of_negative_extent() {
        assert_eq!(r(10, 0, -4, 5).edges(), (6, 0, 10, 5));
    }

    #[test]
    fn intersect_clips_to_bounds() {
        let bounds = r(0, 0, 100, 100);
        assert_eq!(r(-5, 90, 20, 20).intersect(bounds), Some(r(0, 90, 15, 10)));
    }
}
