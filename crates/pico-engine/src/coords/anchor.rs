use super::{Dim, Point, Rect};

/// Horizontal anchor: which part of a shape the x argument designates.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum HAnchor {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical anchor: which part of a shape the y argument designates.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum VAnchor {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Anchor pair. Defaults to `Center`/`Middle`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub h: HAnchor,
    pub v: VAnchor,
}

impl Anchor {
    #[inline]
    pub const fn new(h: HAnchor, v: VAnchor) -> Self {
        Self { h, v }
    }

    /// Extent a single point is anchored with.
    ///
    /// A pixel is a 1×1 box, so `Right`/`Bottom` place it one unit
    /// left/up of the reference position (its far edge lands on it).
    pub const POINT: Dim = Dim::new(1, 1);

    /// Offset from the reference position to the shape's top-left corner.
    #[inline]
    pub fn offset(self, extent: Dim) -> Point {
        let dx = match self.h {
            HAnchor::Left => 0,
            HAnchor::Center => extent.w / 2,
            HAnchor::Right => extent.w,
        };
        let dy = match self.v {
            VAnchor::Top => 0,
            VAnchor::Middle => extent.h / 2,
            VAnchor::Bottom => extent.h,
        };
        Point::new(dx, dy)
    }
}

/// Maps a logical reference position and extent to the device-space top-left
/// corner, then subtracts the pan offset.
#[inline]
pub fn anchor_pos(pos: Point, extent: Dim, anchor: Anchor, pan: Point) -> Point {
    pos - anchor.offset(extent) - pan
}

/// [`anchor_pos`] applied to a rectangle; the extent is kept.
#[inline]
pub fn anchor_rect(rect: Rect, anchor: Anchor, pan: Point) -> Rect {
    Rect::from_pos_dim(anchor_pos(rect.pos(), rect.dim(), anchor, pan), rect.dim())
}

/// Position at `pct` percent (0–100 per axis) of a canvas of size `canvas`,
/// measured from its top-left corner.
#[inline]
pub fn pct_to_pos(canvas: Dim, pct: Point) -> Point {
    Point::new(canvas.w * pct.x / 100, canvas.h * pct.y / 100)
}

/// Position at `pct` percent of `rect`, measured from the rectangle's origin
/// as resolved by `anchor` (pan is not applied).
///
/// With the default `Center`/`Middle` anchor this is
/// `center - extent/2 + extent*pct/100`.
#[inline]
pub fn pct_to_pos_in(rect: Rect, pct: Point, anchor: Anchor) -> Point {
    let origin = anchor_pos(rect.pos(), rect.dim(), anchor, Point::zero());
    origin + pct_to_pos(rect.dim(), pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_H: [HAnchor; 3] = [HAnchor::Left, HAnchor::Center, HAnchor::Right];
    const ALL_V: [VAnchor; 3] = [VAnchor::Top, VAnchor::Middle, VAnchor::Bottom];

    // ── anchor_pos ────────────────────────────────────────────────────────

    #[test]
    fn center_middle_origin_box() {
        let p = anchor_pos(Point::zero(), Dim::new(10, 10), Anchor::default(), Point::zero());
        assert_eq!(p, Point::new(-5, -5));
    }

    #[test]
    fn piecewise_formula_holds_for_every_anchor() {
        let pos = Point::new(37, -12);
        let ext = Dim::new(9, 14);
        let pan = Point::new(3, -7);

        for h in ALL_H {
            for v in ALL_V {
                let x = match h {
                    HAnchor::Left => pos.x,
                    HAnchor::Center => pos.x - ext.w / 2,
                    HAnchor::Right => pos.x - ext.w,
                };
                let y = match v {
                    VAnchor::Top => pos.y,
                    VAnchor::Middle => pos.y - ext.h / 2,
                    VAnchor::Bottom => pos.y - ext.h,
                };
                let got = anchor_pos(pos, ext, Anchor::new(h, v), pan);
                assert_eq!(got, Point::new(x - pan.x, y - pan.y), "{h:?}/{v:?}");
            }
        }
    }

    #[test]
    fn identical_inputs_identical_outputs() {
        let a = Anchor::new(HAnchor::Right, VAnchor::Top);
        let first = anchor_pos(Point::new(4, 4), Dim::new(7, 3), a, Point::new(1, 1));
        for _ in 0..10 {
            assert_eq!(anchor_pos(Point::new(4, 4), Dim::new(7, 3), a, Point::new(1, 1)), first);
        }
    }

    #[test]
    fn point_uses_unit_box() {
        let p = Point::new(5, 5);
        let at = |h, v| anchor_pos(p, Anchor::POINT, Anchor::new(h, v), Point::zero());

        assert_eq!(at(HAnchor::Left, VAnchor::Top), Point::new(5, 5));
        assert_eq!(at(HAnchor::Center, VAnchor::Middle), Point::new(5, 5));
        assert_eq!(at(HAnchor::Right, VAnchor::Bottom), Point::new(4, 4));
    }

    #[test]
    fn pan_is_subtracted() {
        let a = Anchor::new(HAnchor::Left, VAnchor::Top);
        let r = anchor_rect(Rect::new(10, 10, 4, 4), a, Point::new(5, -5));
        assert_eq!(r, Rect::new(5, 15, 4, 4));
    }

    // ── percent helpers ───────────────────────────────────────────────────

    #[test]
    fn pct_in_centered_rect() {
        let r = Rect::new(0, 0, 100, 100);
        let a = Anchor::default();
        assert_eq!(pct_to_pos_in(r, Point::new(50, 50), a), Point::new(0, 0));
        assert_eq!(pct_to_pos_in(r, Point::new(0, 0), a), Point::new(-50, -50));
        assert_eq!(pct_to_pos_in(r, Point::new(100, 100), a), Point::new(50, 50));
    }

    #[test]
    fn pct_in_left_top_rect_starts_at_rect_pos() {
        let r = Rect::new(10, 20, 40, 80);
        let a = Anchor::new(HAnchor::Left, VAnchor::Top);
        assert_eq!(pct_to_pos_in(r, Point::new(25, 50), a), Point::new(20, 60));
    }

    #[test]
    fn pct_of_canvas() {
        let c = Dim::new(100, 60);
        assert_eq!(pct_to_pos(c, Point::new(50, 50)), Point::new(50, 30));
        assert_eq!(pct_to_pos(c, Point::new(0, 100)), Point::new(0, 60));
    }
}
