use anyhow::{ensure, Result};

use crate::coords::{Dim, Point, Rect};
use crate::paint::Color;

/// Owned RGBA pixel buffer, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    dim: Dim,
    data: Vec<Color>,
}

impl Pixmap {
    /// Allocates a transparent pixmap. Zero-area pixmaps are allowed.
    pub fn new(dim: Dim) -> Result<Self> {
        ensure!(dim.w >= 0 && dim.h >= 0, "negative pixmap size {}x{}", dim.w, dim.h);

        let mut data = Vec::new();
        data.try_reserve_exact(dim.area())
            .map_err(|e| anyhow::anyhow!("cannot allocate {}x{} pixmap: {e}", dim.w, dim.h))?;
        data.resize(dim.area(), Color::TRANSPARENT);

        Ok(Self { dim, data })
    }

    /// Wraps existing pixels; `data.len()` must equal the area.
    pub fn from_pixels(dim: Dim, data: Vec<Color>) -> Result<Self> {
        ensure!(
            dim.w >= 0 && dim.h >= 0 && data.len() == dim.area(),
            "pixel count {} does not match {}x{}",
            data.len(),
            dim.w,
            dim.h
        );
        Ok(Self { dim, data })
    }

    #[inline]
    pub fn dim(&self) -> Dim {
        self.dim
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_dim(Point::zero(), self.dim)
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.data
    }

    /// Pixels as packed RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.dim.w || y >= self.dim.h {
            None
        } else {
            Some(y as usize * self.dim.w as usize + x as usize)
        }
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Replaces a pixel; out-of-bounds writes are dropped.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, c: Color) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = c;
        }
    }

    /// Blends a pixel over the existing one; out-of-bounds writes are dropped.
    #[inline]
    pub fn blend(&mut self, x: i32, y: i32, c: Color) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = c.over(self.data[i]);
        }
    }

    pub fn fill(&mut self, c: Color) {
        self.data.fill(c);
    }

    pub fn fill_rect(&mut self, rect: Rect, c: Color) {
        let Some(r) = rect.intersect(self.bounds()) else {
            return;
        };
        for y in r.y..r.y + r.h {
            for x in r.x..r.x + r.w {
                self.blend(x, y, c);
            }
        }
    }

    /// One-pixel outline inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, c: Color) {
        let (x0, y0, x1, y1) = rect.edges();
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let (x1, y1) = (x1 - 1, y1 - 1);
        self.hspan(x0, x1, y0, c);
        if y1 != y0 {
            self.hspan(x0, x1, y1, c);
        }
        self.vspan(x0, y0 + 1, y1 - 1, c);
        if x1 != x0 {
            self.vspan(x1, y0 + 1, y1 - 1, c);
        }
    }

    /// Inclusive horizontal run, clipped to the pixmap.
    fn hspan(&mut self, x0: i64, x1: i64, y: i64, c: Color) {
        let (w, h) = (i64::from(self.dim.w), i64::from(self.dim.h));
        if y < 0 || y >= h {
            return;
        }
        for x in x0.max(0)..=x1.min(w - 1) {
            self.blend(x as i32, y as i32, c);
        }
    }

    /// Inclusive vertical run, clipped to the pixmap.
    fn vspan(&mut self, x: i64, y0: i64, y1: i64, c: Color) {
        let (w, h) = (i64::from(self.dim.w), i64::from(self.dim.h));
        if x < 0 || x >= w {
            return;
        }
        for y in y0.max(0)..=y1.min(h - 1) {
            self.blend(x as i32, y as i32, c);
        }
    }

    /// Bresenham line, both endpoints included. The segment is clipped to
    /// the pixmap first, so far-off endpoints cost nothing.
    pub fn line(&mut self, a: Point, b: Point, c: Color) {
        let Some((a, b)) = clip_segment(a, b, self.bounds()) else {
            return;
        };
        let (ax, ay, bx, by) = (i64::from(a.x), i64::from(a.y), i64::from(b.x), i64::from(b.y));

        let dx = (bx - ax).abs();
        let dy = -(by - ay).abs();
        let sx = if ax < bx { 1 } else { -1 };
        let sy = if ay < by { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (ax, ay);

        loop {
            self.blend(x as i32, y as i32, c);
            if x == bx && y == by {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn fill_oval(&mut self, rect: Rect, c: Color) {
        let Some(visible) = rect.intersect(self.bounds()) else {
            return;
        };
        let oval = Oval::inscribed(rect);
        for y in visible.y..visible.y + visible.h {
            for x in visible.x..visible.x + visible.w {
                if oval.contains(x, y) {
                    self.blend(x, y, c);
                }
            }
        }
    }

    /// Pixels inside the ellipse with at least one 4-neighbour outside it.
    pub fn stroke_oval(&mut self, rect: Rect, c: Color) {
        let Some(visible) = rect.intersect(self.bounds()) else {
            return;
        };
        let oval = Oval::inscribed(rect);
        for y in visible.y..visible.y + visible.h {
            for x in visible.x..visible.x + visible.w {
                if oval.contains(x, y) && !oval.is_interior(x, y) {
                    self.blend(x, y, c);
                }
            }
        }
    }

    /// Nearest-neighbour scaled copy of `src_rect` of `src` onto `dst_rect`,
    /// blended over the existing pixels.
    pub fn draw_pixmap(&mut self, src: &Pixmap, src_rect: Rect, dst_rect: Rect) {
        let Some(src_rect) = src_rect.intersect(src.bounds()) else {
            return;
        };
        let Some(visible) = dst_rect.intersect(self.bounds()) else {
            return;
        };
        let (dx0, dy0, dx1, dy1) = dst_rect.edges();
        let (dw, dh) = (dx1 - dx0, dy1 - dy0);
        let (sx0, sy0) = (i64::from(src_rect.x), i64::from(src_rect.y));
        let (sw, sh) = (i64::from(src_rect.w), i64::from(src_rect.h));

        for y in visible.y..visible.y + visible.h {
            let sy = sy0 + (i64::from(y) - dy0) * sh / dh;
            for x in visible.x..visible.x + visible.w {
                let sx = sx0 + (i64::from(x) - dx0) * sw / dw;
                if let Some(c) = src.get(sx as i32, sy as i32) {
                    self.blend(x, y, c);
                }
            }
        }
    }
}

/// Ellipse inscribed in a rectangle; pixels are tested by their centers.
#[derive(Debug, Copy, Clone)]
struct Oval {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

impl Oval {
    fn inscribed(rect: Rect) -> Self {
        let (x0, y0, x1, y1) = rect.edges();
        let (rx, ry) = ((x1 - x0) as f64 / 2.0, (y1 - y0) as f64 / 2.0);
        Self { cx: x0 as f64 + rx, cy: y0 as f64 + ry, rx, ry }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return false;
        }
        let dx = (f64::from(x) + 0.5 - self.cx) / self.rx;
        let dy = (f64::from(y) + 0.5 - self.cy) / self.ry;
        dx * dx + dy * dy <= 1.0
    }

    /// Inside along with all four neighbours.
    fn is_interior(&self, x: i32, y: i32) -> bool {
        self.contains(x - 1, y)
            && self.contains(x + 1, y)
            && self.contains(x, y - 1)
            && self.contains(x, y + 1)
    }
}

/// Liang–Barsky clip of segment `a`–`b` against the pixel centers of
/// `bounds`. Segments fully inside are returned untouched.
fn clip_segment(a: Point, b: Point, bounds: Rect) -> Option<(Point, Point)> {
    if bounds.is_empty() {
        return None;
    }
    if bounds.contains(a) && bounds.contains(b) {
        return Some((a, b));
    }

    let (x0, y0) = (f64::from(a.x), f64::from(a.y));
    let (dx, dy) = (f64::from(b.x) - x0, f64::from(b.y) - y0);
    let (xmin, ymin) = (f64::from(bounds.x), f64::from(bounds.y));
    let xmax = xmin + f64::from(bounds.w) - 1.0;
    let ymax = ymin + f64::from(bounds.h) - 1.0;

    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [(-dx, x0 - xmin), (dx, xmax - x0), (-dy, y0 - ymin), (dy, ymax - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }

    let at = |t: f64| {
        let x = (x0 + t * dx).round().clamp(xmin, xmax);
        let y = (y0 + t * dy).round().clamp(ymin, ymax);
        Point::new(x as i32, y as i32)
    };
    Some((at(t0), at(t1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pm(w: i32, h: i32) -> Pixmap {
        Pixmap::new(Dim::new(w, h)).unwrap()
    }

    fn count(p: &Pixmap, c: Color) -> usize {
        p.pixels().iter().filter(|&&px| px == c).count()
    }

    // ── rects ─────────────────────────────────────────────────────────────

    #[test]
    fn fill_rect_is_clipped() {
        let mut p = pm(4, 4);
        p.fill_rect(Rect::new(-2, -2, 4, 4), Color::RED);
        assert_eq!(count(&p, Color::RED), 4);
        assert_eq!(p.get(1, 1), Some(Color::RED));
        assert_eq!(p.get(2, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn stroke_rect_draws_outline_only() {
        let mut p = pm(5, 5);
        p.stroke_rect(Rect::new(0, 0, 5, 5), Color::WHITE);
        assert_eq!(count(&p, Color::WHITE), 16);
        assert_eq!(p.get(2, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn stroke_unit_rect_is_one_pixel() {
        let mut p = pm(3, 3);
        p.stroke_rect(Rect::new(1, 1, 1, 1), Color::WHITE);
        assert_eq!(count(&p, Color::WHITE), 1);
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn line_includes_both_endpoints() {
        let mut p = pm(10, 10);
        p.line(Point::new(1, 1), Point::new(8, 1), Color::WHITE);
        assert_eq!(count(&p, Color::WHITE), 8);
        p.line(Point::new(0, 0), Point::new(9, 9), Color::RED);
        assert_eq!(p.get(0, 0), Some(Color::RED));
        assert_eq!(p.get(9, 9), Some(Color::RED));
    }

    #[test]
    fn far_off_line_is_clipped() {
        let mut p = pm(10, 10);
        p.line(Point::new(-1_500_000_000, 0), Point::new(1_500_000_000, 0), Color::WHITE);
        assert_eq!(count(&p, Color::WHITE), 10);

        p.line(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX), Color::RED);
        assert_eq!(p.get(5, 5), Some(Color::RED));

        let before = p.clone();
        p.line(Point::new(-50, 20), Point::new(50, 20), Color::BLUE);
        assert_eq!(p, before);
    }

    #[test]
    fn partially_visible_line_keeps_its_row() {
        let mut p = pm(10, 10);
        p.line(Point::new(-5, 3), Point::new(4, 3), Color::WHITE);
        assert_eq!(count(&p, Color::WHITE), 5);
        assert_eq!(p.get(4, 3), Some(Color::WHITE));
    }

    #[test]
    fn huge_stroke_rect_only_touches_visible_edges() {
        let mut p = pm(4, 4);
        p.stroke_rect(Rect::new(-100_000, -100_000, 200_000, 200_000), Color::WHITE);
        assert_eq!(count(&p, Color::WHITE), 0);

        p.stroke_rect(Rect::new(-1_000, 1, 100_000, 2), Color::WHITE);
        assert_eq!(count(&p, Color::WHITE), 8);
    }

    // ── ovals ─────────────────────────────────────────────────────────────

    #[test]
    fn huge_oval_is_clipped_to_the_pixmap() {
        let mut p = pm(4, 4);
        p.fill_oval(Rect::new(-50_000, -50_000, 100_000, 100_000), Color::WHITE);
        assert_eq!(count(&p, Color::WHITE), 16);

        let mut q = pm(4, 4);
        q.stroke_oval(Rect::new(-50_000, -50_000, 100_000, 100_000), Color::WHITE);
        assert_eq!(count(&q, Color::WHITE), 0);
    }

    #[test]
    fn filled_oval_covers_center_not_corners() {
        let mut p = pm(10, 10);
        p.fill_oval(Rect::new(0, 0, 10, 10), Color::WHITE);
        assert_eq!(p.get(5, 5), Some(Color::WHITE));
        assert_eq!(p.get(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(p.get(9, 9), Some(Color::TRANSPARENT));
    }

    #[test]
    fn stroked_oval_is_hollow() {
        let mut p = pm(10, 10);
        p.stroke_oval(Rect::new(0, 0, 10, 10), Color::WHITE);
        assert_eq!(p.get(5, 5), Some(Color::TRANSPARENT));
        assert_eq!(p.get(5, 0), Some(Color::WHITE));
        assert_eq!(p.get(0, 5), Some(Color::WHITE));
    }

    // ── copies ────────────────────────────────────────────────────────────

    #[test]
    fn draw_pixmap_scales_up_by_integer_factor() {
        let mut src = pm(2, 1);
        src.put(0, 0, Color::RED);
        src.put(1, 0, Color::BLUE);

        let mut dst = pm(4, 2);
        dst.draw_pixmap(&src, src.bounds(), dst.bounds());
        assert_eq!(dst.get(0, 0), Some(Color::RED));
        assert_eq!(dst.get(1, 1), Some(Color::RED));
        assert_eq!(dst.get(2, 0), Some(Color::BLUE));
        assert_eq!(dst.get(3, 1), Some(Color::BLUE));
    }

    #[test]
    fn draw_pixmap_blends_transparent_source() {
        let src = pm(2, 2);
        let mut dst = pm(2, 2);
        dst.fill(Color::GRAY);
        dst.draw_pixmap(&src, src.bounds(), dst.bounds());
        assert_eq!(count(&dst, Color::GRAY), 4);
    }

    #[test]
    fn bytes_are_row_major_rgba() {
        let mut p = pm(2, 1);
        p.put(1, 0, Color::rgba(1, 2, 3, 4));
        assert_eq!(p.as_bytes(), &[0, 0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn from_pixels_checks_length() {
        assert!(Pixmap::from_pixels(Dim::new(2, 2), vec![Color::RED; 3]).is_err());
        assert!(Pixmap::from_pixels(Dim::new(2, 2), vec![Color::RED; 4]).is_ok());
    }
}
