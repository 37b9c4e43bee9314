use crate::coords::{Dim, Point, Rect};

/// Crop and size applied by `draw_image`.
///
/// A crop with zero width or height selects the whole source; any other crop
/// is clipped to the image, and one that misses it entirely draws nothing.
/// A size with
/// both components zero draws at the (cropped) natural size; a single zero
/// component is derived from the other one, keeping the aspect ratio.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ImageState {
    pub crop: Rect,
    pub size: Dim,
}

impl ImageState {
    /// Source rectangle to copy from a texture of size `natural`, `None` for
    /// the whole texture.
    pub fn source(&self, natural: Dim) -> Option<Rect> {
        if self.crop.w == 0 || self.crop.h == 0 {
            return None;
        }
        let image = Rect::from_pos_dim(Point::zero(), natural);
        Some(self.crop.intersect(image).unwrap_or_default())
    }

    /// Size the image is drawn at, given the texture's natural size.
    pub fn target(&self, natural: Dim) -> Dim {
        let base = self.source(natural).map(|r| r.dim()).unwrap_or(natural);
        match (self.size.w, self.size.h) {
            (0, 0) => base,
            (0, h) if base.h != 0 => Dim::new(base.w * h / base.h, h),
            (w, 0) if base.w != 0 => Dim::new(w, base.h * w / base.w),
            (w, h) => Dim::new(w, h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_natural_size_full_source() {
        let img = ImageState::default();
        assert_eq!(img.source(Dim::new(40, 20)), None);
        assert_eq!(img.target(Dim::new(40, 20)), Dim::new(40, 20));
    }

    #[test]
    fn single_zero_component_keeps_aspect() {
        let img = ImageState { size: Dim::new(0, 10), ..Default::default() };
        assert_eq!(img.target(Dim::new(40, 20)), Dim::new(20, 10));

        let img = ImageState { size: Dim::new(10, 0), ..Default::default() };
        assert_eq!(img.target(Dim::new(40, 20)), Dim::new(10, 5));
    }

    #[test]
    fn crop_defines_natural_size() {
        let img = ImageState { crop: Rect::new(5, 5, 8, 4), size: Dim::zero() };
        assert_eq!(img.source(Dim::new(40, 20)), Some(Rect::new(5, 5, 8, 4)));
        assert_eq!(img.target(Dim::new(40, 20)), Dim::new(8, 4));
    }

    #[test]
    fn crop_with_zero_height_is_full_source() {
        let img = ImageState { crop: Rect::new(5, 5, 8, 0), size: Dim::zero() };
        assert_eq!(img.source(Dim::new(40, 20)), None);
    }

    #[test]
    fn crop_past_the_edge_is_clipped() {
        let img = ImageState { crop: Rect::new(30, 10, 20, 20), size: Dim::zero() };
        assert_eq!(img.source(Dim::new(40, 20)), Some(Rect::new(30, 10, 10, 10)));
        assert_eq!(img.target(Dim::new(40, 20)), Dim::new(10, 10));

        let scaled = ImageState { size: Dim::new(20, 0), ..img };
        assert_eq!(scaled.target(Dim::new(40, 20)), Dim::new(20, 20));
    }

    #[test]
    fn crop_outside_the_image_draws_nothing() {
        let img = ImageState { crop: Rect::new(50, 50, 5, 5), size: Dim::zero() };
        assert_eq!(img.source(Dim::new(40, 20)).map(|r| r.is_empty()), Some(true));
        assert_eq!(img.target(Dim::new(40, 20)), Dim::zero());
    }
}
