use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA color, one byte per channel.
///
/// `repr(C)` so pixel buffers can be handed to the GPU upload path as bytes
/// without copying.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0x00, 0x00, 0x00, 0x00);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const GRAY: Color = Color::rgb(0x77, 0x77, 0x77);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xFF, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);
    pub const YELLOW: Color = Color::rgb(0xFF, 0xFF, 0x00);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Blends `self` over `dst`:
    /// `rgb = src*a + dst*(1-a)`, `alpha = a + dst_a*(1-a)`.
    #[inline]
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            0xFF => self,
            0x00 => dst,
            a => {
                let a = u32::from(a);
                let inv = 255 - a;
                let mix = |s: u8, d: u8| ((u32::from(s) * a + u32::from(d) * inv + 127) / 255) as u8;
                Color {
                    r: mix(self.r, dst.r),
                    g: mix(self.g, dst.g),
                    b: mix(self.b, dst.b),
                    a: (a + (u32::from(dst.a) * inv + 127) / 255) as u8,
                }
            }
        }
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    #[inline]
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_source_replaces() {
        assert_eq!(Color::RED.over(Color::BLUE), Color::RED);
    }

    #[test]
    fn transparent_source_keeps_destination() {
        assert_eq!(Color::TRANSPARENT.over(Color::BLUE), Color::BLUE);
    }

    #[test]
    fn half_alpha_mixes() {
        let c = Color::WHITE.with_alpha(128).over(Color::BLACK);
        assert_eq!(c.r, 128);
        assert_eq!(c.a, 255);
    }

    #[test]
    fn bytes_layout_is_rgba() {
        let px = [Color::rgba(1, 2, 3, 4)];
        assert_eq!(bytemuck::cast_slice::<Color, u8>(&px), &[1, 2, 3, 4]);
    }
}
