use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Dim;
use crate::paint::Color;

use super::builtin;
use super::pixmap::Pixmap;

/// Font owned by the software renderer.
pub enum SoftFont {
    /// Built-in 8×8 glyphs scaled to `height`; cells are square.
    Builtin { height: i32 },
    /// TrueType/OpenType outlines rasterized by fontdue at `height` px.
    Outline { font: fontdue::Font, height: i32 },
}

impl std::fmt::Debug for SoftFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoftFont::Builtin { height } => write!(f, "SoftFont::Builtin({height}px)"),
            SoftFont::Outline { height, .. } => write!(f, "SoftFont::Outline({height}px)"),
        }
    }
}

impl SoftFont {
    pub fn builtin(height: i32) -> Result<Self> {
        ensure!(height > 0, "font height must be positive, got {height}");
        Ok(SoftFont::Builtin { height })
    }

    /// Parses a font file.
    pub fn open(path: &Path, height: i32) -> Result<Self> {
        ensure!(height > 0, "font height must be positive, got {height}");
        let bytes = std::fs::read(path)
            .with_context(|| format!("cannot read font {}", path.display()))?;
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| anyhow::anyhow!("cannot parse font {}: {e}", path.display()))?;
        Ok(SoftFont::Outline { font, height })
    }

    #[inline]
    pub fn height(&self) -> i32 {
        match self {
            SoftFont::Builtin { height } | SoftFont::Outline { height, .. } => *height,
        }
    }

    /// Rasterizes `text` in `color` on a transparent background.
    pub fn render(&self, text: &str, color: Color) -> Result<Pixmap> {
        match self {
            SoftFont::Builtin { height } => render_builtin(*height, text, color),
            SoftFont::Outline { font, height } => render_outline(font, *height, text, color),
        }
    }
}

fn render_builtin(height: i32, text: &str, color: Color) -> Result<Pixmap> {
    let cell = height;
    let width = i32::try_from(text.chars().count())
        .ok()
        .and_then(|count| count.checked_mul(cell));
    let Some(width) = width else {
        bail!("text of {} chars at {cell}px is too wide to render", text.chars().count());
    };
    let mut out = Pixmap::new(Dim::new(width, cell))?;

    for (n, ch) in text.chars().enumerate() {
        let rows = builtin::glyph(ch);
        let x0 = n as i32 * cell;
        for y in 0..cell {
            let bits = rows[(y * builtin::GLYPH_SIZE / cell) as usize];
            for x in 0..cell {
                let col = x * builtin::GLYPH_SIZE / cell;
                if (bits >> (7 - col)) & 1 != 0 {
                    out.put(x0 + x, y, color);
                }
            }
        }
    }
    Ok(out)
}

fn render_outline(font: &fontdue::Font, height: i32, text: &str, color: Color) -> Result<Pixmap> {
    let px = height as f32;

    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &TextStyle::new(text, px, 0));

    let glyphs = layout.glyphs();

    // Pen position after each glyph, so trailing spaces count toward the width.
    let w = glyphs
        .iter()
        .map(|g| {
            let m = font.metrics_indexed(g.key.glyph_index, px);
            (g.x - m.xmin as f32 + m.advance_width).max(g.x + g.width as f32)
        })
        .fold(0.0f32, f32::max)
        .ceil() as i32;
    let h = layout.height().max(px).ceil() as i32;

    let mut out = Pixmap::new(Dim::new(w, h))?;
    for g in glyphs {
        if g.width == 0 || g.height == 0 {
            continue;
        }
        let (_, coverage) = font.rasterize_config(g.key);
        let (gx, gy) = (g.x.round() as i32, g.y.round() as i32);
        for (i, &cov) in coverage.iter().enumerate() {
            if cov == 0 {
                continue;
            }
            let x = gx + (i % g.width) as i32;
            let y = gy + (i / g.width) as i32;
            let a = (u32::from(cov) * u32::from(color.a) / 255) as u8;
            out.blend(x, y, color.with_alpha(a));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_size_is_height_per_char() {
        let f = SoftFont::builtin(10).unwrap();
        let p = f.render("abc", Color::WHITE).unwrap();
        assert_eq!(p.dim(), Dim::new(30, 10));
    }

    #[test]
    fn builtin_glyph_uses_color() {
        let f = SoftFont::builtin(8).unwrap();
        let p = f.render("!", Color::RED).unwrap();
        // '!' has its stem in columns 3..=4 of row 0.
        assert_eq!(p.get(3, 0), Some(Color::RED));
        assert_eq!(p.get(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn empty_text_has_zero_width() {
        let f = SoftFont::builtin(8).unwrap();
        assert_eq!(f.render("", Color::WHITE).unwrap().dim(), Dim::new(0, 8));
    }

    #[test]
    fn overflowing_text_width_is_an_error() {
        let f = SoftFont::builtin(i32::MAX / 2).unwrap();
        let err = f.render("abc", Color::WHITE).unwrap_err();
        assert!(err.to_string().contains("too wide"));
    }

    #[test]
    fn non_positive_height_is_rejected() {
        assert!(SoftFont::builtin(0).is_err());
    }

    #[test]
    fn missing_font_file_is_an_error() {
        assert!(SoftFont::open(Path::new("/nonexistent/font.ttf"), 12).is_err());
    }
}
