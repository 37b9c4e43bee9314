use crate::backend::{Backend, Target};
use crate::coords::{Dim, Point};
use crate::paint::Color;

use super::error::{PicoError, Result};
use super::Pico;

/// Requested window size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PhysicalSize {
    Keep,
    /// Size of the screen; the resulting size is reported back.
    Fullscreen,
    Exact(Dim),
}

/// Requested canvas size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalSize {
    Keep,
    Exact(Dim),
}

impl From<Dim> for PhysicalSize {
    fn from(d: Dim) -> Self {
        PhysicalSize::Exact(d)
    }
}

impl From<Dim> for LogicalSize {
    fn from(d: Dim) -> Self {
        LogicalSize::Exact(d)
    }
}

/// Window and canvas sizes in effect.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CanvasSize {
    pub physical: Dim,
    pub logical: Dim,
}

const GRID_COLOR: Color = Color::GRAY.with_alpha(0x77);

impl<B: Backend> Pico<B> {
    /// Resizes the window and/or the canvas, then presents.
    ///
    /// An explicit logical size reallocates the canvas (its contents are
    /// lost) and becomes the size the reset gesture returns to. Zero logical
    /// sizes, and explicit physical sizes that are not a multiple of an
    /// explicit logical size, are rejected before anything changes.
    pub fn set_size(&mut self, physical: PhysicalSize, logical: LogicalSize) -> Result<CanvasSize> {
        let size = self.resize(physical, logical)?;
        if let LogicalSize::Exact(l) = logical {
            self.base_logical = l;
        }
        Ok(size)
    }

    pub(super) fn resize(&mut self, physical: PhysicalSize, logical: LogicalSize) -> Result<CanvasSize> {
        self.ensure_active()?;
        validate(physical, logical, self.get_size())?;

        let physical = match physical {
            PhysicalSize::Keep => self.physical,
            PhysicalSize::Fullscreen => self
                .backend
                .enter_fullscreen()
                .map_err(PicoError::resource("cannot enter fullscreen"))?,
            PhysicalSize::Exact(p) => {
                self.backend
                    .resize_window(p)
                    .map_err(PicoError::resource("cannot resize window"))?;
                p
            }
        };
        self.physical = physical;

        if let LogicalSize::Exact(l) = logical {
            self.backend
                .create_canvas(l)
                .map_err(PicoError::resource("cannot create canvas"))?;
            self.backend.set_logical_size(l);
            self.backend.set_target(Target::Canvas);
            self.logical = l;
        }

        if self.physical.w == self.logical.w || self.physical.h == self.logical.h {
            self.state.grid = false;
        }

        log::debug!(
            "pico: size {}x{} / {}x{}",
            self.physical.w,
            self.physical.h,
            self.logical.w,
            self.logical.h
        );
        self.present()?;
        Ok(self.get_size())
    }

    /// Shows or hides the window. Showing presents.
    pub fn set_show(&mut self, on: bool) -> Result<()> {
        self.ensure_active()?;
        self.backend.set_visible(on);
        self.visible = on;
        if on {
            self.present()?;
        }
        Ok(())
    }

    /// Copies the canvas to the window, overlays the grid and shows the
    /// result. Ignores expert mode.
    pub fn present(&mut self) -> Result<()> {
        self.ensure_active()?;

        self.backend.set_target(Target::Window);
        self.backend.set_draw_color(Color::GRAY);
        self.backend.clear();
        self.backend.copy_canvas();
        if self.state.grid {
            self.draw_grid();
        }
        let shown = self.backend.present().map_err(PicoError::resource("cannot present"));

        self.backend.set_target(Target::Canvas);
        self.backend.set_draw_color(self.state.color.draw);
        shown
    }

    /// One line per logical cell boundary, in window pixels.
    fn draw_grid(&mut self) {
        let CanvasSize { physical, logical } = self.get_size();
        if !logical.is_valid() || !physical.is_valid() {
            return;
        }

        self.backend.set_draw_color(GRID_COLOR);
        for i in 0..=logical.w {
            let x = (i * physical.w / logical.w).min(physical.w - 1);
            self.backend.draw_line(
                Point::new(x, 0),
                Point::new(x, physical.h - 1),
            );
        }
        for j in 0..=logical.h {
            let y = (j * physical.h / logical.h).min(physical.h - 1);
            self.backend.draw_line(
                Point::new(0, y),
                Point::new(physical.w - 1, y),
            );
        }
    }
}

fn validate(physical: PhysicalSize, logical: LogicalSize, current: CanvasSize) -> Result<()> {
    let invalid = |reason| {
        let physical = match physical {
            PhysicalSize::Exact(p) => p,
            _ => current.physical,
        };
        let logical = match logical {
            LogicalSize::Exact(l) => l,
            LogicalSize::Keep => current.logical,
        };
        log::error!("pico: {reason}");
        Err(PicoError::InvalidSize { physical, logical, reason })
    };

    if let LogicalSize::Exact(l) = logical {
        if !l.is_valid() {
            return invalid("logical size must be positive");
        }
    }
    if let PhysicalSize::Exact(p) = physical {
        if !p.is_valid() {
            return invalid("physical size must be positive");
        }
        if let LogicalSize::Exact(l) = logical {
            if !p.is_multiple_of(l) {
                return invalid("physical size is not a multiple of logical size");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::pico;
    use crate::coords::{HAnchor, VAnchor};

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn zero_logical_is_rejected() {
        let mut p = pico();
        let err = p
            .set_size(PhysicalSize::Keep, LogicalSize::Exact(Dim::new(0, 5)))
            .unwrap_err();
        assert!(matches!(err, PicoError::InvalidSize { .. }));
        assert_eq!(p.get_size().logical, Dim::new(10, 10));
    }

    #[test]
    fn non_multiple_physical_is_rejected() {
        let mut p = pico();
        let err = p
            .set_size(Dim::new(101, 10).into(), Dim::new(10, 10).into())
            .unwrap_err();
        assert!(matches!(err, PicoError::InvalidSize { .. }));
        assert_eq!(p.backend().window_size(), Dim::new(20, 20));
    }

    #[test]
    fn keep_skips_divisibility_check() {
        let mut p = pico();
        let size = p.set_size(PhysicalSize::Keep, Dim::new(7, 7).into()).unwrap();
        assert_eq!(size, CanvasSize { physical: Dim::new(20, 20), logical: Dim::new(7, 7) });
    }

    // ── effects ───────────────────────────────────────────────────────────

    #[test]
    fn fullscreen_reports_screen_size() {
        let mut p = pico();
        p.backend_mut().set_screen(Dim::new(40, 30));
        let size = p.set_size(PhysicalSize::Fullscreen, LogicalSize::Keep).unwrap();
        assert_eq!(size.physical, Dim::new(40, 30));
        assert!(p.backend().is_fullscreen());
    }

    #[test]
    fn one_to_one_scale_disables_grid() {
        let mut p = pico();
        assert!(p.state().grid);
        p.set_size(Dim::new(10, 20).into(), Dim::new(10, 10).into()).unwrap();
        assert!(!p.state().grid);
    }

    #[test]
    fn set_size_presents() {
        let mut p = pico();
        let before = p.backend().stats().presents;
        p.set_size(PhysicalSize::Keep, LogicalSize::Keep).unwrap();
        assert_eq!(p.backend().stats().presents, before + 1);
    }

    #[test]
    fn show_presents_and_hide_does_not() {
        let mut p = pico();
        let before = p.backend().stats().presents;
        p.set_show(false).unwrap();
        assert_eq!(p.backend().stats().presents, before);
        assert!(!p.backend().is_visible());

        p.set_show(true).unwrap();
        assert_eq!(p.backend().stats().presents, before + 1);
    }

    // ── present ───────────────────────────────────────────────────────────

    #[test]
    fn present_scales_canvas_and_draws_grid() {
        let mut p = pico();
        p.set_expert(true);
        p.set_color_draw(Color::RED);
        p.set_anchor(crate::coords::Anchor::new(HAnchor::Left, VAnchor::Top));
        p.draw_pixel(Point::new(4, 4)).unwrap();
        p.present().unwrap();

        let frame = p.backend().last_frame().unwrap();
        // Pixel (4,4) covers window pixels 8..10; grid lines sit on even columns.
        assert_eq!(frame.get(9, 9), Some(Color::RED));
        assert_ne!(frame.get(8, 8), Some(Color::RED));
        assert_ne!(frame.get(1, 1), Some(Color::RED));
    }

    #[test]
    fn present_without_grid_shows_plain_canvas() {
        let mut p = pico();
        p.set_grid(false);
        p.set_color_clear(Color::BLUE);
        p.clear().unwrap();

        let frame = p.backend().last_frame().unwrap();
        assert!(frame.pixels().iter().all(|&c| c == Color::BLUE));
    }
}
