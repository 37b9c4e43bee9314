use std::path::Path;

use crate::backend::Backend;
use crate::coords::{Anchor, Dim, Point, Rect};
use crate::paint::Color;
use crate::state::{FontSpec, Style};

use super::error::Result;
use super::size::{LogicalSize, PhysicalSize};
use super::Pico;

/// State change, as accepted by [`Pico::set`].
#[derive(Debug, Clone, PartialEq)]
pub enum SetCommand {
    Anchor(Anchor),
    ColorClear(Color),
    ColorDraw(Color),
    Cursor(Point),
    Expert(bool),
    Font(FontSpec),
    Grid(bool),
    ImageCrop(Rect),
    ImageSize(Dim),
    Pan(Point),
    Size(PhysicalSize, LogicalSize),
    Show(bool),
    Style(Style),
    Title(String),
}

/// Drawing operation, as accepted by [`Pico::draw`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawCommand<'a> {
    Pixel(Point),
    Pixels(&'a [Point]),
    Line(Point, Point),
    Rect(Rect),
    Oval(Rect),
    Text(Point, &'a str),
    Image(Point, &'a Path),
}

impl<B: Backend> Pico<B> {
    pub fn set(&mut self, cmd: SetCommand) -> Result<()> {
        match cmd {
            SetCommand::Anchor(a) => self.set_anchor(a),
            SetCommand::ColorClear(c) => self.set_color_clear(c),
            SetCommand::ColorDraw(c) => self.set_color_draw(c),
            SetCommand::Cursor(p) => self.set_cursor(p),
            SetCommand::Expert(on) => self.set_expert(on),
            SetCommand::Font(spec) => self.set_font(spec)?,
            SetCommand::Grid(on) => self.set_grid(on),
            SetCommand::ImageCrop(r) => self.set_image_crop(r),
            SetCommand::ImageSize(d) => self.set_image_size(d),
            SetCommand::Pan(p) => self.set_pan(p),
            SetCommand::Size(phy, log) => {
                self.set_size(phy, log)?;
            }
            SetCommand::Show(on) => self.set_show(on)?,
            SetCommand::Style(s) => self.set_style(s),
            SetCommand::Title(t) => self.set_title(&t),
        }
        Ok(())
    }

    pub fn draw(&mut self, cmd: DrawCommand<'_>) -> Result<()> {
        match cmd {
            DrawCommand::Pixel(p) => self.draw_pixel(p),
            DrawCommand::Pixels(ps) => self.draw_pixels(ps),
            DrawCommand::Line(a, b) => self.draw_line(a, b),
            DrawCommand::Rect(r) => self.draw_rect(r),
            DrawCommand::Oval(r) => self.draw_oval(r),
            DrawCommand::Text(p, t) => self.draw_text(p, t),
            DrawCommand::Image(p, path) => self.draw_image(p, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::pico;
    use crate::coords::{HAnchor, VAnchor};

    #[test]
    fn set_dispatches_to_setters() {
        let mut p = pico();
        p.set(SetCommand::Anchor(Anchor::new(HAnchor::Right, VAnchor::Bottom))).unwrap();
        p.set(SetCommand::Pan(Point::new(1, 2))).unwrap();
        p.set(SetCommand::Style(Style::Stroke)).unwrap();
        p.set(SetCommand::Title("other".into())).unwrap();
        p.set(SetCommand::Size(PhysicalSize::Keep, LogicalSize::Exact(Dim::new(5, 5)))).unwrap();

        assert_eq!(p.state().anchor, Anchor::new(HAnchor::Right, VAnchor::Bottom));
        assert_eq!(p.state().pan, Point::new(1, 2));
        assert_eq!(p.state().style, Style::Stroke);
        assert_eq!(p.backend().title(), "other");
        assert_eq!(p.get_size().logical, Dim::new(5, 5));
    }

    #[test]
    fn draw_dispatches_and_presents_once_per_command() {
        let mut p = pico();
        let before = p.backend().stats().presents;

        p.draw(DrawCommand::Pixels(&[Point::new(1, 1), Point::new(2, 2)])).unwrap();
        p.draw(DrawCommand::Rect(Rect::new(5, 5, 2, 2))).unwrap();
        assert_eq!(p.backend().stats().presents, before + 2);
    }
}
