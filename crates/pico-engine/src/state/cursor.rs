use crate::coords::Point;

/// Text stream position used by `write`/`writeln`.
///
/// `margin` is the x a new line starts at; `pos` is where the next write
/// lands (top-left of the rendered text).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TextCursor {
    margin: i32,
    pos: Point,
}

impl TextCursor {
    /// Cursor at `pos`, with the margin at `pos.x`.
    pub const fn at(pos: Point) -> Self {
        Self { margin: pos.x, pos }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn margin(&self) -> i32 {
        self.margin
    }

    /// Keeps the current line but moves where new lines start.
    pub fn set_margin(&mut self, margin: i32) {
        self.margin = margin;
    }

    pub fn advance(&mut self, width: i32) {
        self.pos.x += width;
    }

    pub fn newline(&mut self, line_height: i32) {
        self.pos.x = self.margin;
        self.pos.y += line_height;
    }
}
