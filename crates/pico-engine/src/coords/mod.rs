//! Coordinate and geometry types shared by the render state, the backends and
//! the input filter.
//!
//! Canonical space:
//! - integer logical pixels of the off-screen canvas
//! - origin top-left
//! - +X right, +Y down
//!
//! The anchor transform maps a caller position plus an extent to the top-left
//! corner the backend draws at.

mod anchor;
mod dim;
mod point;
mod rect;

pub use anchor::{anchor_pos, anchor_rect, pct_to_pos, pct_to_pos_in, Anchor, HAnchor, VAnchor};
pub use dim::Dim;
pub use point::Point;
pub use rect::Rect;
