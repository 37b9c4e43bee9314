use crate::coords::{Dim, Point};

use super::event::Event;
use super::types::{Key, Modifiers};

/// Pan distance per gesture, in logical units.
pub const PAN_STEP: i32 = 5;

/// Zoom step, in percent of the logical extent.
pub const ZOOM_STEP_PCT: i32 = 10;

/// Built-in view controls bound to Ctrl+key.
///
/// | Keys | Gesture |
/// |------|---------|
/// | Ctrl+Arrow | pan by [`PAN_STEP`] |
/// | Ctrl+`-` | zoom out (logical extent grows) |
/// | Ctrl+`=` | zoom in (logical extent shrinks) |
/// | Ctrl+`0` | restore logical size and pan |
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Gesture {
    Pan(Point),
    ZoomIn,
    ZoomOut,
    Reset,
}

impl Gesture {
    /// Classifies `ev` given the currently held modifiers.
    pub fn detect(ev: &Event, held: Modifiers) -> Option<Gesture> {
        let Event::KeyDown(k) = ev else {
            return None;
        };
        if !held.ctrl {
            return None;
        }

        let g = match k.key {
            Key::ArrowLeft => Gesture::Pan(Point::new(-PAN_STEP, 0)),
            Key::ArrowRight => Gesture::Pan(Point::new(PAN_STEP, 0)),
            Key::ArrowUp => Gesture::Pan(Point::new(0, -PAN_STEP)),
            Key::ArrowDown => Gesture::Pan(Point::new(0, PAN_STEP)),
            Key::Minus => Gesture::ZoomOut,
            Key::Equal => Gesture::ZoomIn,
            Key::Digit0 => Gesture::Reset,
            _ => return None,
        };
        Some(g)
    }
}

/// Logical size after one zoom step. Each axis changes by at least one unit
/// and never drops below one.
pub fn zoomed(logical: Dim, gesture: Gesture) -> Dim {
    let step = |v: i32| (v * ZOOM_STEP_PCT / 100).max(1);
    match gesture {
        Gesture::ZoomOut => Dim::new(logical.w + step(logical.w), logical.h + step(logical.h)),
        Gesture::ZoomIn => Dim::new(
            (logical.w - step(logical.w)).max(1),
            (logical.h - step(logical.h)).max(1),
        ),
        Gesture::Pan(_) | Gesture::Reset => logical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyEvent;

    fn down(key: Key, m: Modifiers) -> Event {
        Event::KeyDown(KeyEvent::new(key, m))
    }

    #[test]
    fn ctrl_arrows_pan() {
        let g = Gesture::detect(&down(Key::ArrowLeft, Modifiers::CTRL), Modifiers::CTRL);
        assert_eq!(g, Some(Gesture::Pan(Point::new(-5, 0))));
        let g = Gesture::detect(&down(Key::ArrowDown, Modifiers::CTRL), Modifiers::CTRL);
        assert_eq!(g, Some(Gesture::Pan(Point::new(0, 5))));
    }

    #[test]
    fn plain_arrow_is_not_a_gesture() {
        assert_eq!(Gesture::detect(&down(Key::ArrowLeft, Modifiers::NONE), Modifiers::NONE), None);
    }

    #[test]
    fn key_up_is_not_a_gesture() {
        let ev = Event::KeyUp(KeyEvent::new(Key::Digit0, Modifiers::CTRL));
        assert_eq!(Gesture::detect(&ev, Modifiers::CTRL), None);
    }

    #[test]
    fn zoom_steps_ten_percent() {
        assert_eq!(zoomed(Dim::new(100, 50), Gesture::ZoomOut), Dim::new(110, 55));
        assert_eq!(zoomed(Dim::new(100, 50), Gesture::ZoomIn), Dim::new(90, 45));
    }

    #[test]
    fn zoom_small_extents_move_by_one_and_stay_positive() {
        assert_eq!(zoomed(Dim::new(5, 1), Gesture::ZoomOut), Dim::new(6, 2));
        assert_eq!(zoomed(Dim::new(5, 1), Gesture::ZoomIn), Dim::new(4, 1));
    }
}
