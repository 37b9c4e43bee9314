use std::collections::HashSet;

use crate::coords::Point;

use super::event::Event;
use super::types::{Key, Modifiers, MouseButton};

/// Keyboard/pointer state tracked by a backend as it delivers events.
///
/// Answers the "is Ctrl held" query of the input filter and supplies pointer
/// positions for platforms whose button events carry none.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical units.
    pub pointer_pos: Option<Point>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an event about to be delivered.
    pub fn apply_event(&mut self, ev: &Event) {
        match ev {
            Event::KeyDown(k) => {
                self.modifiers = k.modifiers;
                self.keys_down.insert(k.key);
            }
            Event::KeyUp(k) => {
                self.modifiers = k.modifiers;
                self.keys_down.remove(&k.key);
            }
            Event::MouseButtonDown(b) => {
                self.pointer_pos = Some(b.pos);
                self.buttons_down.insert(b.button);
            }
            Event::MouseButtonUp(b) => {
                self.pointer_pos = Some(b.pos);
                self.buttons_down.remove(&b.button);
            }
            Event::MouseMotion(m) => {
                self.pointer_pos = Some(m.pos);
            }
            Event::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear "down" sets so keys do not stick.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                    self.modifiers = Modifiers::NONE;
                }
            }
            Event::Quit | Event::MouseWheel(_) | Event::Text(_) => {}
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyEvent, MouseButtonEvent};

    #[test]
    fn key_events_track_modifiers_and_held_keys() {
        let mut s = InputState::default();
        s.apply_event(&Event::KeyDown(KeyEvent::new(Key::A, Modifiers::CTRL)));
        assert!(s.modifiers.ctrl);
        assert!(s.key_down(Key::A));

        s.apply_event(&Event::KeyUp(KeyEvent::new(Key::A, Modifiers::NONE)));
        assert!(!s.modifiers.ctrl);
        assert!(!s.key_down(Key::A));
    }

    #[test]
    fn focus_loss_clears_held_state() {
        let mut s = InputState::default();
        s.apply_event(&Event::MouseButtonDown(MouseButtonEvent {
            button: MouseButton::Left,
            pos: Point::new(2, 3),
        }));
        assert!(s.button_down(MouseButton::Left));
        assert_eq!(s.pointer_pos, Some(Point::new(2, 3)));

        s.apply_event(&Event::Focused(false));
        assert!(!s.button_down(MouseButton::Left));
    }
}
