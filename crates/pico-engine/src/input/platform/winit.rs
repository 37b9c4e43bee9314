use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::coords::{Dim, Point};
use crate::input::{
    Event, InputState, Key, KeyEvent, Modifiers, MouseButton, MouseButtonEvent, MouseMotionEvent,
    MouseWheelDelta,
};

/// Maps physical window pixels to logical canvas units.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PointerScale {
    pub physical: Dim,
    pub logical: Dim,
}

impl PointerScale {
    pub fn to_logical(self, pos: PhysicalPosition<f64>) -> Point {
        if !self.physical.is_valid() || !self.logical.is_valid() {
            return Point::new(pos.x as i32, pos.y as i32);
        }
        let x = pos.x * f64::from(self.logical.w) / f64::from(self.physical.w);
        let y = pos.y * f64::from(self.logical.h) / f64::from(self.physical.h);
        Point::new(x.floor() as i32, y.floor() as i32)
    }
}

/// Translates a winit `WindowEvent` into an engine [`Event`].
///
/// Returns `None` for events not represented by the input subsystem.
/// `ModifiersChanged` is not an event of its own; callers feed it to
/// [`map_modifiers`] and store the result in `state`.
pub fn translate_window_event(
    scale: PointerScale,
    state: &InputState,
    event: &WindowEvent,
) -> Option<Event> {
    match event {
        WindowEvent::CloseRequested => Some(Event::Quit),

        WindowEvent::Focused(f) => Some(Event::Focused(*f)),

        WindowEvent::CursorMoved { position, .. } => {
            let pos = scale.to_logical(*position);
            let rel = state.pointer_pos.map(|prev| pos - prev).unwrap_or_default();
            Some(Event::MouseMotion(MouseMotionEvent { pos, rel }))
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            // winit does not attach a position to button events; use the tracked pointer.
            let ev = MouseButtonEvent {
                button: map_mouse_button(*button),
                pos: state.pointer_pos.unwrap_or_default(),
            };
            Some(match st {
                ElementState::Pressed => Event::MouseButtonDown(ev),
                ElementState::Released => Event::MouseButtonUp(ev),
            })
        }

        WindowEvent::MouseWheel { delta, .. } => {
            let delta = match delta {
                MouseScrollDelta::LineDelta(x, y) => MouseWheelDelta::Line { x: *x, y: *y },
                MouseScrollDelta::PixelDelta(p) => MouseWheelDelta::Pixel { x: p.x as f32, y: p.y as f32 },
            };
            Some(Event::MouseWheel(delta))
        }

        WindowEvent::KeyboardInput { event, .. } => {
            let (key, code) = map_key(event.physical_key);
            let ev = KeyEvent {
                key,
                modifiers: state.modifiers,
                code,
                repeat: event.repeat,
            };
            Some(match event.state {
                ElementState::Pressed => Event::KeyDown(ev),
                ElementState::Released => Event::KeyUp(ev),
            })
        }

        WindowEvent::Ime(winit::event::Ime::Commit(text)) if !text.is_empty() => {
            Some(Event::Text(text.clone()))
        }

        _ => None,
    }
}

pub fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn map_key(pk: PhysicalKey) -> (Key, u32) {
    match pk {
        PhysicalKey::Code(code) => {
            let key = match code {
                KeyCode::Escape => Key::Escape,
                KeyCode::Enter => Key::Enter,
                KeyCode::Tab => Key::Tab,
                KeyCode::Backspace => Key::Backspace,
                KeyCode::Space => Key::Space,

                KeyCode::Insert => Key::Insert,
                KeyCode::Delete => Key::Delete,
                KeyCode::Home => Key::Home,
                KeyCode::End => Key::End,
                KeyCode::PageUp => Key::PageUp,
                KeyCode::PageDown => Key::PageDown,

                KeyCode::ArrowUp => Key::ArrowUp,
                KeyCode::ArrowDown => Key::ArrowDown,
                KeyCode::ArrowLeft => Key::ArrowLeft,
                KeyCode::ArrowRight => Key::ArrowRight,

                KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
                KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
                KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
                KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

                KeyCode::Minus | KeyCode::NumpadSubtract => Key::Minus,
                KeyCode::Equal | KeyCode::NumpadAdd => Key::Equal,

                KeyCode::KeyA => Key::A,
                KeyCode::KeyB => Key::B,
                KeyCode::KeyC => Key::C,
                KeyCode::KeyD => Key::D,
                KeyCode::KeyE => Key::E,
                KeyCode::KeyF => Key::F,
                KeyCode::KeyG => Key::G,
                KeyCode::KeyH => Key::H,
                KeyCode::KeyI => Key::I,
                KeyCode::KeyJ => Key::J,
                KeyCode::KeyK => Key::K,
                KeyCode::KeyL => Key::L,
                KeyCode::KeyM => Key::M,
                KeyCode::KeyN => Key::N,
                KeyCode::KeyO => Key::O,
                KeyCode::KeyP => Key::P,
                KeyCode::KeyQ => Key::Q,
                KeyCode::KeyR => Key::R,
                KeyCode::KeyS => Key::S,
                KeyCode::KeyT => Key::T,
                KeyCode::KeyU => Key::U,
                KeyCode::KeyV => Key::V,
                KeyCode::KeyW => Key::W,
                KeyCode::KeyX => Key::X,
                KeyCode::KeyY => Key::Y,
                KeyCode::KeyZ => Key::Z,

                KeyCode::Digit0 | KeyCode::Numpad0 => Key::Digit0,
                KeyCode::Digit1 => Key::Digit1,
                KeyCode::Digit2 => Key::Digit2,
                KeyCode::Digit3 => Key::Digit3,
                KeyCode::Digit4 => Key::Digit4,
                KeyCode::Digit5 => Key::Digit5,
                KeyCode::Digit6 => Key::Digit6,
                KeyCode::Digit7 => Key::Digit7,
                KeyCode::Digit8 => Key::Digit8,
                KeyCode::Digit9 => Key::Digit9,

                KeyCode::F1 => Key::F1,
                KeyCode::F2 => Key::F2,
                KeyCode::F3 => Key::F3,
                KeyCode::F4 => Key::F4,
                KeyCode::F5 => Key::F5,
                KeyCode::F6 => Key::F6,
                KeyCode::F7 => Key::F7,
                KeyCode::F8 => Key::F8,
                KeyCode::F9 => Key::F9,
                KeyCode::F10 => Key::F10,
                KeyCode::F11 => Key::F11,
                KeyCode::F12 => Key::F12,

                other => Key::Unknown(other as u32),
            };

            (key, code as u32)
        }

        // winit 0.30 uses NativeKeyCode; no stable numeric is guaranteed here.
        PhysicalKey::Unidentified(_) => (Key::Unknown(0), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_scale_divides_by_ratio() {
        let s = PointerScale { physical: Dim::new(500, 500), logical: Dim::new(100, 100) };
        assert_eq!(s.to_logical(PhysicalPosition::new(250.0, 499.0)), Point::new(50, 99));
    }

    #[test]
    fn pointer_scale_passes_through_without_sizes() {
        let s = PointerScale { physical: Dim::zero(), logical: Dim::zero() };
        assert_eq!(s.to_logical(PhysicalPosition::new(12.7, 3.2)), Point::new(12, 3));
    }

    #[test]
    fn map_key_covers_zoom_keys() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Minus)).0, Key::Minus);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Equal)).0, Key::Equal);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Numpad0)).0, Key::Digit0);
    }
}
