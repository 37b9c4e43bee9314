use crate::coords::Point;

use super::types::{Key, Modifiers, MouseButton, MouseWheelDelta};

/// Key press or release.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    /// Stable platform code when available (e.g. scancode).
    pub code: u32,
    /// True when event is a key-repeat.
    pub repeat: bool,
}

impl KeyEvent {
    #[inline]
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers, code: 0, repeat: false }
    }
}

/// Mouse button press or release at `pos` (logical canvas units).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MouseButtonEvent {
    pub button: MouseButton,
    pub pos: Point,
}

/// Pointer motion to `pos`; `rel` is the delta since the previous motion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MouseMotionEvent {
    pub pos: Point,
    pub rel: Point,
}

/// Events delivered by a backend and returned by the input fetch functions.
///
/// Positions are in logical canvas units. The input filter adds the current
/// pan offset before handing an event to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Window close request.
    Quit,
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    MouseButtonDown(MouseButtonEvent),
    MouseButtonUp(MouseButtonEvent),
    MouseMotion(MouseMotionEvent),
    MouseWheel(MouseWheelDelta),
    /// Committed text input.
    Text(String),
    /// Window focus change.
    Focused(bool),
}

/// Fieldless discriminant of [`Event`], used for exact matching.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    Quit,
    KeyDown,
    KeyUp,
    MouseButtonDown,
    MouseButtonUp,
    MouseMotion,
    MouseWheel,
    Text,
    Focused,
}

impl EventKind {
    /// Kinds covered by [`EventClass::Any`].
    #[inline]
    pub fn is_interactive(self) -> bool {
        matches!(
            self,
            EventKind::KeyDown
                | EventKind::KeyUp
                | EventKind::MouseButtonDown
                | EventKind::MouseButtonUp
                | EventKind::MouseMotion
                | EventKind::Quit
        )
    }
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Quit => EventKind::Quit,
            Event::KeyDown(_) => EventKind::KeyDown,
            Event::KeyUp(_) => EventKind::KeyUp,
            Event::MouseButtonDown(_) => EventKind::MouseButtonDown,
            Event::MouseButtonUp(_) => EventKind::MouseButtonUp,
            Event::MouseMotion(_) => EventKind::MouseMotion,
            Event::MouseWheel(_) => EventKind::MouseWheel,
            Event::Text(_) => EventKind::Text,
            Event::Focused(_) => EventKind::Focused,
        }
    }

    /// Mutable access to the carried pointer position, if any.
    pub fn pos_mut(&mut self) -> Option<&mut Point> {
        match self {
            Event::MouseButtonDown(e) | Event::MouseButtonUp(e) => Some(&mut e.pos),
            Event::MouseMotion(e) => Some(&mut e.pos),
            _ => None,
        }
    }

    /// Translates the carried pointer position by `offset`.
    #[inline]
    pub fn offset_pos(&mut self, offset: Point) {
        if let Some(pos) = self.pos_mut() {
            *pos = *pos + offset;
        }
    }
}

/// Which events an input fetch accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventClass {
    /// Key down/up, mouse button down/up, mouse motion and quit.
    Any,
    /// Exactly one kind.
    Kind(EventKind),
}

impl EventClass {
    #[inline]
    pub fn matches(self, ev: &Event) -> bool {
        match self {
            EventClass::Any => ev.kind().is_interactive(),
            EventClass::Kind(kind) => ev.kind() == kind,
        }
    }
}

impl From<EventKind> for EventClass {
    #[inline]
    fn from(kind: EventKind) -> Self {
        EventClass::Kind(kind)
    }
}
