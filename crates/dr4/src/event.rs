use crate::keycodes::{KeyCode, KeyMods};
use crate::math::Vec2f;
use crate::mouse::MouseButton;

/// Discriminant of an [`Event`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EventType {
    Unknown,
    Quit,
    KeyDown,
    KeyUp,
    MouseDown,
    MouseUp,
    MouseMove,
    MouseWheel,
    Text,
}

/// Key press or release.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub sym: KeyCode,
    pub mods: KeyMods,
}

/// Mouse button press or release at a window position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MouseButtonEvent {
    pub button: MouseButton,
    pub pos: Vec2f,
}

/// Cursor movement.
///
/// `rel` is the offset from the position reported by the previous move event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MouseMoveEvent {
    pub pos: Vec2f,
    pub rel: Vec2f,
}

/// Wheel scroll in lines, with the cursor position at the time of scrolling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MouseWheelEvent {
    pub delta_x: f32,
    pub delta_y: f32,
    pub pos: Vec2f,
}

/// Committed text input (one character per event).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TextEvent {
    pub unicode: String,
}

/// Backend-independent window/input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Native event with no counterpart in this vocabulary.
    Unknown,
    Quit,
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    MouseDown(MouseButtonEvent),
    MouseUp(MouseButtonEvent),
    MouseMove(MouseMoveEvent),
    MouseWheel(MouseWheelEvent),
    Text(TextEvent),
}

impl Event {
    pub fn event_type(&self) -> EventType {
        match self {
            Event::Unknown => EventType::Unknown,
            Event::Quit => EventType::Quit,
            Event::KeyDown(_) => EventType::KeyDown,
            Event::KeyUp(_) => EventType::KeyUp,
            Event::MouseDown(_) => EventType::MouseDown,
            Event::MouseUp(_) => EventType::MouseUp,
            Event::MouseMove(_) => EventType::MouseMove,
            Event::MouseWheel(_) => EventType::MouseWheel,
            Event::Text(_) => EventType::Text,
        }
    }

    /// Key payload of `KeyDown`/`KeyUp` events.
    pub fn key(&self) -> Option<&KeyEvent> {
        match self {
            Event::KeyDown(k) | Event::KeyUp(k) => Some(k),
            _ => None,
        }
    }
}
