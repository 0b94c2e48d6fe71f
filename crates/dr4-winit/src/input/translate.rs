use std::collections::VecDeque;

use dr4::{
    Event, KeyEvent, MouseButtonEvent, MouseMoveEvent, MouseWheelEvent, TextEvent, Vec2f,
};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, Ime, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{ModifiersState, PhysicalKey};

use super::tables::{map_modifiers, map_mouse_button, map_physical_key};

/// Logical pixels per wheel line when the platform reports pixel deltas.
pub const PIXELS_PER_LINE: f32 = 20.0;

/// Stateful winit to dr4 event translation.
///
/// winit reports modifiers and cursor position as separate events, so both
/// are tracked here and attached to the events that need them.
#[derive(Debug, Default)]
pub struct EventTranslator {
    modifiers: ModifiersState,
    cursor: Option<Vec2f>,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position in logical pixels.
    #[inline]
    pub fn cursor(&self) -> Vec2f {
        self.cursor.unwrap_or_default()
    }

    /// Appends the dr4 events for `event` to `out`.
    ///
    /// Every native event yields at least one event; those without a
    /// counterpart become [`Event::Unknown`].
    pub fn translate(&mut self, event: &WindowEvent, scale_factor: f64, out: &mut VecDeque<Event>) {
        match event {
            WindowEvent::CloseRequested => out.push_back(Event::Quit),

            WindowEvent::ModifiersChanged(m) => {
                self.modifiers = m.state();
                out.push_back(Event::Unknown);
            }

            WindowEvent::CursorMoved { position, .. } => {
                out.push_back(self.cursor_moved(*position, scale_factor));
            }

            WindowEvent::MouseInput { state, button, .. } => {
                out.push_back(self.mouse_input(*state, *button));
            }

            WindowEvent::MouseWheel { delta, .. } => {
                out.push_back(self.mouse_wheel(*delta, scale_factor));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard_input(event.state, event.physical_key, event.text.as_deref(), out);
            }

            WindowEvent::Ime(Ime::Commit(text)) => {
                if push_text(text, out) == 0 {
                    out.push_back(Event::Unknown);
                }
            }

            _ => out.push_back(Event::Unknown),
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>, scale_factor: f64) -> Event {
        let pos = to_logical(position, scale_factor);
        let rel = self.cursor.map_or(Vec2f::zero(), |prev| pos - prev);
        self.cursor = Some(pos);
        Event::MouseMove(MouseMoveEvent { pos, rel })
    }

    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> Event {
        let ev = MouseButtonEvent {
            button: map_mouse_button(button),
            pos: self.cursor(),
        };
        match state {
            ElementState::Pressed => Event::MouseDown(ev),
            ElementState::Released => Event::MouseUp(ev),
        }
    }

    pub fn mouse_wheel(&mut self, delta: MouseScrollDelta, scale_factor: f64) -> Event {
        let (delta_x, delta_y) = match delta {
            MouseScrollDelta::LineDelta(x, y) => (x, y),
            MouseScrollDelta::PixelDelta(p) => {
                let logical = to_logical(p, scale_factor);
                (logical.x / PIXELS_PER_LINE, logical.y / PIXELS_PER_LINE)
            }
        };
        Event::MouseWheel(MouseWheelEvent {
            delta_x,
            delta_y,
            pos: self.cursor(),
        })
    }

    /// Key event, followed on press by one text event per produced character.
    pub fn keyboard_input(
        &mut self,
        state: ElementState,
        physical_key: PhysicalKey,
        text: Option<&str>,
        out: &mut VecDeque<Event>,
    ) {
        let ev = KeyEvent {
            sym: map_physical_key(physical_key),
            mods: map_modifiers(self.modifiers),
        };
        match state {
            ElementState::Pressed => {
                out.push_back(Event::KeyDown(ev));
                if let Some(text) = text {
                    push_text(text, out);
                }
            }
            ElementState::Released => out.push_back(Event::KeyUp(ev)),
        }
    }

    pub fn set_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }
}

fn to_logical(position: PhysicalPosition<f64>, scale_factor: f64) -> Vec2f {
    let logical = position.to_logical::<f64>(scale_factor);
    Vec2f::new(logical.x as f32, logical.y as f32)
}

fn push_text(text: &str, out: &mut VecDeque<Event>) -> usize {
    let before = out.len();
    out.extend(text.chars().map(|c| {
        Event::Text(TextEvent {
            unicode: c.to_string(),
        })
    }));
    out.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;
    use dr4::{EventType, KeyCode, KeyMods, MouseButton as Dr4MouseButton};
    use winit::keyboard::KeyCode as WinitKeyCode;

    fn drain(out: &mut VecDeque<Event>) -> Vec<Event> {
        out.drain(..).collect()
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn first_move_has_zero_rel() {
        let mut t = EventTranslator::new();
        let ev = t.cursor_moved(PhysicalPosition::new(10.0, 20.0), 1.0);
        assert_eq!(
            ev,
            Event::MouseMove(MouseMoveEvent {
                pos: Vec2f::new(10.0, 20.0),
                rel: Vec2f::zero(),
            })
        );
    }

    #[test]
    fn rel_is_difference_to_previous_move() {
        let mut t = EventTranslator::new();
        t.cursor_moved(PhysicalPosition::new(10.0, 20.0), 1.0);
        let ev = t.cursor_moved(PhysicalPosition::new(13.0, 16.0), 1.0);
        let Event::MouseMove(m) = ev else { panic!("expected move, got {ev:?}") };
        assert_eq!(m.rel, Vec2f::new(3.0, -4.0));
    }

    #[test]
    fn positions_are_logical() {
        let mut t = EventTranslator::new();
        t.cursor_moved(PhysicalPosition::new(200.0, 100.0), 2.0);
        assert_eq!(t.cursor(), Vec2f::new(100.0, 50.0));
    }

    #[test]
    fn button_carries_tracked_cursor() {
        let mut t = EventTranslator::new();
        t.cursor_moved(PhysicalPosition::new(5.0, 6.0), 1.0);

        let down = t.mouse_input(ElementState::Pressed, MouseButton::Right);
        let up = t.mouse_input(ElementState::Released, MouseButton::Back);

        assert_eq!(
            down,
            Event::MouseDown(MouseButtonEvent {
                button: Dr4MouseButton::Right,
                pos: Vec2f::new(5.0, 6.0),
            })
        );
        assert_eq!(up.event_type(), EventType::MouseUp);
        let Event::MouseUp(b) = up else { unreachable!() };
        assert_eq!(b.button, Dr4MouseButton::Unknown);
    }

    #[test]
    fn line_wheel_passes_through() {
        let mut t = EventTranslator::new();
        let Event::MouseWheel(w) = t.mouse_wheel(MouseScrollDelta::LineDelta(0.0, -1.0), 1.0) else {
            panic!("expected wheel")
        };
        assert_eq!((w.delta_x, w.delta_y), (0.0, -1.0));
    }

    #[test]
    fn pixel_wheel_is_scaled_to_lines() {
        let mut t = EventTranslator::new();
        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 80.0));
        let Event::MouseWheel(w) = t.mouse_wheel(delta, 2.0) else {
            panic!("expected wheel")
        };
        assert_eq!(w.delta_y, 40.0 / PIXELS_PER_LINE);
    }

    // ── keyboard ──────────────────────────────────────────────────────────

    #[test]
    fn press_emits_key_then_text() {
        let mut t = EventTranslator::new();
        let mut out = VecDeque::new();
        t.keyboard_input(
            ElementState::Pressed,
            PhysicalKey::Code(WinitKeyCode::KeyA),
            Some("a"),
            &mut out,
        );

        let events = drain(&mut out);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].key().map(|k| k.sym), Some(KeyCode::A));
        assert_eq!(events[1], Event::Text(TextEvent { unicode: "a".into() }));
    }

    #[test]
    fn release_emits_no_text() {
        let mut t = EventTranslator::new();
        let mut out = VecDeque::new();
        t.keyboard_input(
            ElementState::Released,
            PhysicalKey::Code(WinitKeyCode::KeyA),
            Some("a"),
            &mut out,
        );
        assert_eq!(drain(&mut out).len(), 1);
    }

    #[test]
    fn multi_char_text_splits_per_char() {
        let mut out = VecDeque::new();
        assert_eq!(push_text("né", &mut out), 2);
        assert_eq!(out[1], Event::Text(TextEvent { unicode: "é".into() }));
    }

    #[test]
    fn held_modifiers_are_attached() {
        let mut t = EventTranslator::new();
        t.set_modifiers(ModifiersState::CONTROL | ModifiersState::ALT);
        let mut out = VecDeque::new();
        t.keyboard_input(
            ElementState::Pressed,
            PhysicalKey::Code(WinitKeyCode::KeyS),
            None,
            &mut out,
        );

        let mods = out[0].key().map(|k| k.mods).unwrap_or_default();
        assert!(mods.contains(KeyMods::CTRL | KeyMods::ALT));
        assert!(!mods.contains(KeyMods::SHIFT));
    }

    // ── whole events ──────────────────────────────────────────────────────

    #[test]
    fn close_request_is_quit() {
        let mut t = EventTranslator::new();
        let mut out = VecDeque::new();
        t.translate(&WindowEvent::CloseRequested, 1.0, &mut out);
        assert_eq!(drain(&mut out), vec![Event::Quit]);
    }

    #[test]
    fn unrelated_events_are_unknown() {
        let mut t = EventTranslator::new();
        let mut out = VecDeque::new();
        t.translate(&WindowEvent::Focused(true), 1.0, &mut out);
        t.translate(&WindowEvent::Ime(Ime::Enabled), 1.0, &mut out);
        assert_eq!(drain(&mut out), vec![Event::Unknown, Event::Unknown]);
    }

    #[test]
    fn ime_commit_becomes_text() {
        let mut t = EventTranslator::new();
        let mut out = VecDeque::new();
        t.translate(&WindowEvent::Ime(Ime::Commit("日本".into())), 1.0, &mut out);
        let events = drain(&mut out);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.event_type() == EventType::Text));
    }
}
