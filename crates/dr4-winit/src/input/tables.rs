use dr4::{KeyCode, KeyMods, MouseButton};
use winit::event::MouseButton as WinitMouseButton;
use winit::keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey};

pub fn map_physical_key(pk: PhysicalKey) -> KeyCode {
    match pk {
        PhysicalKey::Code(code) => map_key_code(code),
        PhysicalKey::Unidentified(_) => KeyCode::Unknown,
    }
}

pub fn map_key_code(code: WinitKeyCode) -> KeyCode {
    match code {
        WinitKeyCode::KeyA => KeyCode::A,
        WinitKeyCode::KeyB => KeyCode::B,
        WinitKeyCode::KeyC => KeyCode::C,
        WinitKeyCode::KeyD => KeyCode::D,
        WinitKeyCode::KeyE => KeyCode::E,
        WinitKeyCode::KeyF => KeyCode::F,
        WinitKeyCode::KeyG => KeyCode::G,
        WinitKeyCode::KeyH => KeyCode::H,
        WinitKeyCode::KeyI => KeyCode::I,
        WinitKeyCode::KeyJ => KeyCode::J,
        WinitKeyCode::KeyK => KeyCode::K,
        WinitKeyCode::KeyL => KeyCode::L,
        WinitKeyCode::KeyM => KeyCode::M,
        WinitKeyCode::KeyN => KeyCode::N,
        WinitKeyCode::KeyO => KeyCode::O,
        WinitKeyCode::KeyP => KeyCode::P,
        WinitKeyCode::KeyQ => KeyCode::Q,
        WinitKeyCode::KeyR => KeyCode::R,
        WinitKeyCode::KeyS => KeyCode::S,
        WinitKeyCode::KeyT => KeyCode::T,
        WinitKeyCode::KeyU => KeyCode::U,
        WinitKeyCode::KeyV => KeyCode::V,
        WinitKeyCode::KeyW => KeyCode::W,
        WinitKeyCode::KeyX => KeyCode::X,
        WinitKeyCode::KeyY => KeyCode::Y,
        WinitKeyCode::KeyZ => KeyCode::Z,

        WinitKeyCode::Digit0 => KeyCode::Num0,
        WinitKeyCode::Digit1 => KeyCode::Num1,
        WinitKeyCode::Digit2 => KeyCode::Num2,
        WinitKeyCode::Digit3 => KeyCode::Num3,
        WinitKeyCode::Digit4 => KeyCode::Num4,
        WinitKeyCode::Digit5 => KeyCode::Num5,
        WinitKeyCode::Digit6 => KeyCode::Num6,
        WinitKeyCode::Digit7 => KeyCode::Num7,
        WinitKeyCode::Digit8 => KeyCode::Num8,
        WinitKeyCode::Digit9 => KeyCode::Num9,

        WinitKeyCode::Escape => KeyCode::Escape,
        WinitKeyCode::ControlLeft => KeyCode::LControl,
        WinitKeyCode::ShiftLeft => KeyCode::LShift,
        WinitKeyCode::AltLeft => KeyCode::LAlt,
        WinitKeyCode::SuperLeft => KeyCode::LSystem,
        WinitKeyCode::ControlRight => KeyCode::RControl,
        WinitKeyCode::ShiftRight => KeyCode::RShift,
        WinitKeyCode::AltRight => KeyCode::RAlt,
        WinitKeyCode::SuperRight => KeyCode::RSystem,
        WinitKeyCode::ContextMenu => KeyCode::Menu,

        WinitKeyCode::BracketLeft => KeyCode::LBracket,
        WinitKeyCode::BracketRight => KeyCode::RBracket,
        WinitKeyCode::Semicolon => KeyCode::Semicolon,
        WinitKeyCode::Comma => KeyCode::Comma,
        WinitKeyCode::Period => KeyCode::Period,
        WinitKeyCode::Quote => KeyCode::Quote,
        WinitKeyCode::Slash => KeyCode::Slash,
        WinitKeyCode::Backslash => KeyCode::Backslash,
        WinitKeyCode::Backquote => KeyCode::Tilde,
        WinitKeyCode::Equal => KeyCode::Equal,
        WinitKeyCode::Minus => KeyCode::Hyphen,

        WinitKeyCode::Space => KeyCode::Space,
        WinitKeyCode::Enter => KeyCode::Enter,
        WinitKeyCode::Backspace => KeyCode::Backspace,
        WinitKeyCode::Tab => KeyCode::Tab,
        WinitKeyCode::PageUp => KeyCode::PageUp,
        WinitKeyCode::PageDown => KeyCode::PageDown,
        WinitKeyCode::End => KeyCode::End,
        WinitKeyCode::Home => KeyCode::Home,
        WinitKeyCode::Insert => KeyCode::Insert,
        WinitKeyCode::Delete => KeyCode::Delete,

        WinitKeyCode::NumpadAdd => KeyCode::Add,
        WinitKeyCode::NumpadSubtract => KeyCode::Subtract,
        WinitKeyCode::NumpadMultiply => KeyCode::Multiply,
        WinitKeyCode::NumpadDivide => KeyCode::Divide,

        WinitKeyCode::ArrowLeft => KeyCode::Left,
        WinitKeyCode::ArrowRight => KeyCode::Right,
        WinitKeyCode::ArrowUp => KeyCode::Up,
        WinitKeyCode::ArrowDown => KeyCode::Down,

        WinitKeyCode::Numpad0 => KeyCode::Numpad0,
        WinitKeyCode::Numpad1 => KeyCode::Numpad1,
        WinitKeyCode::Numpad2 => KeyCode::Numpad2,
        WinitKeyCode::Numpad3 => KeyCode::Numpad3,
        WinitKeyCode::Numpad4 => KeyCode::Numpad4,
        WinitKeyCode::Numpad5 => KeyCode::Numpad5,
        WinitKeyCode::Numpad6 => KeyCode::Numpad6,
        WinitKeyCode::Numpad7 => KeyCode::Numpad7,
        WinitKeyCode::Numpad8 => KeyCode::Numpad8,
        WinitKeyCode::Numpad9 => KeyCode::Numpad9,

        WinitKeyCode::F1 => KeyCode::F1,
        WinitKeyCode::F2 => KeyCode::F2,
        WinitKeyCode::F3 => KeyCode::F3,
        WinitKeyCode::F4 => KeyCode::F4,
        WinitKeyCode::F5 => KeyCode::F5,
        WinitKeyCode::F6 => KeyCode::F6,
        WinitKeyCode::F7 => KeyCode::F7,
        WinitKeyCode::F8 => KeyCode::F8,
        WinitKeyCode::F9 => KeyCode::F9,
        WinitKeyCode::F10 => KeyCode::F10,
        WinitKeyCode::F11 => KeyCode::F11,
        WinitKeyCode::F12 => KeyCode::F12,
        WinitKeyCode::F13 => KeyCode::F13,
        WinitKeyCode::F14 => KeyCode::F14,
        WinitKeyCode::F15 => KeyCode::F15,

        WinitKeyCode::Pause => KeyCode::Pause,

        _ => KeyCode::Unknown,
    }
}

pub fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back | WinitMouseButton::Forward | WinitMouseButton::Other(_) => {
            MouseButton::Unknown
        }
    }
}

/// Each held modifier contributes its own flag. The super key has none.
pub fn map_modifiers(m: ModifiersState) -> KeyMods {
    KeyMods::from_held(m.control_key(), m.alt_key(), m.shift_key())
}
