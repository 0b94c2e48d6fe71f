use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Physical key identifier.
///
/// Backends map their native scancodes onto these variants. Keys without a
/// counterpart here are reported as `KeyCode::Unknown`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum KeyCode {
    #[default]
    Unknown,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Top-row digits
    Num0, Num1, Num2, Num3, Num4,
    Num5, Num6, Num7, Num8, Num9,

    Escape,
    LControl,
    LShift,
    LAlt,
    LSystem,
    RControl,
    RShift,
    RAlt,
    RSystem,
    Menu,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Period,
    Quote,
    Slash,
    Backslash,
    Tilde,
    Equal,
    Hyphen,
    Space,
    Enter,
    Backspace,
    Tab,
    PageUp,
    PageDown,
    End,
    Home,
    Insert,
    Delete,

    // Numpad operators
    Add,
    Subtract,
    Multiply,
    Divide,

    Left,
    Right,
    Up,
    Down,

    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,

    F1, F2, F3, F4, F5, F6, F7, F8,
    F9, F10, F11, F12, F13, F14, F15,

    Pause,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Set of modifier keys held during a key event.
///
/// The empty set (`KeyMods::NONE`) means no modifier was held.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct KeyMods(u8);

impl KeyMods {
    pub const NONE: KeyMods = KeyMods(0);
    pub const SHIFT: KeyMods = KeyMods(1 << 0);
    pub const CTRL: KeyMods = KeyMods(1 << 1);
    pub const ALT: KeyMods = KeyMods(1 << 2);

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every flag of `other` is also set in `self`.
    #[inline]
    pub const fn contains(self, other: KeyMods) -> bool {
        self.0 & other.0 == other.0
    }

    /// Builds the set from the three independent modifier states.
    #[inline]
    pub fn from_held(ctrl: bool, alt: bool, shift: bool) -> Self {
        let pick = |held: bool, flag: KeyMods| if held { flag } else { KeyMods::NONE };
        pick(ctrl, KeyMods::CTRL) | pick(alt, KeyMods::ALT) | pick(shift, KeyMods::SHIFT)
    }
}

impl BitOr for KeyMods {
    type Output = KeyMods;
    #[inline]
    fn bitor(self, rhs: KeyMods) -> KeyMods {
        KeyMods(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyMods {
    #[inline]
    fn bitor_assign(&mut self, rhs: KeyMods) {
        self.0 |= rhs.0;
    }
}
