/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum MouseButton {
    /// Native button with no counterpart here.
    #[default]
    Unknown,
    Left,
    Right,
    Middle,
}
