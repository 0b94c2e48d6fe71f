//! DR4 graphics interface.
//!
//! Hosts program against the traits in this crate; a backend crate supplies
//! the implementations. Objects are handed out as trait objects by a
//! [`Window`], and every object taking part in one draw call must come from
//! the same backend.

pub mod math;

mod drawable;
mod error;
mod event;
mod keycodes;
mod mouse;
mod plugin;
mod shapes;
mod text;
mod texture;
mod window;

pub use drawable::Drawable;
pub use error::{FontError, WindowError};
pub use event::{
    Event,
    EventType,
    KeyEvent,
    MouseButtonEvent,
    MouseMoveEvent,
    MouseWheelEvent,
    TextEvent,
};
pub use keycodes::{KeyCode, KeyMods};
pub use math::{Color, Rect2f, Vec2f};
pub use mouse::MouseButton;
pub use plugin::{Backend, Plugin, PluginVersion};
pub use shapes::{Circle, Line, Rectangle};
pub use text::{Font, Text, VAlign};
pub use texture::{Image, Texture};
pub use window::Window;
