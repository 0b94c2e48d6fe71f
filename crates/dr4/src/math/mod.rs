//! Value types shared by every backend.
//!
//! Coordinate space: logical pixels, origin top-left, +X right, +Y down.

mod color;
mod rect;
mod vec2;

pub use color::Color;
pub use rect::Rect2f;
pub use vec2::Vec2f;
