use downcast_rs::{impl_downcast, Downcast};

use crate::math::Vec2f;
use crate::texture::Texture;

/// Anything that can be positioned and composited onto a [`Texture`].
///
/// What `pos` refers to depends on the primitive: the top-left corner for
/// rectangles, images and textures, the start point for lines, the top-left of
/// the bounding box for circles and the alignment anchor for text.
pub trait Drawable: Downcast {
    /// Renders `self` into `target`, offset by the target's zero point.
    ///
    /// # Panics
    ///
    /// Backends panic when `target` was created by a different backend.
    fn draw_on(&self, target: &mut dyn Texture);

    fn set_pos(&mut self, pos: Vec2f);

    fn pos(&self) -> Vec2f;
}
impl_downcast!(Drawable);
