use downcast_rs::impl_downcast;

use crate::drawable::Drawable;
use crate::math::{Color, Vec2f};

/// Off-screen render surface.
///
/// A texture is both a drawable (it can be composited into another texture)
/// and a draw target. Its zero point is the origin children are placed
/// relative to when they are drawn onto it.
pub trait Texture: Drawable {
    /// Recreates the surface; previous contents are discarded.
    fn set_size(&mut self, size: Vec2f);
    fn size(&self) -> Vec2f;
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn set_zero(&mut self, zero: Vec2f);
    fn zero(&self) -> Vec2f;

    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color);
}
impl_downcast!(Texture);

/// CPU-addressable pixel grid.
pub trait Image: Drawable {
    fn set_pixel(&mut self, x: usize, y: usize, color: Color);
    fn pixel(&self, x: usize, y: usize) -> Color;

    /// Reallocates the pixel buffer; previous contents are discarded.
    fn set_size(&mut self, size: Vec2f);
    fn size(&self) -> Vec2f;
    fn width(&self) -> f32;
    fn height(&self) -> f32;
}
impl_downcast!(Image);
