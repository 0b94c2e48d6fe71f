use dr4::{Color, Vec2f};

use crate::canvas::Canvas;

/// Smallest edge a texture may have. Smaller requests are raised to this.
pub const MIN_TEXTURE_SIZE: f32 = 10.0;

/// Off-screen render target.
///
/// Everything drawn onto a texture is shifted by its `zero` offset, so a
/// host can scroll content without touching each drawable.
#[derive(Debug, Clone)]
pub struct Texture {
    canvas: Canvas,
    size: Vec2f,
    pos: Vec2f,
    zero: Vec2f,
}

impl Texture {
    pub fn new(width: f32, height: f32) -> Self {
        let size = clamp_size(Vec2f::new(width, height));
        Self {
            canvas: Canvas::new(size.x as u32, size.y as u32),
            size,
            pos: Vec2f::zero(),
            zero: Vec2f::zero(),
        }
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Where a drawable placed at `pos` lands on the canvas.
    #[inline]
    pub(crate) fn place(&self, pos: Vec2f) -> Vec2f {
        pos + self.zero
    }

    #[inline]
    pub(crate) fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }
}

fn clamp_size(size: Vec2f) -> Vec2f {
    // NaN compares false and lands on the minimum too.
    let clamp = |v: f32| if v > MIN_TEXTURE_SIZE { v } else { MIN_TEXTURE_SIZE };
    Vec2f::new(clamp(size.x), clamp(size.y))
}

/// Resolves a draw target to this backend's texture.
///
/// # Panics
///
/// If `target` was created by another backend.
pub(crate) fn native_target(target: &mut dyn dr4::Texture) -> &mut Texture {
    target
        .downcast_mut::<Texture>()
        .expect("draw target was not created by the winit backend")
}

impl dr4::Drawable for Texture {
    fn draw_on(&self, target: &mut dyn dr4::Texture) {
        let target = native_target(target);
        let at = target.place(self.pos);
        target.canvas.blend_canvas(&self.canvas, at);
    }

    fn set_pos(&mut self, pos: Vec2f) {
        self.pos = pos;
    }

    fn pos(&self) -> Vec2f {
        self.pos
    }
}

impl dr4::Texture for Texture {
    fn set_size(&mut self, size: Vec2f) {
        self.size = clamp_size(size);
        self.canvas.resize(self.size.x as u32, self.size.y as u32);
    }

    fn size(&self) -> Vec2f {
        self.size
    }

    fn width(&self) -> f32 {
        self.size.x
    }

    fn height(&self) -> f32 {
        self.size.y
    }

    fn set_zero(&mut self, zero: Vec2f) {
        self.zero = zero;
    }

    fn zero(&self) -> Vec2f {
        self.zero
    }

    fn clear(&mut self, color: Color) {
        self.canvas.clear(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dr4::{Drawable, Texture as _};

    #[test]
    fn size_is_clamped_on_creation() {
        let t = Texture::new(3.0, 50.0);
        assert_eq!(t.size(), Vec2f::new(MIN_TEXTURE_SIZE, 50.0));
        assert_eq!(t.canvas().width(), 10);
    }

    #[test]
    fn set_size_clamps_and_reallocates() {
        let mut t = Texture::new(40.0, 40.0);
        t.clear(Color::RED);
        t.set_size(Vec2f::new(-5.0, f32::NAN));
        assert_eq!(t.size(), Vec2f::new(MIN_TEXTURE_SIZE, MIN_TEXTURE_SIZE));
        assert_eq!(t.canvas().pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn drawn_texture_lands_at_pos_plus_zero() {
        let mut target = Texture::new(40.0, 40.0);
        target.set_zero(Vec2f::new(5.0, 0.0));

        let mut src = Texture::new(10.0, 10.0);
        src.clear(Color::GREEN);
        src.set_pos(Vec2f::new(10.0, 20.0));
        src.draw_on(&mut target);

        assert_eq!(target.canvas().pixel(15, 20), Some(Color::GREEN));
        assert_eq!(target.canvas().pixel(24, 29), Some(Color::GREEN));
        assert_eq!(target.canvas().pixel(14, 20), Some(Color::TRANSPARENT));
        assert_eq!(target.canvas().pixel(25, 20), Some(Color::TRANSPARENT));
    }

    #[test]
    fn transparent_texels_keep_target() {
        let mut target = Texture::new(20.0, 20.0);
        target.clear(Color::BLUE);
        Texture::new(20.0, 20.0).draw_on(&mut target);
        assert_eq!(target.canvas().pixel(7, 7), Some(Color::BLUE));
    }

    #[test]
    fn clone_copies_content() {
        let mut a = Texture::new(10.0, 10.0);
        a.clear(Color::RED);
        let b = a.clone();
        a.clear(Color::BLUE);
        assert_eq!(b.canvas().pixel(0, 0), Some(Color::RED));
    }
}
