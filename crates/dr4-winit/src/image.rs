use dr4::{Color, Vec2f};

use crate::canvas::Canvas;
use crate::texture::native_target;

/// Host-editable pixel buffer.
///
/// New images are opaque black. Drawing one replaces the covered target
/// pixels instead of blending over them.
#[derive(Debug, Clone)]
pub struct Image {
    canvas: Canvas,
    size: Vec2f,
    pos: Vec2f,
}

impl Image {
    pub fn new(width: f32, height: f32) -> Self {
        let size = Vec2f::new(width, height);
        Self {
            canvas: pixel_canvas(size),
            size,
            pos: Vec2f::zero(),
        }
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

fn pixel_canvas(size: Vec2f) -> Canvas {
    // Saturating casts: negative and NaN extents become empty.
    Canvas::filled(size.x as u32, size.y as u32, Color::BLACK)
}

fn coords(x: usize, y: usize) -> Option<(u32, u32)> {
    Some((u32::try_from(x).ok()?, u32::try_from(y).ok()?))
}

impl dr4::Drawable for Image {
    fn draw_on(&self, target: &mut dyn dr4::Texture) {
        let target = native_target(target);
        let at = target.place(self.pos);
        target.canvas_mut().copy_canvas(&self.canvas, at);
    }

    fn set_pos(&mut self, pos: Vec2f) {
        self.pos = pos;
    }

    fn pos(&self) -> Vec2f {
        self.pos
    }
}

impl dr4::Image for Image {
    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        let written = coords(x, y).is_some_and(|(x, y)| self.canvas.set_pixel(x, y, color));
        if !written {
            log::trace!("set_pixel({x}, {y}) outside {}x{} image", self.canvas.width(), self.canvas.height());
        }
    }

    fn pixel(&self, x: usize, y: usize) -> Color {
        coords(x, y)
            .and_then(|(x, y)| self.canvas.pixel(x, y))
            .unwrap_or(Color::TRANSPARENT)
    }

    fn set_size(&mut self, size: Vec2f) {
        self.size = size;
        self.canvas = pixel_canvas(size);
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;
    use dr4::{Drawable, Image as _, Texture as _};

    #[test]
    fn new_image_is_opaque_black() {
        let img = Image::new(4.0, 3.0);
        assert_eq!(img.pixel(3, 2), Color::BLACK);
        assert_eq!(img.size(), Vec2f::new(4.0, 3.0));
    }

    #[test]
    fn pixels_round_trip() {
        let mut img = Image::new(4.0, 4.0);
        img.set_pixel(1, 2, Color::new(10, 20, 30, 40));
        assert_eq!(img.pixel(1, 2), Color::new(10, 20, 30, 40));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut img = Image::new(2.0, 2.0);
        img.set_pixel(2, 0, Color::RED);
        img.set_pixel(usize::MAX, 0, Color::RED);
        assert_eq!(img.pixel(2, 0), Color::TRANSPARENT);
        assert_eq!(img.pixel(1, 0), Color::BLACK);
    }

    #[test]
    fn set_size_resets_pixels() {
        let mut img = Image::new(2.0, 2.0);
        img.set_pixel(0, 0, Color::RED);
        img.set_size(Vec2f::new(3.0, 1.0));
        assert_eq!(img.width(), 3.0);
        assert_eq!(img.pixel(0, 0), Color::BLACK);
        assert_eq!(img.pixel(0, 1), Color::TRANSPARENT);
    }

    #[test]
    fn drawing_replaces_target_pixels() {
        let mut target = Texture::new(20.0, 20.0);
        target.clear(Color::BLUE);

        let mut img = Image::new(2.0, 2.0);
        img.set_pixel(0, 0, Color::TRANSPARENT);
        img.set_pos(Vec2f::new(3.0, 4.0));
        img.draw_on(&mut target);

        assert_eq!(target.canvas().pixel(3, 4), Some(Color::TRANSPARENT));
        assert_eq!(target.canvas().pixel(4, 5), Some(Color::BLACK));
        assert_eq!(target.canvas().pixel(5, 5), Some(Color::BLUE));
    }
}
