use dr4::{Color, Rect2f, Vec2f};

use crate::canvas::ShapePaint;
use crate::texture::native_target;

/// Filled, optionally outlined and rotated rectangle.
#[derive(Debug, Clone)]
pub struct Rectangle {
    pos: Vec2f,
    size: Vec2f,
    rotation: f32,
    paint: ShapePaint,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            pos: Vec2f::zero(),
            size: Vec2f::zero(),
            rotation: 0.0,
            paint: ShapePaint {
                fill: Color::WHITE,
                border: Color::WHITE,
                border_thickness: 0.0,
            },
        }
    }
}

impl Rectangle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotation in degrees around the top-left corner.
    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.rotation += degrees;
    }
}

impl dr4::Drawable for Rectangle {
    fn draw_on(&self, target: &mut dyn dr4::Texture) {
        let target = native_target(target);
        let origin = target.place(self.pos);
        target.canvas_mut().fill_rect(
            origin,
            self.rotation,
            Rect2f::from_pos_size(Vec2f::zero(), self.size),
            &self.paint,
        );
    }

    fn set_pos(&mut self, pos: Vec2f) {
        self.pos = pos;
    }

    fn pos(&self) -> Vec2f {
        self.pos
    }
}

impl dr4::Rectangle for Rectangle {
    fn set_size(&mut self, size: Vec2f) {
        self.size = size;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.paint.fill = color;
    }

    fn set_border_thickness(&mut self, thickness: f32) {
        self.paint.border_thickness = thickness;
    }

    fn set_border_color(&mut self, color: Color) {
        self.paint.border = color;
    }

    fn size(&self) -> Vec2f {
        self.size
    }

    fn fill_color(&self) -> Color {
        self.paint.fill
    }

    fn border_thickness(&self) -> f32 {
        self.paint.border_thickness
    }

    fn border_color(&self) -> Color {
        self.paint.border
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;
    use dr4::{Drawable, Rectangle as _, Texture as _};

    #[test]
    fn accessors_round_trip() {
        let mut r = Rectangle::new();
        r.set_pos(Vec2f::new(1.5, -2.25));
        r.set_size(Vec2f::new(8.0, 3.0));
        r.set_fill_color(Color::RED);
        r.set_border_color(Color::BLUE);
        r.set_border_thickness(-2.0);

        assert_eq!(r.pos(), Vec2f::new(1.5, -2.25));
        assert_eq!(r.size(), Vec2f::new(8.0, 3.0));
        assert_eq!(r.fill_color(), Color::RED);
        assert_eq!(r.border_color(), Color::BLUE);
        assert_eq!(r.border_thickness(), -2.0);
    }

    #[test]
    fn rotate_accumulates() {
        let mut r = Rectangle::new();
        r.set_rotation(30.0);
        r.rotate(15.0);
        assert_eq!(r.rotation(), 45.0);
    }

    #[test]
    fn draws_at_pos_shifted_by_zero() {
        let mut target = Texture::new(20.0, 20.0);
        target.set_zero(Vec2f::new(-2.0, 3.0));

        let mut r = Rectangle::new();
        r.set_pos(Vec2f::new(4.0, 1.0));
        r.set_size(Vec2f::new(3.0, 2.0));
        r.set_fill_color(Color::GREEN);
        r.draw_on(&mut target);

        let c = target.canvas();
        assert_eq!(c.pixel(2, 4), Some(Color::GREEN));
        assert_eq!(c.pixel(4, 5), Some(Color::GREEN));
        assert_eq!(c.pixel(5, 5), Some(Color::TRANSPARENT));
        assert_eq!(c.pixel(4, 1), Some(Color::TRANSPARENT));
    }
}
