use dr4::{Circle as _, Color, Vec2f};

use crate::canvas::ShapePaint;
use crate::texture::native_target;

/// Which point the host placed last. The other one is derived from the radius.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Anchor {
    Center(Vec2f),
    Corner(Vec2f),
}

/// Filled circle addressed by its center; `pos` is the bounding box corner.
#[derive(Debug, Clone)]
pub struct Circle {
    anchor: Anchor,
    radius: f32,
    paint: ShapePaint,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            anchor: Anchor::Center(Vec2f::zero()),
            radius: 0.0,
            paint: ShapePaint {
                fill: Color::WHITE,
                border: Color::WHITE,
                border_thickness: 0.0,
            },
        }
    }
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn extent(&self) -> Vec2f {
        Vec2f::new(self.radius, self.radius)
    }
}

impl dr4::Drawable for Circle {
    fn draw_on(&self, target: &mut dyn dr4::Texture) {
        let target = native_target(target);
        let center = target.place(self.center());
        target.canvas_mut().fill_circle(center, self.radius, &self.paint);
    }

    fn set_pos(&mut self, pos: Vec2f) {
        self.anchor = Anchor::Corner(pos);
    }

    fn pos(&self) -> Vec2f {
        match self.anchor {
            Anchor::Center(c) => c - self.extent(),
            Anchor::Corner(p) => p,
        }
    }
}

impl dr4::Circle for Circle {
    fn set_center(&mut self, center: Vec2f) {
        self.anchor = Anchor::Center(center);
    }

    /// Keeps the center in place.
    fn set_radius(&mut self, radius: f32) {
        let center = self.center();
        self.radius = radius;
        self.anchor = Anchor::Center(center);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.paint.fill = color;
    }

    fn set_border_color(&mut self, color: Color) {
        self.paint.border = color;
    }

    fn set_border_thickness(&mut self, thickness: f32) {
        self.paint.border_thickness = thickness;
    }

    fn center(&self) -> Vec2f {
        match self.anchor {
            Anchor::Center(c) => c,
            Anchor::Corner(p) => p + self.extent(),
        }
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn fill_color(&self) -> Color {
        self.paint.fill
    }

    fn border_color(&self) -> Color {
        self.paint.border
    }

    fn border_thickness(&self) -> f32 {
        self.paint.border_thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;
    use dr4::{Circle as _, Drawable};

    #[test]
    fn pos_and_center_differ_by_radius() {
        let mut c = Circle::new();
        c.set_radius(5.0);
        c.set_center(Vec2f::new(20.0, 30.0));
        assert_eq!(c.pos(), Vec2f::new(15.0, 25.0));

        c.set_pos(Vec2f::new(0.0, 0.0));
        assert_eq!(c.center(), Vec2f::new(5.0, 5.0));
    }

    #[test]
    fn pos_round_trips_exactly() {
        let mut c = Circle::new();
        c.set_radius(7.3);
        let p = Vec2f::new(0.1, 1.0e7);
        c.set_pos(p);
        assert_eq!(c.pos(), p);
    }

    #[test]
    fn center_round_trips_exactly() {
        let mut c = Circle::new();
        c.set_radius(7.3);
        let p = Vec2f::new(0.1, 3.3);
        c.set_center(p);
        assert_eq!(c.center(), p);
    }

    #[test]
    fn radius_change_keeps_center() {
        let mut c = Circle::new();
        c.set_center(Vec2f::new(10.0, 10.0));
        c.set_radius(4.0);
        assert_eq!(c.center(), Vec2f::new(10.0, 10.0));
        assert_eq!(c.pos(), Vec2f::new(6.0, 6.0));
    }

    #[test]
    fn draws_around_center() {
        let mut target = Texture::new(30.0, 30.0);
        let mut c = Circle::new();
        c.set_center(Vec2f::new(10.0, 10.0));
        c.set_radius(3.0);
        c.set_fill_color(Color::RED);
        c.set_border_color(Color::BLUE);
        c.set_border_thickness(2.0);
        c.draw_on(&mut target);

        let canvas = target.canvas();
        assert_eq!(canvas.pixel(10, 10), Some(Color::RED));
        assert_eq!(canvas.pixel(13, 10), Some(Color::BLUE));
        assert_eq!(canvas.pixel(20, 10), Some(Color::TRANSPARENT));
    }
}
