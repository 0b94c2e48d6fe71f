use dr4::{Color, Rect2f, Vec2f};

use crate::canvas::ShapePaint;
use crate::texture::native_target;

pub const DEFAULT_LINE_THICKNESS: f32 = 1.0;

/// Segment drawn as a thin rectangle rotated about its start point.
///
/// Until an end point is set the segment has zero length.
#[derive(Debug, Clone)]
pub struct Line {
    start: Vec2f,
    end: Option<Vec2f>,
    color: Color,
    thickness: f32,
    length: f32,
    rotation: f32,
}

impl Default for Line {
    fn default() -> Self {
        Self {
            start: Vec2f::zero(),
            end: None,
            color: Color::WHITE,
            thickness: DEFAULT_LINE_THICKNESS,
            length: 0.0,
            rotation: 0.0,
        }
    }
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Direction of the segment in degrees, clockwise from +x (y points down).
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    fn set_start_point(&mut self, start: Vec2f) {
        self.start = start;
        self.update_geometry();
    }

    fn update_geometry(&mut self) {
        let Some(end) = self.end else {
            self.length = 0.0;
            self.rotation = 0.0;
            return;
        };
        let d = end - self.start;
        self.length = d.length();
        self.rotation = d.y.atan2(d.x).to_degrees();
    }
}

impl dr4::Drawable for Line {
    fn draw_on(&self, target: &mut dyn dr4::Texture) {
        if self.length <= 0.0 {
            return;
        }
        let target = native_target(target);
        let origin = target.place(self.start);
        let body = Rect2f::new(0.0, -self.thickness / 2.0, self.length, self.thickness);
        target
            .canvas_mut()
            .fill_rect(origin, self.rotation, body, &ShapePaint::solid(self.color));
    }

    fn set_pos(&mut self, pos: Vec2f) {
        self.set_start_point(pos);
    }

    fn pos(&self) -> Vec2f {
        self.start
    }
}

impl dr4::Line for Line {
    fn set_start(&mut self, start: Vec2f) {
        self.set_start_point(start);
    }

    fn set_end(&mut self, end: Vec2f) {
        self.end = Some(end);
        self.update_geometry();
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_thickness(&mut self, thickness: f32) {
        self.thickness = thickness;
    }

    fn start(&self) -> Vec2f {
        self.start
    }

    fn end(&self) -> Vec2f {
        self.end.unwrap_or(self.start)
    }

    fn color(&self) -> Color {
        self.color
    }

    fn thickness(&self) -> f32 {
        self.thickness
    }
}
