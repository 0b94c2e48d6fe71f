use dr4::{Color, Rect2f, Vec2f};

use super::Canvas;

/// Fill and outline for a filled shape.
///
/// A positive `border_thickness` grows the outline outward from the shape's
/// edge; a negative one grows it inward. Zero disables the outline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapePaint {
    pub fill: Color,
    pub border: Color,
    pub border_thickness: f32,
}

impl ShapePaint {
    pub const fn solid(fill: Color) -> Self {
        Self {
            fill,
            border: Color::TRANSPARENT,
            border_thickness: 0.0,
        }
    }

    /// Outward and inward extent of the outline.
    #[inline]
    fn extents(&self) -> (f32, f32) {
        let t = self.border_thickness;
        if t.is_finite() { (t.max(0.0), (-t).max(0.0)) } else { (0.0, 0.0) }
    }
}

impl Canvas {
    /// Rasterizes `local` (in shape space) placed at `origin` and rotated by
    /// `rotation_deg` around it. Pixels are sampled at their centers.
    pub fn fill_rect(&mut self, origin: Vec2f, rotation_deg: f32, local: Rect2f, paint: &ShapePaint) {
        let local = local.normalized();
        let (grow, shrink) = paint.extents();

        let outer = Rect2f::new(
            local.pos.x - grow,
            local.pos.y - grow,
            local.size.x + 2.0 * grow,
            local.size.y + 2.0 * grow,
        );
        if outer.is_empty() || !origin.is_finite() {
            return;
        }
        let inner = Rect2f::new(
            local.pos.x + shrink,
            local.pos.y + shrink,
            (local.size.x - 2.0 * shrink).max(0.0),
            (local.size.y - 2.0 * shrink).max(0.0),
        );

        let (sin, cos) = rotation_deg.to_radians().sin_cos();
        let to_world = |p: Vec2f| origin + Vec2f::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
        let to_local = |p: Vec2f| {
            let d = p - origin;
            Vec2f::new(d.x * cos + d.y * sin, -d.x * sin + d.y * cos)
        };

        let corners = [
            to_world(outer.min()),
            to_world(Vec2f::new(outer.max().x, outer.pos.y)),
            to_world(outer.max()),
            to_world(Vec2f::new(outer.pos.x, outer.max().y)),
        ];
        let Some(span) = self.pixel_span(&corners) else {
            return;
        };

        let outlined = grow > 0.0 || shrink > 0.0;
        for y in span.y0..span.y1 {
            for x in span.x0..span.x1 {
                let p = to_local(Vec2f::new(x as f32 + 0.5, y as f32 + 0.5));
                if !outer.contains(p) {
                    continue;
                }
                if local.contains(p) {
                    self.blend_pixel(x, y, paint.fill, u8::MAX);
                }
                if outlined && !inner.contains(p) {
                    self.blend_pixel(x, y, paint.border, u8::MAX);
                }
            }
        }
    }

    /// Rasterizes a disc of `radius` around `center`.
    pub fn fill_circle(&mut self, center: Vec2f, radius: f32, paint: &ShapePaint) {
        if !center.is_finite() || !radius.is_finite() {
            return;
        }
        let radius = radius.max(0.0);
        let (grow, shrink) = paint.extents();
        let outer = radius + grow;
        let inner = (radius - shrink).max(0.0);
        if outer <= 0.0 {
            return;
        }

        let corners = [
            center - Vec2f::new(outer, outer),
            center + Vec2f::new(outer, outer),
        ];
        let Some(span) = self.pixel_span(&corners) else {
            return;
        };

        let outlined = grow > 0.0 || shrink > 0.0;
        for y in span.y0..span.y1 {
            for x in span.x0..span.x1 {
                let d = (Vec2f::new(x as f32 + 0.5, y as f32 + 0.5) - center).length();
                if d >= outer {
                    continue;
                }
                if d < radius {
                    self.blend_pixel(x, y, paint.fill, u8::MAX);
                }
                if outlined && d >= inner {
                    self.blend_pixel(x, y, paint.border, u8::MAX);
                }
            }
        }
    }

    /// Integer pixel range covering `points`, clipped to the canvas.
    fn pixel_span(&self, points: &[Vec2f]) -> Option<PixelSpan> {
        let (mut min, mut max) = (points[0], points[0]);
        for p in &points[1..] {
            min = Vec2f::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2f::new(max.x.max(p.x), max.y.max(p.y));
        }
        let hull = Rect2f::from_pos_size(min, max - min);
        let clip = hull.intersect(self.bounds())?;

        Some(PixelSpan {
            x0: clip.pos.x.floor() as i32,
            y0: clip.pos.y.floor() as i32,
            x1: clip.max().x.ceil() as i32,
            y1: clip.max().y.ceil() as i32,
        })
    }
}

struct PixelSpan {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}
