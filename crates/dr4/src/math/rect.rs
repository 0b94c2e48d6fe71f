use super::Vec2f;

/// Axis-aligned rectangle (top-left origin + extent).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect2f {
    pub pos: Vec2f,
    pub size: Vec2f,
}

impl Rect2f {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2f::new(x, y),
            size: Vec2f::new(w, h),
        }
    }

    #[inline]
    pub const fn from_pos_size(pos: Vec2f, size: Vec2f) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(self) -> Vec2f {
        self.pos
    }

    #[inline]
    pub fn max(self) -> Vec2f {
        self.pos + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Flips negative extents so width and height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let (x, w) = if self.size.x < 0.0 {
            (self.pos.x + self.size.x, -self.size.x)
        } else {
            (self.pos.x, self.size.x)
        };
        let (y, h) = if self.size.y < 0.0 {
            (self.pos.y + self.size.y, -self.size.y)
        } else {
            (self.pos.y, self.size.y)
        };
        Rect2f::new(x, y, w, h)
    }

    /// Half-open containment: `[min, max)`.
    #[inline]
    pub fn contains(self, p: Vec2f) -> bool {
        let r = self.normalized();
        let max = r.max();
        p.x >= r.pos.x && p.y >= r.pos.y && p.x < max.x && p.y < max.y
    }

    /// Overlapping region, or `None` when the rectangles only touch or are disjoint.
    #[inline]
    pub fn intersect(self, other: Rect2f) -> Option<Rect2f> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.pos.x.max(b.pos.x);
        let y0 = a.pos.y.max(b.pos.y);
        let x1 = a.max().x.min(b.max().x);
        let y1 = a.max().y.min(b.max().y);

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect2f::new(x0, y0, x1 - x0, y1 - y0))
        }
    }
}
