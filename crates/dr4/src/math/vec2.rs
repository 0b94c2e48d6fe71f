use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 2D vector in logical pixels (+X right, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2f {
    type Output = Vec2f;
    #[inline]
    fn add(self, rhs: Vec2f) -> Vec2f {
        Vec2f::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2f {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2f) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2f {
    type Output = Vec2f;
    #[inline]
    fn sub(self, rhs: Vec2f) -> Vec2f {
        Vec2f::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2f {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2f) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec2f {
    type Output = Vec2f;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2f {
        Vec2f::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2f {
    type Output = Vec2f;
    #[inline]
    fn div(self, rhs: f32) -> Vec2f {
        Vec2f::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2f {
    type Output = Vec2f;
    #[inline]
    fn neg(self) -> Vec2f {
        Vec2f::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Vec2f {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
