use downcast_rs::impl_downcast;

use crate::drawable::Drawable;
use crate::math::{Color, Vec2f};

/// Straight segment with a thickness.
///
/// `set_pos`/`pos` alias the start point.
pub trait Line: Drawable {
    fn set_start(&mut self, start: Vec2f);
    fn set_end(&mut self, end: Vec2f);
    fn set_color(&mut self, color: Color);
    fn set_thickness(&mut self, thickness: f32);

    fn start(&self) -> Vec2f;
    fn end(&self) -> Vec2f;
    fn color(&self) -> Color;
    fn thickness(&self) -> f32;
}
impl_downcast!(Line);

/// Filled circle with an optional border.
///
/// `set_pos`/`pos` address the top-left corner of the bounding box.
pub trait Circle: Drawable {
    fn set_center(&mut self, center: Vec2f);
    fn set_radius(&mut self, radius: f32);
    fn set_fill_color(&mut self, color: Color);
    fn set_border_color(&mut self, color: Color);
    fn set_border_thickness(&mut self, thickness: f32);

    fn center(&self) -> Vec2f;
    fn radius(&self) -> f32;
    fn fill_color(&self) -> Color;
    fn border_color(&self) -> Color;
    fn border_thickness(&self) -> f32;
}
impl_downcast!(Circle);

/// Filled rectangle with an optional border, positioned by its top-left corner.
pub trait Rectangle: Drawable {
    fn set_size(&mut self, size: Vec2f);
    fn set_fill_color(&mut self, color: Color);
    fn set_border_thickness(&mut self, thickness: f32);
    fn set_border_color(&mut self, color: Color);

    fn size(&self) -> Vec2f;
    fn fill_color(&self) -> Color;
    fn border_thickness(&self) -> f32;
    fn border_color(&self) -> Color;
}
impl_downcast!(Rectangle);
