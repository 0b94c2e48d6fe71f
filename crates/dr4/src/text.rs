use std::path::Path;

use downcast_rs::{impl_downcast, Downcast};

use crate::drawable::Drawable;
use crate::error::FontError;
use crate::math::{Color, Vec2f};

/// Loaded typeface.
pub trait Font: Downcast {
    fn load_from_file(&mut self, path: &Path) -> Result<(), FontError>;
    fn load_from_buffer(&mut self, bytes: &[u8]) -> Result<(), FontError>;

    /// Distance from the baseline to the top of the tallest glyphs at `font_size`.
    fn ascent(&self, font_size: f32) -> f32;
    /// Distance from the baseline to the bottom of the lowest glyphs at `font_size`.
    fn descent(&self, font_size: f32) -> f32;
}
impl_downcast!(Font);

/// Vertical placement of a text run relative to its position.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum VAlign {
    /// Position is the top of the run.
    #[default]
    Top,
    /// Position is the vertical center of the run.
    Middle,
    /// Position is the bottom of the run.
    Bottom,
    /// Position is the baseline of the run.
    Baseline,
}

/// Single-line text run.
pub trait Text: Drawable {
    fn set_text(&mut self, text: &str);
    fn set_color(&mut self, color: Color);
    fn set_font_size(&mut self, size: f32);
    fn set_valign(&mut self, align: VAlign);
    /// Copies `font` into this text.
    ///
    /// # Panics
    ///
    /// Backends panic when `font` was created by a different backend.
    fn set_font(&mut self, font: &dyn Font);

    /// Measured width and height of the laid-out run.
    fn bounds(&self) -> Vec2f;
    fn text(&self) -> &str;
    fn color(&self) -> Color;
    fn font_size(&self) -> f32;
    fn valign(&self) -> VAlign;
    fn font(&self) -> &dyn Font;
}
impl_downcast!(Text);
