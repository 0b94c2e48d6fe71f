use dr4::{Color, Font as _, VAlign, Vec2f};

use super::font::{native_font, Font};
use super::layout::{aligned_origin, shape_run, GlyphRun};
use crate::texture::native_target;

pub const DEFAULT_FONT_SIZE: f32 = 30.0;

/// Single-line text laid out with `fontdue` and drawn as coverage masks.
///
/// Shaping is redone only when the string, size or font change; moving the
/// text or changing its alignment just recomputes the origin.
#[derive(Clone)]
pub struct Text {
    font: Font,
    text: String,
    color: Color,
    font_size: f32,
    valign: VAlign,
    pos: Vec2f,
    run: GlyphRun,
    origin: Vec2f,
}

#[derive(Copy, Clone, PartialEq)]
enum Relayout {
    Shape,
    Place,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            font: Font::default(),
            text: String::new(),
            color: Color::WHITE,
            font_size: DEFAULT_FONT_SIZE,
            valign: VAlign::Top,
            pos: Vec2f::zero(),
            run: GlyphRun::default(),
            origin: Vec2f::zero(),
        }
    }
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the top of the line box lands after vertical alignment.
    #[inline]
    pub fn origin(&self) -> Vec2f {
        self.origin
    }

    fn relayout(&mut self, what: Relayout) {
        if what == Relayout::Shape {
            self.run = match self.font.face() {
                Some(face) => shape_run(face, &self.text, self.font_size),
                None => GlyphRun::default(),
            };
        }
        let descent = self.font.descent(self.font_size);
        self.origin = aligned_origin(self.pos, self.valign, self.run.bounds.size.y, descent);
    }
}

impl dr4::Drawable for Text {
    fn draw_on(&self, target: &mut dyn dr4::Texture) {
        if self.run.glyphs.is_empty() {
            return;
        }
        let target = native_target(target);
        let origin = target.place(self.origin);
        let canvas = target.canvas_mut();
        for g in &self.run.glyphs {
            canvas.blend_mask(
                (origin.x + g.x).round() as i32,
                (origin.y + g.y).round() as i32,
                g.width,
                g.height,
                &g.coverage,
                self.color,
            );
        }
    }

    fn set_pos(&mut self, pos: Vec2f) {
        self.pos = pos;
        self.relayout(Relayout::Place);
    }

    fn pos(&self) -> Vec2f {
        self.pos
    }
}

impl dr4::Text for Text {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
        self.relayout(Relayout::Shape);
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
        self.relayout(Relayout::Shape);
    }

    fn set_valign(&mut self, align: VAlign) {
        self.valign = align;
        self.relayout(Relayout::Place);
    }

    fn set_font(&mut self, font: &dyn dr4::Font) {
        self.font = native_font(font).clone();
        self.relayout(Relayout::Shape);
    }

    fn bounds(&self) -> Vec2f {
        self.run.bounds.size
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn color(&self) -> Color {
        self.color
    }

    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn valign(&self) -> VAlign {
        self.valign
    }

    fn font(&self) -> &dyn dr4::Font {
        &self.font
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::test_fonts::system_font;
    use crate::texture::Texture;
    use dr4::{Drawable, Font as _, Text as _};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    // ── without a font ────────────────────────────────────────────────────

    #[test]
    fn defaults() {
        let t = Text::new();
        assert_eq!(t.font_size(), DEFAULT_FONT_SIZE);
        assert_eq!(t.valign(), VAlign::Top);
        assert_eq!(t.color(), Color::WHITE);
        assert_eq!(t.bounds(), Vec2f::zero());
    }

    #[test]
    fn fontless_text_keeps_string_and_draws_nothing() {
        let mut t = Text::new();
        t.set_text("hello");
        assert_eq!(t.text(), "hello");
        assert_eq!(t.bounds(), Vec2f::zero());

        let mut target = Texture::new(20.0, 20.0);
        t.draw_on(&mut target);
        assert_eq!(target.canvas(), Texture::new(20.0, 20.0).canvas());
    }

    #[test]
    fn pos_round_trips() {
        let mut t = Text::new();
        let p = Vec2f::new(0.1, 3.7);
        t.set_pos(p);
        assert_eq!(t.pos(), p);
        assert_eq!(t.origin(), p);
    }

    // ── with a system font ────────────────────────────────────────────────

    #[test]
    fn alignment_shifts_origin_by_bounds() {
        let Some(font) = system_font() else {
            return;
        };
        let mut t = Text::new();
        t.set_font(&font);
        t.set_text("Align me");
        t.set_pos(Vec2f::new(40.0, 200.0));
        let h = t.bounds().y;
        assert!(h > 0.0);

        t.set_valign(VAlign::Top);
        let top = t.origin().y;
        t.set_valign(VAlign::Middle);
        let middle = t.origin().y;
        t.set_valign(VAlign::Bottom);
        let bottom = t.origin().y;
        t.set_valign(VAlign::Baseline);
        let baseline = t.origin().y;

        assert_eq!(top, 200.0);
        assert!(approx(top - middle, h / 2.0));
        assert!(approx(top - bottom, h));
        assert!(approx(baseline - bottom, font.descent(30.0)));
        assert_eq!(t.origin().x, 40.0);
    }

    #[test]
    fn moving_keeps_bounds() {
        let Some(font) = system_font() else {
            return;
        };
        let mut t = Text::new();
        t.set_font(&font);
        t.set_text("xyz");
        let before = t.bounds();
        t.set_pos(Vec2f::new(300.0, -20.0));
        assert_eq!(t.bounds(), before);
    }

    #[test]
    fn larger_size_grows_bounds() {
        let Some(font) = system_font() else {
            return;
        };
        let mut t = Text::new();
        t.set_font(&font);
        t.set_text("Grow");
        let small = t.bounds();
        t.set_font_size(60.0);
        let big = t.bounds();
        assert!(big.x > small.x);
        assert!(big.y > small.y);
    }

    #[test]
    fn draws_ink_in_color() {
        let Some(font) = system_font() else {
            return;
        };
        let mut t = Text::new();
        t.set_font(&font);
        t.set_color(Color::RED);
        t.set_text("HH");
        t.set_pos(Vec2f::new(5.0, 5.0));

        let mut target = Texture::new(200.0, 80.0);
        t.draw_on(&mut target);
        let bytes = target.canvas().as_bytes();
        assert!(bytes.chunks(4).any(|p| p == [255, 0, 0, 255]));
        assert!(bytes.chunks(4).all(|p| p[1] == 0 && p[2] == 0));
    }

    #[test]
    fn text_far_outside_target_draws_nothing() {
        let Some(font) = system_font() else {
            return;
        };
        let mut t = Text::new();
        t.set_font(&font);
        t.set_text("HH");

        let mut target = Texture::new(50.0, 50.0);
        for pos in [Vec2f::new(3.0e9, 5.0), Vec2f::new(5.0, 3.0e9), Vec2f::new(-3.0e9, -3.0e9)] {
            t.set_pos(pos);
            t.draw_on(&mut target);
        }
        assert_eq!(target.canvas(), Texture::new(50.0, 50.0).canvas());
    }
}
