use dr4::{Rect2f, VAlign, Vec2f};
use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

/// One rasterized glyph relative to the run's layout origin (top of the line box).
#[derive(Debug, Clone)]
pub(crate) struct PlacedGlyph {
    pub x: f32,
    pub y: f32,
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

/// Shaped and rasterized single-line text.
#[derive(Debug, Clone, Default)]
pub(crate) struct GlyphRun {
    pub glyphs: Vec<PlacedGlyph>,
    /// Ink extent vertically, pen extent horizontally.
    pub bounds: Rect2f,
}

pub(crate) fn shape_run(font: &fontdue::Font, text: &str, size: f32) -> GlyphRun {
    if text.is_empty() || !size.is_finite() || size <= 0.0 {
        return GlyphRun::default();
    }

    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &TextStyle::new(text, size, 0));

    let mut glyphs = Vec::new();
    let mut right = 0.0f32;
    let (mut top, mut bottom) = (f32::INFINITY, f32::NEG_INFINITY);

    for g in layout.glyphs() {
        let m = font.metrics_indexed(g.key.glyph_index, size);
        right = right.max(g.x - m.xmin as f32 + m.advance_width);

        if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
            continue;
        }
        let (metrics, coverage) = font.rasterize_config(g.key);
        if metrics.width == 0 || metrics.height == 0 {
            continue;
        }
        top = top.min(g.y);
        bottom = bottom.max(g.y + metrics.height as f32);
        glyphs.push(PlacedGlyph {
            x: g.x,
            y: g.y,
            width: metrics.width,
            height: metrics.height,
            coverage,
        });
    }

    let bounds = if glyphs.is_empty() {
        Rect2f::new(0.0, 0.0, right, 0.0)
    } else {
        Rect2f::new(0.0, top, right, bottom - top)
    };
    GlyphRun { glyphs, bounds }
}

/// Layout origin for a run of ink height `height` anchored at `pos`.
pub(crate) fn aligned_origin(pos: Vec2f, valign: VAlign, height: f32, descent: f32) -> Vec2f {
    let y = match valign {
        VAlign::Top => pos.y,
        VAlign::Middle => pos.y - height / 2.0,
        VAlign::Bottom => pos.y - height,
        VAlign::Baseline => pos.y - height + descent,
    };
    Vec2f::new(pos.x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POS: Vec2f = Vec2f::new(10.0, 100.0);

    // ── vertical alignment ────────────────────────────────────────────────

    #[test]
    fn top_keeps_pos() {
        assert_eq!(aligned_origin(POS, VAlign::Top, 24.0, 6.0), POS);
    }

    #[test]
    fn middle_lifts_by_half_height() {
        assert_eq!(aligned_origin(POS, VAlign::Middle, 24.0, 6.0), Vec2f::new(10.0, 88.0));
    }

    #[test]
    fn bottom_lifts_by_height() {
        assert_eq!(aligned_origin(POS, VAlign::Bottom, 24.0, 6.0), Vec2f::new(10.0, 76.0));
    }

    #[test]
    fn baseline_adds_descent_back() {
        assert_eq!(aligned_origin(POS, VAlign::Baseline, 24.0, 6.0), Vec2f::new(10.0, 82.0));
    }

    #[test]
    fn x_is_never_shifted() {
        for v in [VAlign::Top, VAlign::Middle, VAlign::Bottom, VAlign::Baseline] {
            assert_eq!(aligned_origin(POS, v, 50.0, 9.0).x, POS.x);
        }
    }

    // ── shaping ───────────────────────────────────────────────────────────

    #[test]
    fn empty_text_has_no_glyphs() {
        let Some(font) = crate::text::test_fonts::system_font() else {
            return;
        };
        let run = shape_run(font.face().unwrap(), "", 30.0);
        assert!(run.glyphs.is_empty());
        assert_eq!(run.bounds, Rect2f::default());
    }

    #[test]
    fn run_grows_with_text() {
        let Some(font) = crate::text::test_fonts::system_font() else {
            return;
        };
        let face = font.face().unwrap();
        let short = shape_run(face, "Hi", 30.0);
        let long = shape_run(face, "Hi there", 30.0);

        assert!(!short.glyphs.is_empty());
        assert!(long.bounds.size.x > short.bounds.size.x);
        assert!(short.bounds.size.y > 0.0);
        for g in &long.glyphs {
            assert_eq!(g.coverage.len(), g.width * g.height);
        }
    }

    #[test]
    fn whitespace_has_width_but_no_ink() {
        let Some(font) = crate::text::test_fonts::system_font() else {
            return;
        };
        let run = shape_run(font.face().unwrap(), "   ", 30.0);
        assert!(run.glyphs.is_empty());
        assert!(run.bounds.size.x > 0.0);
        assert_eq!(run.bounds.size.y, 0.0);
    }
}
