use std::path::Path;
use std::rc::Rc;

use dr4::FontError;

/// Font face backed by `fontdue`.
///
/// Cloning shares the parsed face. A text that was given this font keeps
/// using it even if the font is reloaded afterwards.
#[derive(Clone, Default)]
pub struct Font {
    face: Option<Rc<fontdue::Font>>,
}

impl Font {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontError> {
        let face = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontError(e.to_string()))?;
        Ok(Self { face: Some(Rc::new(face)) })
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.face.is_some()
    }

    #[inline]
    pub(crate) fn face(&self) -> Option<&fontdue::Font> {
        self.face.as_deref()
    }

    fn line_metrics(&self, font_size: f32) -> Option<fontdue::LineMetrics> {
        self.face()?.horizontal_line_metrics(font_size)
    }
}

impl dr4::Font for Font {
    fn load_from_file(&mut self, path: &Path) -> Result<(), FontError> {
        let bytes = std::fs::read(path).map_err(|e| {
            log::warn!("failed to read font {}: {e}", path.display());
            FontError(format!("{}: {e}", path.display()))
        })?;
        self.load_from_buffer(&bytes)?;
        log::debug!("loaded font {}", path.display());
        Ok(())
    }

    fn load_from_buffer(&mut self, bytes: &[u8]) -> Result<(), FontError> {
        let loaded = Self::from_bytes(bytes).inspect_err(|e| log::warn!("{e}"))?;
        *self = loaded;
        Ok(())
    }

    fn ascent(&self, font_size: f32) -> f32 {
        self.line_metrics(font_size).map_or(0.0, |m| m.ascent)
    }

    fn descent(&self, font_size: f32) -> f32 {
        self.line_metrics(font_size).map_or(0.0, |m| -m.descent)
    }
}

/// Resolves a font to this backend's type.
///
/// # Panics
///
/// If `font` was created by another backend.
pub(crate) fn native_font(font: &dyn dr4::Font) -> &Font {
    font.downcast_ref::<Font>()
        .expect("font was not created by the winit backend")
}
