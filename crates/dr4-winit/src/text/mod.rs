//! Fonts and single-line text.

mod font;
mod label;
mod layout;

pub use font::Font;
pub use label::{Text, DEFAULT_FONT_SIZE};

#[cfg(test)]
pub(crate) mod test_fonts {
    use super::Font;

    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    /// First usable font installed on the machine, if any.
    pub fn system_font() -> Option<Font> {
        CANDIDATES
            .iter()
            .filter_map(|path| std::fs::read(path).ok())
            .find_map(|bytes| Font::from_bytes(&bytes).ok())
    }
}
