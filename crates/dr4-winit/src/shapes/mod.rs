mod circle;
mod line;
mod rect;

pub use circle::Circle;
pub use line::{Line, DEFAULT_LINE_THICKNESS};
pub use rect::Rectangle;
