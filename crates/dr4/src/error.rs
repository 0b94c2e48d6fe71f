use std::fmt;

/// Font file or buffer could not be read or parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct FontError(pub String);

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontError {}

/// Platform window could not be opened.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowError(pub String);

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window error: {}", self.0)
    }
}

impl std::error::Error for WindowError {}
