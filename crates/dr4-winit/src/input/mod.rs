//! Native input translation.

mod tables;
mod translate;

pub use tables::{map_key_code, map_modifiers, map_mouse_button, map_physical_key};
pub use translate::{EventTranslator, PIXELS_PER_LINE};
