use crate::error::WindowError;
use crate::event::Event;
use crate::math::{Color, Vec2f};
use crate::shapes::{Circle, Line, Rectangle};
use crate::text::{Font, Text};
use crate::texture::{Image, Texture};

/// On-screen window plus the factory for every primitive of its backend.
///
/// A window starts closed. `open` creates the platform window, `close`
/// destroys it again; the object itself survives both.
pub trait Window {
    fn set_title(&mut self, title: &str);
    fn title(&self) -> &str;

    fn size(&self) -> Vec2f;
    /// Resizes the platform window and its view so content keeps its scale.
    fn set_size(&mut self, size: Vec2f);

    fn open(&mut self) -> Result<(), WindowError>;
    fn close(&mut self);
    fn is_open(&self) -> bool;

    /// Fills the back buffer with `color`.
    fn clear(&mut self, color: Color);
    /// Composites `texture` into the back buffer at the window origin.
    ///
    /// # Panics
    ///
    /// Backends panic when `texture` was created by a different backend.
    fn draw(&mut self, texture: &dyn Texture);
    /// Presents the back buffer.
    fn display(&mut self);

    /// Returns the next pending event without blocking.
    ///
    /// Call repeatedly until `None` to drain a frame's events.
    fn poll_event(&mut self) -> Option<Event>;

    fn create_texture(&self) -> Box<dyn Texture>;
    fn create_image(&self) -> Box<dyn Image>;
    fn create_font(&self) -> Box<dyn Font>;
    fn create_line(&self) -> Box<dyn Line>;
    fn create_circle(&self) -> Box<dyn Circle>;
    fn create_rectangle(&self) -> Box<dyn Rectangle>;
    fn create_text(&self) -> Box<dyn Text>;

    /// Wall-clock time in seconds.
    fn time(&self) -> f64;

    fn start_text_input(&mut self);
    fn stop_text_input(&mut self);
}
