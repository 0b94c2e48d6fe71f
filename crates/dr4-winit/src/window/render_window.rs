use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use dr4::{Color, Event, Vec2f, WindowError};
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window as NativeWindow, WindowAttributes};

use super::pump::EventPump;
use crate::canvas::Canvas;
use crate::config::WindowConfig;
use crate::device::{GpuInit, SurfaceErrorAction};
use crate::image::Image;
use crate::shapes::{Circle, Line, Rectangle};
use crate::text::{Font, Text};
use crate::texture::Texture;

/// Pumps allowed for the platform to hand out a requested window.
const OPEN_PUMP_LIMIT: usize = 16;

/// Top-level window of the backend.
///
/// Drawing goes to a CPU back buffer of the window's logical size;
/// [`dr4::Window::display`] uploads it and presents. The native window and
/// event loop exist only while open, and the event loop is created on the
/// first `open`.
pub struct RenderWindow {
    title: String,
    size: Vec2f,
    start_size: Vec2f,
    back_buffer: Canvas,
    event_loop: Option<EventLoop<()>>,
    pump: EventPump,
}

impl RenderWindow {
    pub fn new(config: WindowConfig, gpu_init: GpuInit) -> Self {
        Self {
            title: config.title,
            size: config.size,
            start_size: config.size,
            back_buffer: Canvas::new(pixel_dim(config.size.x), pixel_dim(config.size.y)),
            event_loop: None,
            pump: EventPump::new(gpu_init),
        }
    }

    /// Size the window was created with.
    #[inline]
    pub fn start_size(&self) -> Vec2f {
        self.start_size
    }

    /// Last known cursor position inside the window, in logical pixels.
    #[inline]
    pub fn mouse_pos(&self) -> Vec2f {
        self.pump.cursor()
    }

    #[inline]
    pub fn back_buffer(&self) -> &Canvas {
        &self.back_buffer
    }

    #[inline]
    pub fn text_input_enabled(&self) -> bool {
        self.pump.ime_allowed()
    }

    fn attributes(&self) -> WindowAttributes {
        NativeWindow::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.size.x as f64, self.size.y as f64))
    }

    fn resize_back_buffer(&mut self, size: Vec2f) {
        self.size = size;
        self.back_buffer.resize(pixel_dim(size.x), pixel_dim(size.y));
    }

    fn pump_events(&mut self) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            return;
        };
        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(Duration::ZERO), &mut self.pump) {
            log::warn!("event loop exited with code {code}");
            self.pump.close();
        }
        if let Some(size) = self.pump.take_resize() {
            self.resize_back_buffer(size);
        }
    }
}

fn pixel_dim(v: f32) -> u32 {
    // Saturating: negative and NaN become 0.
    v as u32
}

impl dr4::Window for RenderWindow {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
        if let Some(open) = self.pump.open_window() {
            open.window().set_title(title);
        }
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn size(&self) -> Vec2f {
        self.size
    }

    /// Platforms that resize synchronously report the applied size right away;
    /// the surface and back buffer follow it instead of the requested one.
    fn set_size(&mut self, size: Vec2f) {
        self.resize_back_buffer(size);
        let requested = LogicalSize::new(size.x as f64, size.y as f64);
        let applied = self.pump.open_window_mut().and_then(|open| {
            let physical = open.window().request_inner_size(requested)?;
            open.resize_surface(physical);
            Some(open.logical_size(physical))
        });
        if let Some(applied) = applied {
            self.resize_back_buffer(applied);
        }
    }

    fn open(&mut self) -> Result<(), WindowError> {
        if self.pump.is_open() {
            return Ok(());
        }

        if self.event_loop.is_none() {
            let event_loop = EventLoop::new()
                .context("failed to create winit event loop")
                .map_err(|e| WindowError(format!("{e:#}")))?;
            self.event_loop = Some(event_loop);
        }

        self.pump.request_open(self.attributes());
        for _ in 0..OPEN_PUMP_LIMIT {
            self.pump_events();
            if self.pump.is_open() {
                log::info!("opened window \"{}\" ({}x{})", self.title, self.size.x, self.size.y);
                return Ok(());
            }
            if let Some(e) = self.pump.take_open_error() {
                return Err(WindowError(format!("{e:#}")));
            }
        }

        self.pump.close();
        Err(WindowError("platform did not create the window".to_owned()))
    }

    fn close(&mut self) {
        if self.pump.close() {
            log::debug!("closed window \"{}\"", self.title);
        }
    }

    fn is_open(&self) -> bool {
        self.pump.is_open()
    }

    fn clear(&mut self, color: Color) {
        self.back_buffer.clear(color);
    }

    /// # Panics
    ///
    /// If `texture` was created by another backend.
    fn draw(&mut self, texture: &dyn dr4::Texture) {
        let texture = texture
            .downcast_ref::<Texture>()
            .expect("texture was not created by the winit backend");
        self.back_buffer.blend_canvas(texture.canvas(), Vec2f::zero());
    }

    fn display(&mut self) {
        let Some(open) = self.pump.open_window_mut() else {
            return;
        };
        match open.present(&self.back_buffer) {
            Ok(()) | Err(SurfaceErrorAction::SkipFrame | SurfaceErrorAction::Reconfigured) => {}
            Err(SurfaceErrorAction::Fatal) => {
                log::error!("presentation failed fatally; closing window");
                self.pump.close();
            }
        }
    }

    fn poll_event(&mut self) -> Option<Event> {
        if let Some(event) = self.pump.next_event() {
            return Some(event);
        }
        if !self.pump.is_open() {
            return None;
        }
        self.pump_events();
        self.pump.next_event()
    }

    fn create_texture(&self) -> Box<dyn dr4::Texture> {
        Box::new(Texture::new(self.size.x, self.size.y))
    }

    fn create_image(&self) -> Box<dyn dr4::Image> {
        Box::new(Image::new(self.size.x, self.size.y))
    }

    fn create_font(&self) -> Box<dyn dr4::Font> {
        Box::new(Font::new())
    }

    fn create_line(&self) -> Box<dyn dr4::Line> {
        Box::new(Line::new())
    }

    fn create_circle(&self) -> Box<dyn dr4::Circle> {
        Box::new(Circle::new())
    }

    fn create_rectangle(&self) -> Box<dyn dr4::Rectangle> {
        Box::new(Rectangle::new())
    }

    fn create_text(&self) -> Box<dyn dr4::Text> {
        Box::new(Text::new())
    }

    fn time(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64())
    }

    fn start_text_input(&mut self) {
        self.pump.set_ime_allowed(true);
    }

    fn stop_text_input(&mut self) {
        self.pump.set_ime_allowed(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dr4::{Drawable, Texture as _, Window as _};

    fn window() -> RenderWindow {
        RenderWindow::new(WindowConfig::default(), GpuInit::default())
    }

    // ── closed window ─────────────────────────────────────────────────────

    #[test]
    fn starts_closed_with_default_size() {
        let w = window();
        assert!(!w.is_open());
        assert_eq!(w.size(), Vec2f::new(720.0, 480.0));
        assert_eq!(w.start_size(), w.size());
        assert_eq!(w.title(), "");
    }

    #[test]
    fn poll_on_never_opened_window_is_none() {
        let mut w = window();
        assert_eq!(w.poll_event(), None);
        assert!(w.event_loop.is_none());
    }

    #[test]
    fn display_and_close_on_closed_window_are_noops() {
        let mut w = window();
        w.display();
        w.close();
        assert!(!w.is_open());
    }

    #[test]
    fn title_is_stored_while_closed() {
        let mut w = window();
        w.set_title("dr4");
        assert_eq!(w.title(), "dr4");
    }

    #[test]
    fn set_size_resizes_back_buffer() {
        let mut w = window();
        w.set_size(Vec2f::new(100.0, 50.0));
        assert_eq!(w.size(), Vec2f::new(100.0, 50.0));
        assert_eq!((w.back_buffer().width(), w.back_buffer().height()), (100, 50));
        assert_eq!(w.start_size(), Vec2f::new(720.0, 480.0));
    }

    #[test]
    fn text_input_setting_is_remembered_while_closed() {
        let mut w = window();
        w.start_text_input();
        assert!(w.text_input_enabled());
        w.stop_text_input();
        assert!(!w.text_input_enabled());
    }

    #[test]
    fn time_is_wall_clock_seconds() {
        let w = window();
        let t = w.time();
        assert!(t > 1.0e9);
        assert!(w.time() >= t);
    }

    // ── factories and drawing ─────────────────────────────────────────────

    #[test]
    fn factories_work_while_closed() {
        let w = window();
        let texture = w.create_texture();
        assert_eq!(texture.size(), w.size());
        assert_eq!(w.create_image().size(), w.size());
        assert_eq!(w.create_text().font_size(), crate::text::DEFAULT_FONT_SIZE);
        assert_eq!(w.create_line().thickness(), 1.0);
        assert_eq!(w.create_circle().radius(), 0.0);
        assert_eq!(w.create_rectangle().size(), Vec2f::zero());
    }

    #[test]
    fn clear_then_draw_composites_into_back_buffer() {
        let mut w = window();
        w.clear(Color::BLUE);

        let mut texture = w.create_texture();
        let mut rect = w.create_rectangle();
        rect.set_pos(Vec2f::new(10.0, 10.0));
        rect.set_size(Vec2f::new(5.0, 5.0));
        rect.set_fill_color(Color::RED);
        rect.draw_on(texture.as_mut());

        w.draw(texture.as_ref());
        assert_eq!(w.back_buffer().pixel(12, 12), Some(Color::RED));
        assert_eq!(w.back_buffer().pixel(0, 0), Some(Color::BLUE));
    }

    #[test]
    fn drawing_ignores_texture_pos() {
        let mut w = window();
        let mut texture = w.create_texture();
        texture.clear(Color::GREEN);
        texture.set_pos(Vec2f::new(50.0, 50.0));
        w.draw(texture.as_ref());
        assert_eq!(w.back_buffer().pixel(0, 0), Some(Color::GREEN));
    }
}
