use std::collections::VecDeque;

use anyhow::{Context, Result};
use dr4::{Event, Vec2f};
use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::canvas::Canvas;
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::input::EventTranslator;
use crate::present::{present_canvas, BlitRenderer};

/// Native window together with the GPU surface that borrows it.
#[self_referencing]
pub(super) struct OpenWindow {
    blit: BlitRenderer,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl OpenWindow {
    fn create(event_loop: &ActiveEventLoop, attrs: WindowAttributes, gpu_init: GpuInit) -> Result<Self> {
        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        OpenWindowTryBuilder {
            blit: BlitRenderer::new(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
    }

    pub(super) fn window(&self) -> &Window {
        self.borrow_window()
    }

    /// Reconfigures the GPU surface for a new inner size.
    pub(super) fn resize_surface(&mut self, size: PhysicalSize<u32>) {
        self.with_gpu_mut(|gpu| gpu.resize(size));
    }

    /// Logical size matching `size` at the window's current scale factor.
    pub(super) fn logical_size(&self, size: PhysicalSize<u32>) -> Vec2f {
        to_logical_size(size, self.window().scale_factor())
    }

    pub(super) fn present(&mut self, canvas: &Canvas) -> Result<(), SurfaceErrorAction> {
        self.with_mut(|fields| {
            fields.window.pre_present_notify();
            present_canvas(fields.gpu, fields.blit, canvas)
        })
    }
}

/// winit application state driven by `pump_app_events`.
///
/// Windows can only be created from inside the event loop, so opening is a
/// request that the next pump fulfils.
pub(super) struct EventPump {
    gpu_init: GpuInit,
    pending: Option<WindowAttributes>,
    open: Option<OpenWindow>,
    open_error: Option<anyhow::Error>,
    translator: EventTranslator,
    queue: VecDeque<Event>,
    resized: Option<Vec2f>,
    ime_allowed: bool,
}

impl EventPump {
    pub(super) fn new(gpu_init: GpuInit) -> Self {
        Self {
            gpu_init,
            pending: None,
            open: None,
            open_error: None,
            translator: EventTranslator::new(),
            queue: VecDeque::new(),
            resized: None,
            ime_allowed: false,
        }
    }

    pub(super) fn request_open(&mut self, attrs: WindowAttributes) {
        self.open_error = None;
        self.pending = Some(attrs);
    }

    pub(super) fn take_open_error(&mut self) -> Option<anyhow::Error> {
        self.open_error.take()
    }

    pub(super) fn close(&mut self) -> bool {
        self.pending = None;
        self.open.take().is_some()
    }

    #[inline]
    pub(super) fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub(super) fn open_window(&self) -> Option<&OpenWindow> {
        self.open.as_ref()
    }

    pub(super) fn open_window_mut(&mut self) -> Option<&mut OpenWindow> {
        self.open.as_mut()
    }

    pub(super) fn next_event(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }

    /// Logical size the platform last resized the window to, if it changed.
    pub(super) fn take_resize(&mut self) -> Option<Vec2f> {
        self.resized.take()
    }

    #[inline]
    pub(super) fn cursor(&self) -> Vec2f {
        self.translator.cursor()
    }

    /// Remembered across close and reopen.
    pub(super) fn set_ime_allowed(&mut self, allowed: bool) {
        self.ime_allowed = allowed;
        if let Some(open) = &self.open {
            open.window().set_ime_allowed(allowed);
        }
    }

    #[inline]
    pub(super) fn ime_allowed(&self) -> bool {
        self.ime_allowed
    }

    fn create_pending(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attrs) = self.pending.take() else {
            return;
        };
        match OpenWindow::create(event_loop, attrs, self.gpu_init.clone()) {
            Ok(open) => {
                open.window().set_ime_allowed(self.ime_allowed);
                self.open = Some(open);
            }
            Err(e) => {
                log::error!("failed to open window: {e:#}");
                self.open_error = Some(e);
            }
        }
    }
}

impl ApplicationHandler for EventPump {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending(event_loop);
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(open) = self.open.as_mut() else {
            return;
        };
        if open.window().id() != window_id {
            return;
        }

        match &event {
            WindowEvent::Resized(new_size) => {
                open.resize_surface(*new_size);
                self.resized = Some(open.logical_size(*new_size));
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = open.window().inner_size();
                open.resize_surface(new_size);
            }
            _ => {}
        }

        let scale_factor = open.window().scale_factor();
        self.translator.translate(&event, scale_factor, &mut self.queue);
    }
}

fn to_logical_size(size: PhysicalSize<u32>, scale_factor: f64) -> Vec2f {
    let logical = size.to_logical::<f32>(scale_factor);
    Vec2f::new(logical.width, logical.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_size_divides_by_scale_factor() {
        assert_eq!(to_logical_size(PhysicalSize::new(1440, 960), 2.0), Vec2f::new(720.0, 480.0));
        assert_eq!(to_logical_size(PhysicalSize::new(300, 200), 1.0), Vec2f::new(300.0, 200.0));
    }

    #[test]
    fn closed_pump_has_no_pending_resize() {
        let mut pump = EventPump::new(GpuInit::default());
        assert!(!pump.is_open());
        assert_eq!(pump.take_resize(), None);
        assert!(!pump.close());
    }
}
