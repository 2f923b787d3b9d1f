//! winit application driving the field and the renderer.
//!
//! The event loop is the only scheduler: every `RedrawRequested` steps the
//! field once, draws it, and immediately requests the next redraw. Mode
//! switches happen between frames, so a stale population is never drawn.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::backdrop::Backdrop;
use crate::field::ParticleField;
use crate::gpu::GpuState;
use crate::time::Time;

pub(crate) struct App {
    settings: Backdrop,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    field: Option<ParticleField>,
    time: Time,
}

impl App {
    pub(crate) fn new(settings: Backdrop) -> Self {
        Self {
            settings,
            window: None,
            gpu: None,
            field: None,
            time: Time::new(),
        }
    }

    fn toggle_mode(&mut self) {
        let (Some(field), Some(gpu)) = (self.field.as_mut(), self.gpu.as_mut()) else {
            return;
        };
        let mode = field.mode().toggled();
        field.set_mode(mode);
        gpu.ensure_capacity(field.particles().len());
        log::info!(
            "Switched to {:?} mode ({} particles)",
            mode,
            field.particles().len()
        );
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.width,
                self.settings.height,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let field = ParticleField::new(
            self.settings.mode,
            size.width as f32,
            size.height as f32,
        );
        log::info!(
            "Spawned {} particles in {:?} mode, {}x{}",
            field.particles().len(),
            field.mode(),
            size.width,
            size.height
        );

        // Drawing-surface acquisition is a startup invariant: abort, never retry.
        let gpu = match pollster::block_on(GpuState::new(
            window.clone(),
            field.particles().len(),
        )) {
            Ok(gpu) => gpu,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.field = Some(field);
        self.gpu = Some(gpu);
        self.time.reset();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                // Surface and bounds follow the window; particles stay put
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                if let Some(field) = &mut self.field {
                    field.resize(physical_size.width as f32, physical_size.height as f32);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if event.state == ElementState::Pressed && !event.repeat {
                        match key {
                            KeyCode::Space => self.toggle_mode(),
                            KeyCode::Escape => event_loop.exit(),
                            _ => {}
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(gpu), Some(field)) = (&mut self.gpu, &mut self.field) {
                    field.step();
                    if self.time.update() {
                        log::debug!("{:.1} fps, frame {}", self.time.fps(), self.time.frame());
                    }

                    match gpu.render(field) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                            width: gpu.config.width,
                            height: gpu.config.height,
                        }),
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("GPU out of memory");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
