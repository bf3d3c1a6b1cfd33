//! Windowed viewer for sketches.
//!
//! Wraps winit's `ApplicationHandler` around a [`Sketch`]: left-drag orbits
//! the camera, scroll zooms, Escape closes. GPU setup happens on `resumed`;
//! a failure there is stashed and surfaced when the event loop returns.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::error::ViewerError;
use crate::gpu::GpuState;
use crate::scene::{Frame, Sketch};
use crate::time::Time;

/// Opens a window and runs a sketch until the window closes.
pub struct Viewer {
    title: String,
    width: u32,
    height: u32,
}

impl Viewer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: 1280,
            height: 720,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Run the event loop. Blocks until the window closes.
    pub fn run<S: Sketch>(self, sketch: S) -> Result<(), ViewerError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App {
            title: self.title,
            width: self.width,
            height: self.height,
            sketch,
            frame: Frame::new(),
            time: Time::new(),
            window: None,
            gpu_state: None,
            init_error: None,
            mouse_pressed: false,
            last_mouse_pos: None,
        };
        event_loop.run_app(&mut app)?;

        match app.init_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct App<S: Sketch> {
    title: String,
    width: u32,
    height: u32,
    sketch: S,
    frame: Frame,
    time: Time,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    init_error: Option<ViewerError>,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
}

impl<S: Sketch> App<S> {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ViewerError> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(self.width, self.height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        self.window = Some(window.clone());

        let mut gpu_state = pollster::block_on(GpuState::new(window))?;
        gpu_state.camera.fit(self.sketch.camera());
        self.gpu_state = Some(gpu_state);
        Ok(())
    }
}

impl<S: Sketch> ApplicationHandler for App<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.init(event_loop) {
                self.init_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed;
                    if !self.mouse_pressed {
                        self.last_mouse_pos = None;
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some((last_x, last_y)) = self.last_mouse_pos {
                        let dx = position.x - last_x;
                        let dy = position.y - last_y;

                        if let Some(gpu_state) = &mut self.gpu_state {
                            gpu_state.camera.yaw -= dx as f32 * 0.005;
                            gpu_state.camera.pitch += dy as f32 * 0.005;
                            gpu_state.camera.pitch = gpu_state.camera.pitch.clamp(-1.5, 1.5);
                        }
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                if let Some(gpu_state) = &mut self.gpu_state {
                    let step = gpu_state.camera.distance * 0.1;
                    gpu_state.camera.distance -= scroll * step;
                    gpu_state.camera.distance = gpu_state.camera.distance.clamp(0.5, 2000.0);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    let (time, delta) = self.time.update();
                    self.sketch.frame(&mut self.frame);
                    match gpu_state.render(&self.frame, time, delta) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            gpu_state.resize(winit::dpi::PhysicalSize {
                                width: gpu_state.config.width,
                                height: gpu_state.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
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
