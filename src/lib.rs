// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod animation;
pub mod app;
pub mod color;
pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod notification;
pub mod pressure;
pub mod raster;
pub mod scene;

// External crate imports
use pixels::{Pixels, SurfaceTexture};
use tracing::{error, info, warn};

// Standard library imports
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Instant;

// Window management imports
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

pub use animation::{AnimationPhase, NeedleAnimator};
pub use app::{AppState, GaugeCommand};
pub use color::{Color, SweepGradient};
pub use config::{AppArgs, GaugeConfig};
pub use controller::{InputController, PressureObserver};
pub use easing::Easing;
pub use error::{GaugeError, InputError};
pub use geometry::{GaugeGeometry, ScreenLayout};
pub use pressure::{angle_of, pressure_of, Pressure};
pub use raster::Canvas;
pub use scene::{DrawCommand, Scene};

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// A window showing the pressure gauge with its input field.
#[derive(Debug, Clone)]
pub struct Gauge {
    config: GaugeConfig,
}

impl Gauge {
    pub fn new(config: GaugeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    /// Open the window and block until it is closed.
    pub fn show(&self) -> Result<(), GaugeError> {
        self.run_window(None)
    }

    /// Like [`Gauge::show`], additionally applying commands from `receiver`
    /// once per frame.
    pub fn show_with_commands(&self, receiver: Receiver<GaugeCommand>) -> Result<(), GaugeError> {
        self.run_window(Some(receiver))
    }

    fn run_window(&self, receiver: Option<Receiver<GaugeCommand>>) -> Result<(), GaugeError> {
        self.config.validate()?;
        let font = self.config.load_font()?;
        let mut app_state = AppState::new(&self.config);
        let layout = *app_state.layout();

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(layout.width as f64, layout.height as f64))
            .with_resizable(false)
            .build(&event_loop)?;
        let window = Arc::new(window);

        // The buffer stays at logical size; the surface scales it to the window.
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window.clone());
        let mut pixels = Pixels::new(layout.width, layout.height, surface_texture)?;

        info!(
            width = layout.width,
            height = layout.height,
            pressure = %app_state.pressure(),
            "gauge window opened"
        );

        let frame_duration = self.config.frame_duration();
        let mut last_frame = Instant::now();
        let mut cursor: Option<(usize, usize)> = None;
        let mut failure: Option<GaugeError> = None;

        event_loop.run(|event, window_target| {
            window_target.set_control_flow(ControlFlow::Poll);
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                            warn!(error = %err, "surface resize failed");
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = pixels
                            .window_pos_to_pixel((position.x as f32, position.y as f32))
                            .ok();
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } => {
                        if let Some((x, y)) = cursor {
                            app_state.click(x as f64, y as f64, Instant::now());
                        }
                    }
                    WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                        match &event.logical_key {
                            Key::Named(NamedKey::Enter) => {
                                let _ = app_state.apply(Instant::now());
                            }
                            Key::Named(NamedKey::Backspace) => app_state.backspace(),
                            Key::Named(NamedKey::Escape) => window_target.exit(),
                            _ => {
                                if let Some(text) = &event.text {
                                    app_state.type_text(text.as_str());
                                }
                            }
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        let now = Instant::now();
                        if let Some(ref receiver) = receiver {
                            app_state.drain_commands(receiver, now);
                        }
                        app_state.advance(now);

                        let mut canvas = Canvas::new(
                            pixels.frame_mut(),
                            layout.width as usize,
                            layout.height as usize,
                        );
                        app_state.scene(now).render(&mut canvas, font.as_ref());
                        if let Err(err) = pixels.render() {
                            error!(error = %err, "render failed");
                            failure = Some(err.into());
                            window_target.exit();
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    if last_frame.elapsed() >= frame_duration {
                        window.request_redraw();
                        last_frame = Instant::now();
                    }
                }
                _ => {}
            }
        })?;

        info!(pressure = %app_state.pressure(), "gauge window closed");
        failure.map_or(Ok(()), Err)
    }
}
