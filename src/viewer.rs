//! Standalone fly-through window backed by winit.
//!
//! Opens a window, captures the cursor, and each frame runs
//! sample → [`CameraController::update`] →
//! [`ProjectionBuilder::build_projection`]. Drawing is left to the embedding
//! renderer; the viewer publishes the resulting [`CameraUniform`] and logs
//! the pose at `trace` level.
//!
//! ```no_run
//! # use flycam::Viewer;
//! Viewer::builder()
//!     .with_title("Fly")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    camera::{Camera, CameraController, CameraUniform, ProjectionBuilder},
    error::FlycamError,
    input::{InputEvent, InputSampler, KeyboardMouseSampler},
    options::Options,
    util::FrameClock,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Options,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default options and the title "Flycam".
    fn new() -> Self {
        Self {
            options: Options::default(),
            title: "Flycam".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driving a free-fly camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or Escape is pressed.
    pub fn run(self) -> Result<(), FlycamError> {
        self.options.validate()?;
        let camera = self.options.pose.to_camera()?;
        let projection = ProjectionBuilder::new(&self.options.projection)?;

        let event_loop =
            EventLoop::new().map_err(|e| FlycamError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            camera,
            controller: CameraController::new(self.options.controller)?,
            projection,
            sampler: KeyboardMouseSampler::with_key_bindings(
                self.options.keybindings,
            ),
            clock: FrameClock::default(),
            uniform: CameraUniform::new(),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| FlycamError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    camera: Camera,
    controller: CameraController,
    projection: ProjectionBuilder,
    sampler: KeyboardMouseSampler,
    clock: FrameClock,
    uniform: CameraUniform,
    title: String,
}

/// Viewport aspect ratio, guarding against minimized (zero-sized) windows.
fn aspect_ratio(inner: winit::dpi::PhysicalSize<u32>) -> f32 {
    inner.width.max(1) as f32 / inner.height.max(1) as f32
}

/// Lock the cursor to the window for relative mouse look, falling back to
/// confinement where locking is unsupported.
fn capture_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(e) = grabbed {
        log::warn!("Failed to grab cursor: {e}");
    }
    window.set_cursor_visible(false);
}

impl ViewerApp {
    /// One frame: sample input, move the camera, rebuild the matrices.
    fn frame(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let aspect = aspect_ratio(window.inner_size());

        let dt = self.clock.tick();
        let input = self.sampler.sample_input(dt);
        self.controller.update(&mut self.camera, &input);

        match self.projection.build_projection(&self.camera, aspect) {
            Ok(projection) => {
                self.uniform.update_view_proj(&self.camera, projection);
            }
            Err(e) => log::error!("projection error: {e}"),
        }

        log::trace!(
            "frame dt {dt:.4}s ({:.0} fps) eye {} target {}",
            self.clock.fps(),
            self.camera.position,
            self.camera.target
        );
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(800, 450));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        capture_cursor(&window);
        log::info!(
            "Viewer started: eye {} target {}",
            self.camera.position,
            self.camera.target
        );

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key, .. } => {
                if key.physical_key == PhysicalKey::Code(KeyCode::Escape) {
                    event_loop.exit();
                    return;
                }
                if let Some(input) = InputEvent::from_key_event(&key) {
                    let _ = self.sampler.handle_event(input);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let _ = self.sampler.handle_event(InputEvent::from_scroll(delta));
            }

            WindowEvent::Focused(focused) => {
                if focused {
                    if let Some(window) = &self.window {
                        capture_cursor(window);
                    }
                } else {
                    let _ = self.sampler.handle_event(InputEvent::FocusLost);
                }
            }

            WindowEvent::Resized(size) => {
                log::debug!("Viewport resized to {}x{}", size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                self.frame();
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            let _ = self.sampler.handle_event(InputEvent::MouseMotion {
                dx: dx as f32,
                dy: dy as f32,
            });
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
