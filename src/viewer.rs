//! Standalone window that drives a camera from live mouse/touch input.
//!
//! Nothing is rendered: the camera state is shown in the window title and
//! logged, which is enough to feel out option presets on a real device.
//! Space pauses and resumes camera movement.
//!
//! ```no_run
//! # use touchcam::Viewer;
//! Viewer::builder().with_title("pan/zoom").build().run().unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    camera::{
        controller::{CameraController, Movement},
        core::Camera,
    },
    error::TouchcamError,
    input::window::WindowInputCollector,
    options::Options,
    util::frame_timing::FrameTiming,
};

/// Frame rate the viewer polls input at.
const TARGET_FPS: u32 = 60;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "touchcam", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "touchcam".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window whose title tracks a camera driven by the controller.
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
    /// closed.
    pub fn run(self) -> Result<(), TouchcamError> {
        self.options.validate()?;
        let event_loop = EventLoop::new()
            .map_err(|e| TouchcamError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            session: None,
            options: self.options,
            title: self.title,
            timing: FrameTiming::new(TARGET_FPS),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| TouchcamError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Everything that exists once the window does.
struct Session {
    window: Arc<Window>,
    input: WindowInputCollector,
    controller: CameraController,
    camera: Camera,
    movement: Movement,
}

impl Session {
    fn refresh_title(&self, prefix: &str) {
        let p = self.camera.position;
        let paused = if self.movement == Movement::Disabled {
            " [paused]"
        } else {
            ""
        };
        self.window.set_title(&format!(
            "{prefix}: x={:.2} z={:.2} fov={:.1}{paused}",
            p.x, p.z, self.camera.fovy
        ));
    }

    fn toggle_movement(&mut self) {
        self.movement = match self.movement {
            Movement::Enabled => Movement::Disabled,
            Movement::Disabled => Movement::Enabled,
        };
        log::info!("camera movement {:?}", self.movement);
    }
}

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    session: Option<Session>,
    options: Options,
    title: String,
    timing: FrameTiming,
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(960, 540));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let input = WindowInputCollector::for_host(inner.height);
        let controller = CameraController::for_source(
            self.options.controller.clone(),
            &input.device(),
        );
        let camera = Camera::from_options(
            &self.options.camera,
            inner.width,
            inner.height,
        );
        log::info!(
            "viewer started in {:?} mode at {}x{}",
            controller.mode(),
            inner.width,
            inner.height
        );

        let session = Session {
            window: window.clone(),
            input,
            controller,
            camera,
            movement: Movement::Enabled,
        };
        session.refresh_title(&self.title);

        window.request_redraw();
        self.window = Some(window);
        self.session = Some(session);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let Some(session) = &mut self.session else {
            return;
        };

        if session.input.handle_event(&event) {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                session.camera.resize(size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                let frame = session.input.end_frame();
                let delta = session.controller.update(
                    &mut session.camera,
                    &frame,
                    session.movement,
                );
                if !delta.is_zero() {
                    log::debug!(
                        "moved {:?}, fov {:+.2} -> {:.2}",
                        delta.translation,
                        delta.fov_change,
                        session.camera.fovy
                    );
                    session.refresh_title(&self.title);
                }
                self.timing.end_frame();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && event.physical_key == PhysicalKey::Code(KeyCode::Space)
                {
                    session.toggle_movement();
                    session.refresh_title(&self.title);
                }
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        if self.timing.should_render() {
            window.request_redraw();
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(
                web_time::Instant::now() + self.timing.time_until_next(),
            ));
        }
    }
}
