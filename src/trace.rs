//! Recorded input sessions replayed headlessly.
//!
//! A trace is a TOML file describing a device and a list of frames:
//!
//! ```toml
//! touch_supported = true
//! platform = "mobile"
//! viewport = [1000, 500]
//!
//! [[frames]]
//! touches = [{ id = 0, position = [500.0, 250.0], phase = "began" }]
//!
//! [[frames]]
//! touches = [{ id = 0, position = [400.0, 250.0], phase = "moved" }]
//!
//! [[frames]]
//! enabled = false
//! scroll = 1.0
//! ```
//!
//! Replaying drives a [`CameraController`] exactly as a host loop would,
//! one update per frame.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::controller::{CameraController, CameraDelta, Movement};
use crate::camera::core::Camera;
use crate::camera::rig::CameraRig;
use crate::error::TouchcamError;
use crate::input::{InputSnapshot, Platform};
use crate::options::{ControllerOptions, Options};

const fn enabled() -> bool {
    true
}

/// One recorded frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceFrame {
    /// Input polled on this frame. Device fields are overwritten from the
    /// trace header.
    #[serde(flatten)]
    pub input: InputSnapshot,
    /// Whether camera movement was enabled on this frame.
    #[serde(default = "enabled")]
    pub enabled: bool,
}

/// A recorded input session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputTrace {
    /// Whether the recording device had a touch screen.
    #[serde(default)]
    pub touch_supported: bool,
    /// Runtime the session was recorded on.
    #[serde(default)]
    pub platform: Platform,
    /// Render target size in pixels.
    #[serde(default = "default_viewport")]
    pub viewport: [u32; 2],
    /// Frames in playback order.
    #[serde(default)]
    pub frames: Vec<TraceFrame>,
}

const fn default_viewport() -> [u32; 2] {
    [1280, 720]
}

impl InputTrace {
    /// Parse a trace from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, TouchcamError> {
        let mut trace: Self = toml::from_str(text)
            .map_err(|e| TouchcamError::TraceParse(e.to_string()))?;
        for frame in &mut trace.frames {
            frame.input.touch_supported = trace.touch_supported;
            frame.input.platform = trace.platform;
        }
        Ok(trace)
    }

    /// Load a trace from a TOML file.
    pub fn load(path: &Path) -> Result<Self, TouchcamError> {
        let text = std::fs::read_to_string(path)?;
        let trace = Self::from_toml_str(&text)?;
        log::info!(
            "loaded {} trace frames from {}",
            trace.frames.len(),
            path.display()
        );
        Ok(trace)
    }

    /// Empty input frame describing the recording device.
    #[must_use]
    pub fn device(&self) -> InputSnapshot {
        InputSnapshot::new(self.platform, self.touch_supported)
    }

    /// Controller configured for the recording device.
    #[must_use]
    pub fn controller(&self, options: ControllerOptions) -> CameraController {
        CameraController::for_source(options, &self.device())
    }

    /// Run every frame through `controller`, returning what each frame did
    /// to `camera`.
    pub fn replay(
        &self,
        controller: &mut CameraController,
        camera: &mut impl CameraRig,
    ) -> Vec<CameraDelta> {
        self.frames
            .iter()
            .map(|frame| {
                controller.update(
                    camera,
                    &frame.input,
                    Movement::from(frame.enabled),
                )
            })
            .collect()
    }

    /// Replay onto a fresh camera built from `options`, log a summary and
    /// return the camera in its final state.
    #[must_use]
    pub fn run(&self, options: &Options) -> Camera {
        let [width, height] = self.viewport;
        let mut camera = Camera::from_options(&options.camera, width, height);
        let mut controller = self.controller(options.controller.clone());
        let deltas = self.replay(&mut controller, &mut camera);
        let moved = deltas.iter().filter(|d| !d.is_zero()).count();
        log::info!(
            "replayed {} frames ({moved} moved the camera) in {:?} mode; \
             camera at {:?}, fov {:.2}",
            deltas.len(),
            controller.mode(),
            camera.position,
            camera.fovy
        );
        camera
    }
}
