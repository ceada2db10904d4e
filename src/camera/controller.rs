use glam::Vec3;

use crate::camera::rig::CameraRig;
use crate::input::{
    GestureInterpreter, GestureSample, InputMode, InputSource, PanStroke,
    ZoomSource, ZoomStep,
};
use crate::options::ControllerOptions;

/// Whether the controller may move the camera this frame.
///
/// Hosts pass this into every [`CameraController::update`] (e.g.
/// `Movement::Disabled` while a modal dialog is open).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Movement {
    /// Interpret input and move the camera.
    #[default]
    Enabled,
    /// Ignore input entirely; gesture state is left untouched.
    Disabled,
}

impl From<bool> for Movement {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

/// What one frame did to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraDelta {
    /// Net change in world position, after clamping.
    pub translation: Vec3,
    /// Net change in field of view (degrees), after clamping.
    pub fov_change: f32,
}

impl CameraDelta {
    /// Whether the camera did not change.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.translation == Vec3::ZERO && self.fov_change == 0.0
    }
}

/// Pans a camera across the XZ plane and zooms its field of view from
/// touch or pointer input, keeping both within fixed bounds.
///
/// A frame is split in two: the [`GestureInterpreter`] folds input into
/// its state and emits a [`GestureSample`], then [`apply`](Self::apply)
/// maps that sample onto the camera. Hosts with their own gesture source
/// can call `apply` directly.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    options: ControllerOptions,
    interpreter: GestureInterpreter,
}

impl CameraController {
    /// Controller interpreting input as `mode`.
    #[must_use]
    pub fn new(options: ControllerOptions, mode: InputMode) -> Self {
        Self {
            options,
            interpreter: GestureInterpreter::new(mode),
        }
    }

    /// Controller whose mode is picked from the device behind `source`.
    #[must_use]
    pub fn for_source(
        options: ControllerOptions,
        source: &impl InputSource,
    ) -> Self {
        Self {
            options,
            interpreter: GestureInterpreter::for_source(source),
        }
    }

    /// Input mode in use.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.interpreter.mode()
    }

    /// Current tuning.
    #[must_use]
    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Replace the tuning. Gesture state is kept.
    pub fn set_options(&mut self, options: ControllerOptions) {
        self.options = options;
    }

    /// Gesture state, for inspection.
    #[must_use]
    pub fn interpreter(&self) -> &GestureInterpreter {
        &self.interpreter
    }

    /// Run one frame: interpret `input` and move `camera` accordingly.
    pub fn update(
        &mut self,
        camera: &mut impl CameraRig,
        input: &impl InputSource,
        movement: Movement,
    ) -> CameraDelta {
        if movement == Movement::Disabled {
            return CameraDelta::default();
        }
        let sample = self.interpreter.sample(input);
        self.apply(camera, &sample)
    }

    /// Apply a gesture sample to `camera`. Pan happens before zoom.
    pub fn apply(
        &self,
        camera: &mut impl CameraRig,
        sample: &GestureSample,
    ) -> CameraDelta {
        let position = camera.position();
        let fov = camera.field_of_view();

        if let Some(stroke) = sample.pan {
            self.pan(camera, stroke);
        }
        if let Some(ZoomStep { offset, source }) = sample.zoom {
            self.zoom(camera, offset, self.zoom_speed(source));
        }

        CameraDelta {
            translation: camera.position() - position,
            fov_change: camera.field_of_view() - fov,
        }
    }

    /// Translate `camera` along the ground plane by a screen-space drag.
    ///
    /// The drag (`from - to`) is converted to viewport units so the same
    /// finger motion covers the same fraction of the view at any
    /// resolution, then scaled by the pan speed: viewport X moves world X,
    /// viewport Y moves world Z, and Y never changes. X and Z are clamped
    /// independently afterwards.
    ///
    /// The caller keeps `to` as its next baseline even when clamping ate
    /// part of the motion: drag past a bound is dropped, not banked, and
    /// the baseline no longer lines up with where the camera visibly
    /// stopped.
    pub fn pan(&self, camera: &mut impl CameraRig, stroke: PanStroke) {
        let drag = (stroke.from - stroke.to).extend(0.0);
        let offset = camera.screen_to_viewport(drag);
        let speed = self.options.pan_speed;
        camera.translate_world(Vec3::new(
            offset.x * speed,
            0.0,
            offset.y * speed,
        ));

        let mut position = camera.position();
        position.x = self.options.bounds_x.clamp(position.x);
        position.z = self.options.bounds_z.clamp(position.z);
        camera.set_position(position);

        log::trace!(
            "pan {:?} -> {:?}, camera at {position:?}",
            stroke.from,
            stroke.to
        );
    }

    /// Narrow the field of view by `offset * speed` degrees (widen for a
    /// negative offset), clamped into the zoom bounds. A zero offset leaves
    /// the camera untouched.
    pub fn zoom(&self, camera: &mut impl CameraRig, offset: f32, speed: f32) {
        if offset == 0.0 {
            return;
        }
        let fov = self
            .options
            .zoom_bounds
            .clamp(camera.field_of_view() - offset * speed);
        camera.set_field_of_view(fov);
        log::trace!("zoom offset {offset} x {speed}, fov now {fov}");
    }

    fn zoom_speed(&self, source: ZoomSource) -> f32 {
        match source {
            ZoomSource::Touch => self.options.touch_zoom_speed,
            ZoomSource::Mouse => self.options.mouse_zoom_speed,
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(ControllerOptions::default(), InputMode::Pointer)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::camera::core::Camera;
    use crate::input::{InputSnapshot, Platform, TouchPhase};

    fn camera() -> Camera {
        let mut camera = Camera::default();
        camera.resize(1000, 500);
        camera.position = Vec3::new(0.0, 10.0, 0.0);
        camera.fovy = 60.0;
        camera
    }

    fn touch_frame() -> InputSnapshot {
        InputSnapshot::new(Platform::Mobile, true)
    }

    fn pinch(a: Vec2, b: Vec2) -> InputSnapshot {
        touch_frame()
            .with_touch(0, a, TouchPhase::Moved)
            .with_touch(1, b, TouchPhase::Moved)
    }

    fn mouse(x: f32, y: f32) -> InputSnapshot {
        InputSnapshot::new(Platform::Desktop, false)
            .with_pointer(Vec2::new(x, y))
    }

    #[test]
    fn scroll_up_narrows_fov_by_mouse_speed() {
        let mut controller = CameraController::default();
        let mut cam = camera();
        let delta = controller.update(
            &mut cam,
            &mouse(0.0, 0.0).with_scroll(1.0),
            Movement::Enabled,
        );
        assert_relative_eq!(cam.fovy, 50.0);
        assert_relative_eq!(delta.fov_change, -10.0);
    }

    #[test]
    fn zero_scroll_never_changes_fov() {
        let mut controller = CameraController::default();
        let mut cam = camera();
        cam.fovy = 200.0; // outside bounds: a clamp would pull it back
        let delta =
            controller.update(&mut cam, &mouse(0.0, 0.0), Movement::Enabled);
        assert_eq!(cam.fovy, 200.0);
        assert!(delta.is_zero());
    }

    #[test]
    fn pinch_widening_by_twenty_pixels_zooms_two_degrees() {
        let mut controller = CameraController::for_source(
            ControllerOptions::default(),
            &touch_frame(),
        );
        assert_eq!(controller.mode(), InputMode::Touch);
        let mut cam = camera();
        let first = controller.update(
            &mut cam,
            &pinch(Vec2::ZERO, Vec2::new(100.0, 0.0)),
            Movement::Enabled,
        );
        assert!(first.is_zero());

        let _ = controller.update(
            &mut cam,
            &pinch(Vec2::ZERO, Vec2::new(120.0, 0.0)),
            Movement::Enabled,
        );
        assert_relative_eq!(cam.fovy, 58.0, epsilon = 1e-5);
    }

    #[test]
    fn pointer_controller_ignores_pinches() {
        let mut controller = CameraController::default();
        let mut cam = camera();
        for spread in [100.0, 120.0] {
            let delta = controller.update(
                &mut cam,
                &pinch(Vec2::ZERO, Vec2::new(spread, 0.0)),
                Movement::Enabled,
            );
            assert!(delta.is_zero());
        }
        assert_eq!(cam.fovy, 60.0);
    }

    #[test]
    fn zoom_clamps_to_bounds_including_negative_minimum() {
        let controller = CameraController::default();
        let mut cam = camera();
        controller.zoom(&mut cam, 1000.0, 10.0);
        assert_eq!(cam.fovy, -10.0);
        controller.zoom(&mut cam, -1000.0, 10.0);
        assert_eq!(cam.fovy, 85.0);
    }

    #[test]
    fn drag_moves_camera_opposite_to_the_finger() {
        let controller = CameraController::default();
        let mut cam = camera();
        // 100px right on a 1000px-wide view = 0.1 viewport = 2 world units
        controller.pan(
            &mut cam,
            PanStroke {
                from: Vec2::new(500.0, 250.0),
                to: Vec2::new(600.0, 250.0),
            },
        );
        assert_relative_eq!(cam.position.x, -2.0, epsilon = 1e-5);
        assert_relative_eq!(cam.position.z, 0.0);
        assert_relative_eq!(cam.position.y, 10.0);

        // 50px up on a 500px-tall view = 0.1 viewport = 2 world units on Z
        controller.pan(
            &mut cam,
            PanStroke {
                from: Vec2::new(600.0, 250.0),
                to: Vec2::new(600.0, 300.0),
            },
        );
        assert_relative_eq!(cam.position.z, -2.0, epsilon = 1e-5);
    }

    #[test]
    fn clamping_one_axis_leaves_the_other_alone() {
        let controller = CameraController::default();
        let mut cam = camera();
        controller.pan(
            &mut cam,
            PanStroke {
                from: Vec2::new(5000.0, 50.0),
                to: Vec2::new(0.0, 0.0),
            },
        );
        assert_eq!(cam.position.x, 5.0);
        assert_relative_eq!(cam.position.z, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn began_touch_never_moves_the_camera() {
        let mut controller = CameraController::for_source(
            ControllerOptions::default(),
            &touch_frame(),
        );
        assert_eq!(controller.mode(), InputMode::Touch);
        let mut cam = camera();
        let delta = controller.update(
            &mut cam,
            &touch_frame().with_touch(
                3,
                Vec2::new(900.0, 10.0),
                TouchPhase::Began,
            ),
            Movement::Enabled,
        );
        assert!(delta.is_zero());
    }

    #[test]
    fn baseline_tracks_raw_input_past_a_bound() {
        let mut controller = CameraController::default();
        let mut cam = camera();
        let _ = controller.update(
            &mut cam,
            &mouse(500.0, 250.0).with_primary(true, true),
            Movement::Enabled,
        );
        // Drag far left: camera wants +20 on X but stops at 5
        let _ = controller.update(
            &mut cam,
            &mouse(-500.0, 250.0).with_primary(false, true),
            Movement::Enabled,
        );
        assert_eq!(cam.position.x, 5.0);

        // Drag back 100px: applied from the raw -500 baseline, so the camera
        // leaves the bound immediately by the full 2 units.
        let delta = controller.update(
            &mut cam,
            &mouse(-400.0, 250.0).with_primary(false, true),
            Movement::Enabled,
        );
        assert_relative_eq!(delta.translation.x, -2.0, epsilon = 1e-5);
        assert_relative_eq!(cam.position.x, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn disabled_movement_freezes_camera_and_gestures() {
        let mut controller = CameraController::default();
        let mut cam = camera();
        let before = controller.clone();
        let delta = controller.update(
            &mut cam,
            &mouse(10.0, 10.0).with_primary(true, true).with_scroll(3.0),
            Movement::Disabled,
        );
        assert!(delta.is_zero());
        assert_eq!(cam, camera());
        assert_eq!(controller, before);
        assert_eq!(Movement::from(false), Movement::Disabled);
    }

    #[test]
    fn random_sessions_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(0x7c0c_a11);
        for mode in [InputMode::Touch, InputMode::Pointer] {
            let mut controller =
                CameraController::new(ControllerOptions::default(), mode);
            let mut cam = camera();
            for _ in 0..2000 {
                let a = Vec2::new(
                    rng.random_range(-5000.0..5000.0),
                    rng.random_range(-5000.0..5000.0),
                );
                let b = Vec2::new(
                    rng.random_range(-5000.0..5000.0),
                    rng.random_range(-5000.0..5000.0),
                );
                let phase = if rng.random_bool(0.2) {
                    TouchPhase::Began
                } else {
                    TouchPhase::Moved
                };
                let mut frame = InputSnapshot::new(Platform::Mobile, true)
                    .with_pointer(a)
                    .with_primary(rng.random_bool(0.1), rng.random_bool(0.8))
                    .with_scroll(rng.random_range(-50.0..50.0));
                for id in 0..rng.random_range(0..4u64) {
                    let at = if id == 1 { b } else { a };
                    frame = frame.with_touch(id, at, phase);
                }

                let _ = controller.update(&mut cam, &frame, Movement::Enabled);
                let opts = controller.options();
                assert!(opts.bounds_x.contains(cam.position.x));
                assert!(opts.bounds_z.contains(cam.position.z));
                assert!(opts.zoom_bounds.contains(cam.fovy));
                assert_eq!(cam.position.y, 10.0);
            }
        }
    }
}
