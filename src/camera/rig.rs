use glam::Vec3;

use super::core::Camera;

/// What the controller needs from a camera.
///
/// Implemented by [`Camera`]; hosts with their own camera/transform types
/// (an engine entity, a scene node) implement it to be driven directly.
pub trait CameraRig {
    /// Vertical field of view in degrees.
    fn field_of_view(&self) -> f32;

    /// Replace the vertical field of view.
    fn set_field_of_view(&mut self, fovy: f32);

    /// Map a screen-space point (pixels) into viewport space (`0..1` across
    /// the camera's pixel rect).
    fn screen_to_viewport(&self, screen: Vec3) -> Vec3;

    /// World-space position.
    fn position(&self) -> Vec3;

    /// Move to an absolute world-space position.
    fn set_position(&mut self, position: Vec3);

    /// Translate by `offset` along world axes, ignoring orientation.
    fn translate_world(&mut self, offset: Vec3) {
        let position = self.position();
        self.set_position(position + offset);
    }
}

impl CameraRig for Camera {
    fn field_of_view(&self) -> f32 {
        self.fovy
    }

    fn set_field_of_view(&mut self, fovy: f32) {
        self.fovy = fovy;
    }

    fn screen_to_viewport(&self, screen: Vec3) -> Vec3 {
        Camera::screen_to_viewport(self, screen)
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}
