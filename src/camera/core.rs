use glam::{Mat4, Quat, Vec2, Vec3};

use crate::options::CameraOptions;

/// Region of the render target the camera draws into, in pixels.
///
/// Screen coordinates have their origin at the bottom-left of the render
/// target with +Y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    /// Left edge.
    pub x: f32,
    /// Bottom edge.
    pub y: f32,
    /// Width in pixels (always >= 1).
    pub width: f32,
    /// Height in pixels (always >= 1).
    pub height: f32,
}

impl PixelRect {
    /// Full-target rect of the given size. Zero sizes are bumped to 1 so the
    /// viewport projection never divides by zero.
    #[must_use]
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    /// Width / height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Size as a vector.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Perspective camera placed by a world-space position and orientation.
///
/// World axes are left-handed: +X right, +Y up, +Z forward. The ground
/// plane the controller pans across is XZ.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Orientation; the camera looks along `rotation * Vec3::Z`.
    pub rotation: Quat,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Pixel rect used for screen/viewport conversion and aspect ratio.
    pub viewport: PixelRect,
}

impl Camera {
    /// Camera built from options, rendering into a `width` x `height`
    /// target.
    #[must_use]
    pub fn from_options(
        options: &CameraOptions,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            position: Vec3::from_array(options.position),
            rotation: Quat::from_rotation_x(options.pitch.to_radians()),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
            viewport: PixelRect::full(width, height),
        }
    }

    /// Track a resized render target.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = PixelRect::full(width, height);
    }

    /// Map a screen-space point (pixels) to viewport space, where the
    /// camera's pixel rect spans `0..1` on both axes. `z` passes through.
    #[must_use]
    pub fn screen_to_viewport(&self, screen: Vec3) -> Vec3 {
        Vec3::new(
            (screen.x - self.viewport.x) / self.viewport.width,
            (screen.y - self.viewport.y) / self.viewport.height,
            screen.z,
        )
    }

    /// Direction the camera looks along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_to_lh(self.position, self.forward(), self.rotation * Vec3::Y)
    }

    /// Projection matrix ([0,1] depth range).
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_lh(
            self.fovy.to_radians(),
            self.viewport.aspect(),
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default(), 1280, 720)
    }
}
