//! Camera model and the pan/zoom controller that drives it.
//!
//! Provides a perspective camera, the [`rig::CameraRig`] seam the
//! controller talks to, and the per-frame [`controller::CameraController`].

/// Per-frame pan/zoom controller with bounds clamping.
pub mod controller;
/// Perspective camera and its pixel rect.
pub mod core;
/// Camera interface the controller drives.
pub mod rig;
