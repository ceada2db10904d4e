// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Touch and mouse driven pan/zoom for a 3D scene camera.
//!
//! Each frame the host polls its input into an [`InputSource`] and hands it
//! to a [`CameraController`], which pans the camera across the ground
//! plane and zooms its field of view, keeping both inside fixed bounds.
//!
//! # Key entry points
//!
//! - [`CameraController`] - per-frame update and the pan/zoom operations
//! - [`camera::rig::CameraRig`] - what the controller needs from a camera
//! - [`input`] - the polled input interface, snapshots and gesture state
//! - [`options::Options`] - tuning and bounds, loadable from TOML presets
//! - [`trace::InputTrace`] - recorded sessions replayed headlessly
//!
//! # Input modes
//!
//! The mode is picked once, when the controller is built: devices with a
//! touch screen get one-finger pan and two-finger pinch zoom, everything
//! else (and every browser build) gets primary-button drag and scroll
//! zoom.
//!
//! ```
//! use glam::Vec2;
//! use touchcam::{Camera, CameraController, InputSnapshot, Movement};
//! use touchcam::input::{Platform, TouchPhase};
//! use touchcam::options::ControllerOptions;
//!
//! let phone = InputSnapshot::new(Platform::Mobile, true);
//! let mut controller =
//!     CameraController::for_source(ControllerOptions::default(), &phone);
//! let mut camera = Camera::default();
//!
//! let down = phone
//!     .clone()
//!     .with_touch(0, Vec2::new(600.0, 300.0), TouchPhase::Began);
//! let drag =
//!     phone.with_touch(0, Vec2::new(500.0, 300.0), TouchPhase::Moved);
//! let _ = controller.update(&mut camera, &down, Movement::Enabled);
//! let delta = controller.update(&mut camera, &drag, Movement::Enabled);
//! assert!(delta.translation.x > 0.0);
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod trace;
pub mod util;
#[cfg(feature = "viewer")]
mod viewer;

pub use camera::controller::{CameraController, CameraDelta, Movement};
pub use camera::core::{Camera, PixelRect};
pub use camera::rig::CameraRig;
pub use error::TouchcamError;
pub use input::{InputMode, InputSnapshot, InputSource};
pub use options::Options;
pub use trace::InputTrace;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
