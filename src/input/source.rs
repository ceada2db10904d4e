use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::platform::Platform;

/// Name of the analog axis carrying scroll-wheel motion.
pub const SCROLL_AXIS: &str = "Mouse ScrollWheel";

/// Lifecycle stage of a touch contact within the current frame.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    /// The finger touched down this frame.
    Began,
    /// The finger moved since last frame.
    Moved,
    /// The finger is down but did not move.
    #[default]
    Stationary,
    /// The finger lifted this frame.
    Ended,
    /// The platform cancelled the contact (e.g. palm rejection).
    Canceled,
}

impl TouchPhase {
    /// Whether this is the contact's last frame.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Ended | Self::Canceled)
    }
}

/// One finger on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchContact {
    /// Identifier, stable for the lifetime of the contact.
    pub id: u64,
    /// Screen position in pixels (origin bottom-left).
    pub position: Vec2,
    /// Stage within the current frame.
    pub phase: TouchPhase,
}

impl TouchContact {
    /// Contact `id` at `position` in `phase`.
    #[must_use]
    pub fn new(id: u64, position: Vec2, phase: TouchPhase) -> Self {
        Self {
            id,
            position,
            phase,
        }
    }
}

/// Read-only, polled view of the platform's input state for one frame.
///
/// The controller queries this once per frame and never holds on to it.
/// [`InputSnapshot`](super::InputSnapshot) is the stock implementation;
/// hosts with their own input layer can implement it directly.
pub trait InputSource {
    /// Whether the device reports a touch screen.
    fn touch_supported(&self) -> bool;

    /// Runtime the host is running on.
    fn platform(&self) -> Platform;

    /// Number of fingers currently reported (including ones ending this
    /// frame).
    fn touch_count(&self) -> usize;

    /// Contact at `index` in `0..touch_count()`.
    fn touch(&self, index: usize) -> Option<TouchContact>;

    /// Whether the primary pointer button went down this frame.
    fn primary_button_down(&self) -> bool;

    /// Whether the primary pointer button is held (including the frame it
    /// went down).
    fn primary_button_held(&self) -> bool;

    /// Pointer position in pixels (origin bottom-left).
    fn pointer_position(&self) -> Vec2;

    /// Current value of a named analog axis; unknown axes read as zero.
    fn axis(&self, name: &str) -> f32;
}
