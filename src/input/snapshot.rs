use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::platform::Platform;
use super::source::{InputSource, TouchContact, TouchPhase, SCROLL_AXIS};

/// Plain-data capture of one frame of input.
///
/// Hosts fill one of these per frame (the winit adapter does so from window
/// events), traces deserialize lists of them, and tests build them with the
/// `with_*` helpers.
///
/// ```
/// use glam::Vec2;
/// use touchcam::input::{InputSnapshot, Platform, TouchPhase};
///
/// let frame = InputSnapshot::new(Platform::Mobile, true)
///     .with_touch(0, Vec2::new(120.0, 80.0), TouchPhase::Began);
/// assert_eq!(frame.touches.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSnapshot {
    /// Whether the device reports a touch screen.
    pub touch_supported: bool,
    /// Runtime family.
    pub platform: Platform,
    /// Active contacts, in platform order.
    pub touches: Vec<TouchContact>,
    /// Primary pointer button went down this frame.
    pub primary_down: bool,
    /// Primary pointer button is held.
    pub primary_held: bool,
    /// Pointer position in pixels (origin bottom-left).
    pub pointer: Vec2,
    /// Scroll-wheel axis value for this frame.
    pub scroll: f32,
}

impl InputSnapshot {
    /// Empty frame for the given device.
    #[must_use]
    pub fn new(platform: Platform, touch_supported: bool) -> Self {
        Self {
            touch_supported,
            platform,
            ..Self::default()
        }
    }

    /// Empty frame describing the compiled-for platform.
    #[must_use]
    pub fn host() -> Self {
        let platform = Platform::current();
        Self::new(platform, platform.assumes_touch())
    }

    /// Append a contact.
    #[must_use]
    pub fn with_touch(
        mut self,
        id: u64,
        position: Vec2,
        phase: TouchPhase,
    ) -> Self {
        self.touches.push(TouchContact::new(id, position, phase));
        self
    }

    /// Set the pointer position.
    #[must_use]
    pub fn with_pointer(mut self, position: Vec2) -> Self {
        self.pointer = position;
        self
    }

    /// Set the primary button state. `down` implies `held`.
    #[must_use]
    pub fn with_primary(mut self, down: bool, held: bool) -> Self {
        self.primary_down = down;
        self.primary_held = held || down;
        self
    }

    /// Set the scroll axis value.
    #[must_use]
    pub fn with_scroll(mut self, scroll: f32) -> Self {
        self.scroll = scroll;
        self
    }
}

impl InputSource for InputSnapshot {
    fn touch_supported(&self) -> bool {
        self.touch_supported
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn touch_count(&self) -> usize {
        self.touches.len()
    }

    fn touch(&self, index: usize) -> Option<TouchContact> {
        self.touches.get(index).copied()
    }

    fn primary_button_down(&self) -> bool {
        self.primary_down
    }

    fn primary_button_held(&self) -> bool {
        self.primary_held
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn axis(&self, name: &str) -> f32 {
        if name == SCROLL_AXIS {
            self.scroll
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_touch_is_none() {
        let frame = InputSnapshot::default();
        assert_eq!(frame.touch_count(), 0);
        assert!(frame.touch(0).is_none());
    }

    #[test]
    fn only_the_scroll_axis_is_wired() {
        let frame = InputSnapshot::default().with_scroll(0.5);
        assert_eq!(frame.axis(SCROLL_AXIS), 0.5);
        assert_eq!(frame.axis("Horizontal"), 0.0);
    }

    #[test]
    fn press_implies_held() {
        let frame = InputSnapshot::default().with_primary(true, false);
        assert!(frame.primary_button_down());
        assert!(frame.primary_button_held());
    }

    #[test]
    fn parses_from_toml() {
        let frame: InputSnapshot = toml::from_str(
            r#"
touch_supported = true
platform = "mobile"
touches = [
    { id = 3, position = [10.0, 20.0], phase = "began" },
    { id = 4, position = [30.0, 40.0] },
]
"#,
        )
        .unwrap();
        assert_eq!(frame.platform, Platform::Mobile);
        assert_eq!(
            frame.touch(0),
            Some(TouchContact::new(
                3,
                Vec2::new(10.0, 20.0),
                TouchPhase::Began
            ))
        );
        assert_eq!(
            frame.touch(1).map(|t| t.phase),
            Some(TouchPhase::Stationary)
        );
        assert!(!frame.primary_held);
    }
}
