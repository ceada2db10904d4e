//! Primary-button drag pan and scroll-wheel zoom.

use glam::Vec2;

use super::gesture::{GestureSample, PanStroke, ZoomSource, ZoomStep};
use super::source::{InputSource, SCROLL_AXIS};

/// Pointer gesture state carried between frames.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerGestures {
    /// Pointer position at the previous pan step (or at button-down).
    last: Vec2,
}

impl PointerGestures {
    /// Current pan baseline.
    #[must_use]
    pub fn baseline(&self) -> Vec2 {
        self.last
    }

    /// Advance by one frame.
    pub fn sample(&mut self, input: &impl InputSource) -> GestureSample {
        let position = input.pointer_position();
        let pan = if input.primary_button_down() {
            self.last = position;
            None
        } else if input.primary_button_held() {
            let stroke = PanStroke {
                from: self.last,
                to: position,
            };
            self.last = position;
            Some(stroke)
        } else {
            None
        };

        GestureSample {
            pan,
            zoom: Some(ZoomStep {
                offset: input.axis(SCROLL_AXIS),
                source: ZoomSource::Mouse,
            }),
        }
    }
}
