//! One-finger pan and two-finger pinch zoom.

use glam::Vec2;

use super::gesture::{GestureSample, PanStroke, ZoomSource, ZoomStep};
use super::source::{InputSource, TouchContact, TouchPhase};

/// The finger that owns the current pan.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PanFinger {
    id: u64,
    last: Vec2,
}

/// Pinch tracking state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Pinch {
    /// No two-finger gesture last frame.
    #[default]
    Idle,
    /// Two fingers down last frame at these positions.
    Tracking([Vec2; 2]),
}

/// Touch gesture state carried between frames.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TouchGestures {
    pan_finger: Option<PanFinger>,
    pinch: Pinch,
}

impl TouchGestures {
    /// Whether a pinch was in progress as of the last frame.
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        matches!(self.pinch, Pinch::Tracking(_))
    }

    /// Identifier of the finger currently allowed to pan.
    #[must_use]
    pub fn pan_finger(&self) -> Option<u64> {
        self.pan_finger.map(|f| f.id)
    }

    /// Advance by one frame.
    pub fn sample(&mut self, input: &impl InputSource) -> GestureSample {
        match input.touch_count() {
            1 => {
                self.stop_pinch();
                GestureSample {
                    pan: input.touch(0).and_then(|t| self.track_pan(t)),
                    zoom: None,
                }
            }
            2 => match (input.touch(0), input.touch(1)) {
                (Some(a), Some(b)) => GestureSample {
                    pan: None,
                    zoom: self.track_pinch([a.position, b.position]),
                },
                _ => GestureSample::default(),
            },
            _ => {
                self.stop_pinch();
                GestureSample::default()
            }
        }
    }

    fn stop_pinch(&mut self) {
        if self.is_zooming() {
            log::debug!("pinch ended");
        }
        self.pinch = Pinch::Idle;
    }

    fn track_pan(&mut self, touch: TouchContact) -> Option<PanStroke> {
        let owns_pan = self.pan_finger.is_some_and(|f| f.id == touch.id);
        match touch.phase {
            TouchPhase::Began => {
                self.pan_finger = Some(PanFinger {
                    id: touch.id,
                    last: touch.position,
                });
                None
            }
            TouchPhase::Moved if owns_pan => {
                let finger = self.pan_finger.as_mut()?;
                let stroke = PanStroke {
                    from: finger.last,
                    to: touch.position,
                };
                // Baseline follows the raw finger, even if the camera ends
                // up clamped.
                finger.last = touch.position;
                Some(stroke)
            }
            phase if owns_pan && phase.is_finished() => {
                self.pan_finger = None;
                None
            }
            _ => None,
        }
    }

    fn track_pinch(&mut self, positions: [Vec2; 2]) -> Option<ZoomStep> {
        let previous = self.pinch;
        self.pinch = Pinch::Tracking(positions);
        match previous {
            Pinch::Idle => {
                log::debug!("pinch started");
                None
            }
            Pinch::Tracking(last) => {
                let offset = positions[0].distance(positions[1])
                    - last[0].distance(last[1]);
                Some(ZoomStep {
                    offset,
                    source: ZoomSource::Touch,
                })
            }
        }
    }
}
