//! Folds winit window events into one [`InputSnapshot`] per frame.
//!
//! winit pushes events; the controller polls. The collector sits between
//! them: feed it every [`WindowEvent`] as it arrives, then call
//! [`end_frame`](WindowInputCollector::end_frame) once per redraw to get
//! the frame's snapshot.

use glam::Vec2;
use winit::event::{
    ElementState, MouseButton, MouseScrollDelta, Touch, WindowEvent,
};

use super::platform::Platform;
use super::snapshot::InputSnapshot;
use super::source::{TouchContact, TouchPhase};

/// Axis units reported per wheel notch.
const SCROLL_AXIS_PER_LINE: f32 = 0.1;
/// Trackpad pixels that count as one wheel notch.
const PIXELS_PER_LINE: f32 = 100.0;

/// Accumulates window events between frames.
#[derive(Debug, Clone)]
pub struct WindowInputCollector {
    platform: Platform,
    touch_supported: bool,
    /// Window height in physical pixels, for flipping Y to a bottom-left
    /// origin.
    height: f32,
    pointer: Vec2,
    primary_held: bool,
    primary_down: bool,
    scroll: f32,
    /// Contacts in touch-down order.
    touches: Vec<TouchContact>,
}

impl WindowInputCollector {
    /// Collector for a window `height` pixels tall on the given device.
    #[must_use]
    pub fn new(
        platform: Platform,
        touch_supported: bool,
        height: u32,
    ) -> Self {
        Self {
            platform,
            touch_supported,
            height: height as f32,
            pointer: Vec2::ZERO,
            primary_held: false,
            primary_down: false,
            scroll: 0.0,
            touches: Vec::new(),
        }
    }

    /// Collector for the compiled-for platform.
    #[must_use]
    pub fn for_host(height: u32) -> Self {
        let platform = Platform::current();
        Self::new(platform, platform.assumes_touch(), height)
    }

    /// Empty snapshot describing this collector's device, for picking the
    /// controller's input mode before any frame has run.
    #[must_use]
    pub fn device(&self) -> InputSnapshot {
        InputSnapshot::new(self.platform, self.touch_supported)
    }

    /// Track a resized window.
    pub fn resize(&mut self, height: u32) {
        self.height = height as f32;
    }

    /// Record an event. Returns true if it was input the collector uses.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => {
                let pressed = *state == ElementState::Pressed;
                if pressed && !self.primary_held {
                    self.primary_down = true;
                }
                self.primary_held = pressed;
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = self.to_screen(position.x, position.y);
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 / PIXELS_PER_LINE
                    }
                };
                self.scroll += lines * SCROLL_AXIS_PER_LINE;
                true
            }
            WindowEvent::Touch(touch) => {
                self.handle_touch(touch);
                true
            }
            WindowEvent::Resized(size) => {
                self.resize(size.height);
                false
            }
            _ => false,
        }
    }

    /// Fold one touch event into the contact list.
    ///
    /// Phases only carry the latest state within a frame. A finger that
    /// lands and lifts before `end_frame` is reported once as `Ended` and
    /// never as `Began`, so it neither claims nor moves the pan.
    fn handle_touch(&mut self, touch: &Touch) {
        use winit::event::TouchPhase as Phase;

        let position = self.to_screen(touch.location.x, touch.location.y);
        let existing = self.touches.iter_mut().find(|t| t.id == touch.id);

        match (touch.phase, existing) {
            (Phase::Started, Some(contact)) => {
                contact.position = position;
                contact.phase = TouchPhase::Began;
            }
            (Phase::Started, None) => {
                self.touches.push(TouchContact::new(
                    touch.id,
                    position,
                    TouchPhase::Began,
                ));
            }
            (Phase::Moved, Some(contact)) => {
                contact.position = position;
                // A finger that lands and slides within one frame still
                // reports Began first.
                if contact.phase != TouchPhase::Began {
                    contact.phase = TouchPhase::Moved;
                }
            }
            (Phase::Ended, Some(contact)) => {
                contact.position = position;
                contact.phase = TouchPhase::Ended;
            }
            (Phase::Cancelled, Some(contact)) => {
                contact.position = position;
                contact.phase = TouchPhase::Canceled;
            }
            (phase, None) => {
                log::debug!(
                    "ignoring {phase:?} for unknown touch {}",
                    touch.id
                );
            }
        }
    }

    fn to_screen(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(x as f32, self.height - y as f32)
    }

    /// Snapshot of this frame's input, then roll per-frame state over to
    /// the next frame (lifted fingers disappear, the rest go stationary,
    /// button-down and scroll reset).
    pub fn end_frame(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            touch_supported: self.touch_supported,
            platform: self.platform,
            touches: self.touches.clone(),
            primary_down: self.primary_down,
            primary_held: self.primary_held || self.primary_down,
            pointer: self.pointer,
            scroll: self.scroll,
        };

        self.touches.retain(|t| !t.phase.is_finished());
        for touch in &mut self.touches {
            touch.phase = TouchPhase::Stationary;
        }
        self.primary_down = false;
        self.scroll = 0.0;

        snapshot
    }
}

#[cfg(test)]
mod tests {
    use winit::dpi::PhysicalPosition;
    use winit::event::DeviceId;

    use super::*;

    fn touch(
        id: u64,
        phase: winit::event::TouchPhase,
        x: f64,
        y: f64,
    ) -> WindowEvent {
        WindowEvent::Touch(Touch {
            device_id: device(),
            phase,
            location: PhysicalPosition::new(x, y),
            force: None,
            id,
        })
    }

    fn device() -> DeviceId {
        // SAFETY: the id is only stored in the event, never handed back to
        // the platform.
        unsafe { DeviceId::dummy() }
    }

    fn collector() -> WindowInputCollector {
        WindowInputCollector::new(Platform::Mobile, true, 600)
    }

    #[test]
    fn touch_lifecycle_maps_to_frame_phases() {
        use winit::event::TouchPhase as Phase;

        let mut input = collector();
        assert!(input.handle_event(&touch(9, Phase::Started, 10.0, 100.0)));
        let frame = input.end_frame();
        assert_eq!(
            frame.touches,
            vec![TouchContact::new(
                9,
                Vec2::new(10.0, 500.0),
                TouchPhase::Began
            )]
        );

        let frame = input.end_frame();
        assert_eq!(frame.touches[0].phase, TouchPhase::Stationary);

        let _ = input.handle_event(&touch(9, Phase::Moved, 20.0, 100.0));
        let frame = input.end_frame();
        assert_eq!(frame.touches[0].phase, TouchPhase::Moved);
        assert_eq!(frame.touches[0].position, Vec2::new(20.0, 500.0));

        let _ = input.handle_event(&touch(9, Phase::Ended, 20.0, 100.0));
        let frame = input.end_frame();
        assert_eq!(frame.touches[0].phase, TouchPhase::Ended);
        assert!(input.end_frame().touches.is_empty());
    }

    #[test]
    fn tap_within_one_frame_reports_only_ended() {
        use winit::event::TouchPhase as Phase;

        let mut input = collector();
        let _ = input.handle_event(&touch(2, Phase::Started, 30.0, 100.0));
        let _ = input.handle_event(&touch(2, Phase::Ended, 30.0, 100.0));
        let frame = input.end_frame();
        assert_eq!(frame.touches.len(), 1);
        assert_eq!(frame.touches[0].phase, TouchPhase::Ended);
        assert!(input.end_frame().touches.is_empty());
    }

    #[test]
    fn unknown_touch_updates_are_ignored() {
        use winit::event::TouchPhase as Phase;

        let mut input = collector();
        let _ = input.handle_event(&touch(4, Phase::Moved, 1.0, 1.0));
        assert!(input.end_frame().touches.is_empty());
    }

    #[test]
    fn press_is_reported_once_and_held_after() {
        let mut input = collector();
        let press = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Left,
        };
        let _ = input.handle_event(&press);
        let frame = input.end_frame();
        assert!(frame.primary_down && frame.primary_held);

        let frame = input.end_frame();
        assert!(!frame.primary_down && frame.primary_held);
    }

    #[test]
    fn wheel_notches_accumulate_and_reset() {
        let mut input = collector();
        for _ in 0..3 {
            let _ = input.handle_event(&WindowEvent::MouseWheel {
                device_id: device(),
                delta: MouseScrollDelta::LineDelta(0.0, 1.0),
                phase: winit::event::TouchPhase::Moved,
            });
        }
        let frame = input.end_frame();
        assert!((frame.scroll - 0.3).abs() < 1e-6);
        assert_eq!(input.end_frame().scroll, 0.0);
    }

    #[test]
    fn cursor_y_is_flipped() {
        let mut input = collector();
        let _ = input.handle_event(&WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(30.0, 50.0),
        });
        assert_eq!(input.end_frame().pointer, Vec2::new(30.0, 550.0));
    }
}
