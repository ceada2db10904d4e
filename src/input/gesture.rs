//! Device-independent gesture samples and the interpreter that produces
//! them.

use glam::Vec2;

use super::platform::InputMode;
use super::pointer::PointerGestures;
use super::source::InputSource;
use super::touch::TouchGestures;

/// A drag between two screen positions (pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanStroke {
    /// Where the drag was last frame (the gesture baseline).
    pub from: Vec2,
    /// Where it is now.
    pub to: Vec2,
}

/// Which device a zoom step came from; selects the zoom speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomSource {
    /// Pinch distance change in pixels.
    Touch,
    /// Scroll-wheel axis value.
    Mouse,
}

/// A signed zoom offset. Positive zooms in (narrows the field of view).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep {
    /// Raw offset in device units.
    pub offset: f32,
    /// Device that produced it.
    pub source: ZoomSource,
}

/// Everything the camera should do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    /// Drag to pan along, if any.
    pub pan: Option<PanStroke>,
    /// Zoom to apply, if any. A zero offset is carried through and ignored
    /// by the controller.
    pub zoom: Option<ZoomStep>,
}

impl GestureSample {
    /// Whether the sample asks for nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pan.is_none() && self.zoom.is_none()
    }
}

/// Gesture state for whichever device drives the camera.
///
/// Chosen once (see [`InputMode::select`]) and kept for the controller's
/// lifetime.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureInterpreter {
    /// Finger gestures.
    Touch(TouchGestures),
    /// Mouse gestures.
    Pointer(PointerGestures),
}

impl GestureInterpreter {
    /// Fresh interpreter for `mode`.
    #[must_use]
    pub fn new(mode: InputMode) -> Self {
        match mode {
            InputMode::Touch => Self::Touch(TouchGestures::default()),
            InputMode::Pointer => Self::Pointer(PointerGestures::default()),
        }
    }

    /// Fresh interpreter for the device behind `source`.
    #[must_use]
    pub fn for_source(source: &impl InputSource) -> Self {
        let mode =
            InputMode::select(source.touch_supported(), source.platform());
        log::debug!(
            "selected {mode:?} input (touch_supported={}, platform={:?})",
            source.touch_supported(),
            source.platform()
        );
        Self::new(mode)
    }

    /// Mode this interpreter handles.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        match self {
            Self::Touch(_) => InputMode::Touch,
            Self::Pointer(_) => InputMode::Pointer,
        }
    }

    /// Advance gesture state by one frame of input and report what the
    /// camera should do.
    pub fn sample(&mut self, input: &impl InputSource) -> GestureSample {
        match self {
            Self::Touch(touch) => touch.sample(input),
            Self::Pointer(pointer) => pointer.sample(input),
        }
    }
}
