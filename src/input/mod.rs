//! Input handling: the polled input interface, per-frame snapshots, and the
//! touch/pointer state machines that turn raw input into gesture samples.

/// Gesture samples and the mode-selected interpreter.
pub mod gesture;
/// Runtime platform and input mode selection.
pub mod platform;
/// Mouse drag/scroll state machine.
pub mod pointer;
/// Plain-data input frames.
pub mod snapshot;
/// Polled input interface and touch contact types.
pub mod source;
/// Pan finger and pinch state machine.
pub mod touch;
/// Window-event adapter producing input snapshots.
#[cfg(feature = "viewer")]
pub mod window;

pub use gesture::{
    GestureInterpreter, GestureSample, PanStroke, ZoomSource, ZoomStep,
};
pub use platform::{InputMode, Platform};
pub use pointer::PointerGestures;
pub use snapshot::InputSnapshot;
pub use source::{InputSource, TouchContact, TouchPhase, SCROLL_AXIS};
pub use touch::TouchGestures;
