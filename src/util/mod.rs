//! Shared utilities for host loops.

/// Frame pacing for host loops.
pub mod frame_timing;
