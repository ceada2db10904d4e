//! Crate-level error types.
//!
//! The per-frame controller path never fails; these errors only surface
//! when loading options or traces from disk, or when starting the viewer.

use std::fmt;

/// Errors produced by the touchcam crate.
#[derive(Debug)]
pub enum TouchcamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but describe an unusable configuration (e.g. a bound
    /// whose minimum exceeds its maximum).
    InvalidOptions(String),
    /// Input trace parsing failure.
    TraceParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for TouchcamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => {
                write!(f, "invalid options: {msg}")
            }
            Self::TraceParse(msg) => write!(f, "trace parse error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for TouchcamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TouchcamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
