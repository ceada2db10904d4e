use serde::{Deserialize, Serialize};

/// Runtime family the host is running on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Native desktop (Windows, macOS, Linux).
    #[default]
    Desktop,
    /// Native mobile (Android, iOS).
    Mobile,
    /// Browser-embedded (wasm32).
    Browser,
}

impl Platform {
    /// Platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Browser
        } else if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Whether this platform normally has a touch screen.
    #[must_use]
    pub const fn assumes_touch(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Which gesture handler interprets input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// One-finger pan, two-finger pinch zoom.
    Touch,
    /// Primary-button drag pan, scroll-wheel zoom.
    #[default]
    Pointer,
}

impl InputMode {
    /// Touch mode when the device has a touch screen, except in the browser,
    /// which is always treated as a pointer device. This is a coarse rule,
    /// not a capability probe: touch laptops and tablet browsers get
    /// pointer mode.
    #[must_use]
    pub const fn select(touch_supported: bool, platform: Platform) -> Self {
        if touch_supported && !matches!(platform, Platform::Browser) {
            Self::Touch
        } else {
            Self::Pointer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_needs_capability_and_native_runtime() {
        assert_eq!(InputMode::select(true, Platform::Mobile), InputMode::Touch);
        assert_eq!(
            InputMode::select(true, Platform::Desktop),
            InputMode::Touch
        );
        assert_eq!(
            InputMode::select(false, Platform::Mobile),
            InputMode::Pointer
        );
    }

    #[test]
    fn browser_is_always_pointer() {
        assert_eq!(
            InputMode::select(true, Platform::Browser),
            InputMode::Pointer
        );
        assert_eq!(
            InputMode::select(false, Platform::Browser),
            InputMode::Pointer
        );
    }

    #[test]
    fn host_platform_is_native_in_tests() {
        // Unit tests never run inside a browser.
        assert_ne!(Platform::current(), Platform::Browser);
    }
}
