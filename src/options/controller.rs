use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Closed `[min, max]` interval used to confine one camera quantity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
pub struct Bounds {
    /// Lower limit (inclusive).
    pub min: f32,
    /// Upper limit (inclusive).
    pub max: f32,
}

impl Bounds {
    /// Interval from `min` to `max`.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether both limits are finite and ordered.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Clamp `value` into the interval.
    ///
    /// Unlike [`f32::clamp`] this never panics on a malformed interval; the
    /// lower limit wins if `min > max`. Validated options never hit that
    /// case.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.min(self.max).max(self.min)
    }

    /// Whether `value` lies inside the interval.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controller", inline)]
#[serde(default)]
/// Pan/zoom sensitivities and the limits the camera is kept within.
pub struct ControllerOptions {
    /// World units travelled per full viewport width dragged.
    #[schemars(title = "Pan Speed", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub pan_speed: f32,
    /// Degrees of field-of-view per pixel of pinch distance change.
    #[schemars(title = "Touch Zoom Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub touch_zoom_speed: f32,
    /// Degrees of field-of-view per unit of scroll-wheel axis.
    #[schemars(title = "Mouse Zoom Speed", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub mouse_zoom_speed: f32,
    /// Allowed camera X positions.
    #[schemars(skip)]
    pub bounds_x: Bounds,
    /// Allowed camera Z positions.
    #[schemars(skip)]
    pub bounds_z: Bounds,
    /// Allowed field-of-view values in degrees. The lower limit of -10 is
    /// kept as shipped even though a negative field-of-view is not
    /// physically meaningful.
    #[schemars(skip)]
    pub zoom_bounds: Bounds,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            pan_speed: 20.0,
            touch_zoom_speed: 0.1,
            mouse_zoom_speed: 10.0,
            bounds_x: Bounds::new(-5.0, 5.0),
            bounds_z: Bounds::new(-10.0, 10.0),
            zoom_bounds: Bounds::new(-10.0, 85.0),
        }
    }
}

impl ControllerOptions {
    /// Describe the first unusable field, if any.
    pub(crate) fn invalid_field(&self) -> Option<String> {
        let speeds = [
            ("pan_speed", self.pan_speed),
            ("touch_zoom_speed", self.touch_zoom_speed),
            ("mouse_zoom_speed", self.mouse_zoom_speed),
        ];
        if let Some((name, value)) =
            speeds.iter().find(|(_, value)| !value.is_finite())
        {
            return Some(format!("controller.{name} is not finite ({value})"));
        }

        let bounds = [
            ("bounds_x", self.bounds_x),
            ("bounds_z", self.bounds_z),
            ("zoom_bounds", self.zoom_bounds),
        ];
        bounds.iter().find(|(_, b)| !b.is_valid()).map(|(name, b)| {
            format!(
                "controller.{name} must be finite with min <= max (got [{}, \
                 {}])",
                b.min, b.max
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_constants() {
        let opts = ControllerOptions::default();
        assert_eq!(opts.pan_speed, 20.0);
        assert_eq!(opts.touch_zoom_speed, 0.1);
        assert_eq!(opts.mouse_zoom_speed, 10.0);
        assert_eq!(opts.bounds_x, Bounds::new(-5.0, 5.0));
        assert_eq!(opts.bounds_z, Bounds::new(-10.0, 10.0));
    }

    #[test]
    fn zoom_lower_bound_is_pinned_at_minus_ten() {
        // A negative minimum looks like a typo for 10, but it is what the
        // controller has always shipped with.
        let opts = ControllerOptions::default();
        assert_eq!(opts.zoom_bounds.min, -10.0);
        assert_eq!(opts.zoom_bounds.max, 85.0);
    }

    #[test]
    fn clamp_keeps_values_inside() {
        let b = Bounds::new(-5.0, 5.0);
        assert_eq!(b.clamp(12.0), 5.0);
        assert_eq!(b.clamp(-7.5), -5.0);
        assert_eq!(b.clamp(1.25), 1.25);
        assert!(b.contains(5.0));
        assert!(!b.contains(5.01));
    }

    #[test]
    fn inverted_bounds_are_reported() {
        let opts = ControllerOptions {
            bounds_z: Bounds::new(3.0, -3.0),
            ..ControllerOptions::default()
        };
        let msg = opts.invalid_field().unwrap();
        assert!(msg.contains("bounds_z"), "{msg}");
    }

    #[test]
    fn non_finite_speed_is_reported() {
        let opts = ControllerOptions {
            mouse_zoom_speed: f32::NAN,
            ..ControllerOptions::default()
        };
        let msg = opts.invalid_field().unwrap();
        assert!(msg.contains("mouse_zoom_speed"), "{msg}");
        assert!(ControllerOptions::default().invalid_field().is_none());
    }
}
