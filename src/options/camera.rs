use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement and projection parameters.
pub struct CameraOptions {
    /// Starting world-space position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Downward tilt in degrees (0 = looking along +Z, 90 = straight down).
    #[schemars(title = "Pitch", range(min = 0.0, max = 90.0), extend("step" = 1.0))]
    pub pitch: f32,
    /// Starting vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 85.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 10.0, 0.0],
            pitch: 60.0,
            fovy: 60.0,
            znear: 0.3,
            zfar: 1000.0,
        }
    }
}
