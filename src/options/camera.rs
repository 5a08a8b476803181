use serde::{Deserialize, Serialize};

use crate::camera::core;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera placement, projection, and control parameters.
pub struct CameraOptions {
    /// Initial eye position in world space.
    pub position: [f32; 3],
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Look sensitivity in degrees per pixel of cursor motion.
    pub look_sensitivity: f32,
    /// Initial vertical field of view in degrees (scroll zoom narrows it).
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            movement_speed: core::DEFAULT_SPEED,
            look_sensitivity: core::DEFAULT_SENSITIVITY,
            fovy: core::DEFAULT_FOVY,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
