use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Light colors and cone/attenuation parameters.
///
/// Point-light positions and the spotlight's pose are not options: the
/// positions are scene constants and the spotlight follows the camera.
pub struct LightingOptions {
    /// Directional light direction (from the light toward the scene).
    pub dir_direction: [f32; 3],
    /// Directional ambient color.
    pub dir_ambient: [f32; 3],
    /// Directional diffuse color.
    pub dir_diffuse: [f32; 3],
    /// Directional specular color.
    pub dir_specular: [f32; 3],
    /// Ambient color shared by all point lights.
    pub point_ambient: [f32; 3],
    /// Per-light diffuse colors for the four point lights.
    pub point_diffuse: [[f32; 3]; 4],
    /// Specular color shared by all point lights.
    pub point_specular: [f32; 3],
    /// Linear distance-attenuation term for point and spot lights.
    pub attenuation_linear: f32,
    /// Quadratic distance-attenuation term for point and spot lights.
    pub attenuation_quadratic: f32,
    /// Spotlight diffuse color.
    pub spot_diffuse: [f32; 3],
    /// Spotlight specular color.
    pub spot_specular: [f32; 3],
    /// Spotlight inner cone angle in degrees.
    pub spot_cutoff_deg: f32,
    /// Spotlight outer cone angle in degrees.
    pub spot_outer_cutoff_deg: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            dir_direction: [0.2, -1.0, -0.3],
            dir_ambient: [0.0, 0.0, 0.01],
            dir_diffuse: [0.05, 0.05, 0.0],
            dir_specular: [0.0, 0.0, 0.0],
            point_ambient: [0.001, 0.001, 0.001],
            point_diffuse: [
                [0.8, 0.0, 0.0],
                [0.0, 0.8, 0.0],
                [0.0, 0.0, 0.8],
                [0.0, 0.3, 1.0],
            ],
            point_specular: [1.0, 1.0, 1.0],
            attenuation_linear: 0.09,
            attenuation_quadratic: 0.032,
            spot_diffuse: [2.0, 0.05, 2.0],
            spot_specular: [1.0, 1.0, 1.0],
            spot_cutoff_deg: 12.5,
            spot_outer_cutoff_deg: 15.0,
        }
    }
}
