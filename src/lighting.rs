//! Scene lighting: one directional light, four colored point lights, and a
//! spotlight that follows the camera like a headlamp.

use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::options::LightingOptions;

/// World positions of the four point lights (also where the lamp markers
/// are drawn).
pub const POINT_LIGHT_POSITIONS: [Vec3; 4] = [
    Vec3::new(0.7, 0.2, 2.0),
    Vec3::new(2.3, -3.3, -4.0),
    Vec3::new(-4.0, 2.0, -12.0),
    Vec3::new(0.0, 0.0, -3.0),
];

/// Directional light block.
/// NOTE: every vec3 is padded to 16 bytes to match the WGSL struct layout.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLight {
    /// Light direction (from the light toward the scene).
    pub direction: [f32; 3],
    pub(crate) _pad0: f32,
    /// Ambient contribution.
    pub ambient: [f32; 3],
    pub(crate) _pad1: f32,
    /// Diffuse contribution.
    pub diffuse: [f32; 3],
    pub(crate) _pad2: f32,
    /// Specular contribution.
    pub specular: [f32; 3],
    pub(crate) _pad3: f32,
}

/// Point light block with quadratic distance attenuation.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLight {
    /// World-space position.
    pub position: [f32; 3],
    pub(crate) _pad0: f32,
    /// Ambient contribution.
    pub ambient: [f32; 3],
    pub(crate) _pad1: f32,
    /// Diffuse contribution.
    pub diffuse: [f32; 3],
    pub(crate) _pad2: f32,
    /// Specular contribution.
    pub specular: [f32; 3],
    pub(crate) _pad3: f32,
    /// Constant attenuation term.
    pub constant: f32,
    /// Linear attenuation term.
    pub linear: f32,
    /// Quadratic attenuation term.
    pub quadratic: f32,
    pub(crate) _pad4: f32,
}

/// Spotlight block (camera headlamp) with smooth inner/outer cone edges.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLight {
    /// World-space position (camera eye).
    pub position: [f32; 3],
    pub(crate) _pad0: f32,
    /// Beam direction (camera forward).
    pub direction: [f32; 3],
    pub(crate) _pad1: f32,
    /// Ambient contribution.
    pub ambient: [f32; 3],
    pub(crate) _pad2: f32,
    /// Diffuse contribution.
    pub diffuse: [f32; 3],
    pub(crate) _pad3: f32,
    /// Specular contribution.
    pub specular: [f32; 3],
    pub(crate) _pad4: f32,
    /// Constant attenuation term.
    pub constant: f32,
    /// Linear attenuation term.
    pub linear: f32,
    /// Quadratic attenuation term.
    pub quadratic: f32,
    /// Cosine of the inner cone angle.
    pub cut_off: f32,
    /// Cosine of the outer cone angle.
    pub outer_cut_off: f32,
    pub(crate) _pad5: [f32; 3],
}

/// Lighting configuration shared by the cube shader.
/// NOTE: must match the WGSL `Lights` struct layout exactly (496 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    /// The single directional light.
    pub directional: DirectionalLight,
    /// The four point lights.
    pub point: [PointLight; 4],
    /// The camera-attached spotlight.
    pub spot: SpotLight,
}

impl LightsUniform {
    /// Build the uniform from the lighting options and the fixed point-light
    /// positions.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        let point = std::array::from_fn(|i| PointLight {
            position: POINT_LIGHT_POSITIONS[i].to_array(),
            _pad0: 0.0,
            ambient: options.point_ambient,
            _pad1: 0.0,
            diffuse: options.point_diffuse[i],
            _pad2: 0.0,
            specular: options.point_specular,
            _pad3: 0.0,
            constant: 1.0,
            linear: options.attenuation_linear,
            quadratic: options.attenuation_quadratic,
            _pad4: 0.0,
        });

        Self {
            directional: DirectionalLight {
                direction: options.dir_direction,
                _pad0: 0.0,
                ambient: options.dir_ambient,
                _pad1: 0.0,
                diffuse: options.dir_diffuse,
                _pad2: 0.0,
                specular: options.dir_specular,
                _pad3: 0.0,
            },
            point,
            spot: SpotLight {
                position: [0.0; 3],
                _pad0: 0.0,
                direction: [0.0, 0.0, -1.0],
                _pad1: 0.0,
                ambient: [0.0; 3],
                _pad2: 0.0,
                diffuse: options.spot_diffuse,
                _pad3: 0.0,
                specular: options.spot_specular,
                _pad4: 0.0,
                constant: 1.0,
                linear: options.attenuation_linear,
                quadratic: options.attenuation_quadratic,
                cut_off: options.spot_cutoff_deg.to_radians().cos(),
                outer_cut_off: options.spot_outer_cutoff_deg.to_radians().cos(),
                _pad5: [0.0; 3],
            },
        }
    }

    /// Aim the spotlight from `eye` along `forward` (the camera headlamp).
    pub fn aim_spot(&mut self, eye: Vec3, forward: Vec3) {
        self.spot.position = eye.to_array();
        self.spot.direction = forward.to_array();
    }
}

/// Owns the lights uniform and its GPU resources.
pub struct Lighting {
    /// CPU copy of the lights uniform.
    pub uniform: LightsUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 1 in the cube pipeline).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group binding the uniform buffer.
    pub bind_group: wgpu::BindGroup,
}

impl Lighting {
    /// Create the lighting block and its GPU resources.
    #[must_use]
    pub fn new(context: &RenderContext, options: &LightingOptions) -> Self {
        let uniform = LightsUniform::from_options(options);

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Lighting Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
                label: Some("Lighting Bind Group"),
            });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Re-aim the spotlight from the camera eye along its view direction.
    /// Call every frame after the camera moves.
    pub fn update_headlamp(&mut self, eye: Vec3, forward: Vec3) {
        self.uniform.aim_spot(eye, forward);
    }

    /// Upload the current uniform to the GPU.
    pub fn update_gpu(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_gpu_sized() {
        assert_eq!(std::mem::size_of::<DirectionalLight>(), 64);
        assert_eq!(std::mem::size_of::<PointLight>(), 80);
        assert_eq!(std::mem::size_of::<SpotLight>(), 112);
        assert_eq!(std::mem::size_of::<LightsUniform>(), 64 + 4 * 80 + 112);
    }

    #[test]
    fn headlamp_follows_camera() {
        let options = LightingOptions::default();
        let mut uniform = LightsUniform::from_options(&options);

        uniform.aim_spot(Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Z);
        assert_eq!(uniform.spot.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.spot.direction, [0.0, 0.0, -1.0]);

        // Re-aiming tracks subsequent camera motion.
        uniform.aim_spot(Vec3::new(-4.0, 0.5, 1.0), Vec3::X);
        assert_eq!(uniform.spot.position, [-4.0, 0.5, 1.0]);
        assert_eq!(uniform.spot.direction, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn spot_cutoffs_are_cosines() {
        let options = LightingOptions::default();
        let uniform = LightsUniform::from_options(&options);
        // Inner cone is tighter than the outer cone, so its cosine is larger.
        assert!(uniform.spot.cut_off > uniform.spot.outer_cut_off);
        assert!((uniform.spot.cut_off - 12.5_f32.to_radians().cos()).abs() < 1e-6);
    }

    #[test]
    fn point_lights_sit_at_fixed_positions() {
        let options = LightingOptions::default();
        let uniform = LightsUniform::from_options(&options);
        for (light, pos) in uniform.point.iter().zip(POINT_LIGHT_POSITIONS) {
            assert_eq!(light.position, pos.to_array());
        }
    }
}
