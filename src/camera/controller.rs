use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::camera::core::FlyCamera;
use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// GPU uniform buffer holding the view-projection matrix and camera state
/// read by the shading stage.
///
/// NOTE: must match the WGSL `Camera` struct layout exactly (96 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position (for specular lighting).
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Camera forward direction (for the headlamp spotlight).
    pub forward: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fovy: 45.0,
            forward: [0.0, 0.0, -1.0],
            _pad: 0.0,
        }
    }
}

impl CameraUniform {
    /// Refresh all fields from the camera's current state and projection.
    pub fn update(&mut self, camera: &FlyCamera, aspect: f32, znear: f32, zfar: f32) {
        // perspective_rh already uses [0,1] depth range (wgpu convention)
        let proj = Mat4::perspective_rh(camera.fovy.to_radians(), aspect, znear, zfar);
        self.view_proj = (proj * camera.view_matrix()).to_cols_array_2d();
        self.position = camera.position.to_array();
        self.forward = camera.forward().to_array();
        self.fovy = camera.fovy;
    }
}

/// Owns the [`FlyCamera`] together with its projection parameters and GPU
/// resources (uniform buffer, bind group layout, bind group).
pub struct CameraController {
    /// The free-fly camera holding position and orientation state.
    pub camera: FlyCamera,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// CPU copy of the camera uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 0 in both demo pipelines).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group binding the uniform buffer.
    pub bind_group: wgpu::BindGroup,
}

impl CameraController {
    /// Create the controller and its GPU resources. The camera starts at the
    /// options' position with default angles, matching the original demo.
    #[must_use]
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let mut camera = FlyCamera::new(
            options.position.into(),
            glam::Vec3::Y,
            crate::camera::core::DEFAULT_YAW,
            crate::camera::core::DEFAULT_PITCH,
        );
        camera.movement_speed = options.movement_speed;
        camera.look_sensitivity = options.look_sensitivity;
        camera.fovy = options.fovy;

        let aspect = context.config.width as f32 / context.config.height as f32;

        let mut uniform = CameraUniform::default();
        uniform.update(&camera, aspect, options.znear, options.zfar);

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
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
                label: Some("Camera Bind Group"),
            });

        Self {
            camera,
            aspect,
            znear: options.znear,
            zfar: options.zfar,
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Rebuild the uniform from current camera state and upload it.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform
            .update(&self.camera, self.aspect, self.znear, self.zfar);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }

    /// Track a viewport resize. Zero-sized dimensions are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn uniform_tracks_camera_state() {
        let mut camera = FlyCamera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, -90.0, 0.0);
        camera.fovy = 30.0;

        let mut uniform = CameraUniform::default();
        uniform.update(&camera, 16.0 / 9.0, 0.1, 100.0);

        assert_eq!(uniform.position, [0.0, 0.0, 3.0]);
        assert_eq!(uniform.fovy, 30.0);
        let forward = Vec3::from_array(uniform.forward);
        assert!((forward - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn uniform_is_gpu_sized() {
        // Must match the WGSL struct (mat4 + two padded vec3/f32 pairs).
        assert_eq!(std::mem::size_of::<CameraUniform>(), 96);
    }
}
