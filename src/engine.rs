//! Per-frame orchestration: input application, uniform uploads, and the
//! single render pass.

use std::sync::Arc;

use winit::window::Window;

use crate::camera::core::MoveDirection;
use crate::camera::{CameraController, InputSample};
use crate::error::Error;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::DepthTexture;
use crate::lighting::Lighting;
use crate::options::Options;
use crate::renderer::{CubeRenderer, LampRenderer};
use crate::util::FrameTiming;

/// Background clear color (near-black with a blue cast).
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.01,
    g: 0.01,
    b: 0.05,
    a: 1.0,
};

/// Owns the GPU context and everything drawn each frame.
pub struct RenderEngine {
    /// wgpu device/queue/surface owner.
    pub context: RenderContext,
    /// Free-fly camera and its GPU uniform.
    pub camera: CameraController,
    /// Scene lights and their GPU uniform.
    pub lighting: Lighting,
    /// Frame timing statistics.
    pub frame_timing: FrameTiming,
    cubes: CubeRenderer,
    lamps: LampRenderer,
    depth: DepthTexture,
}

impl RenderEngine {
    /// Initialize the GPU context and all scene resources.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gpu`] if wgpu initialization fails and
    /// [`Error::Texture`] if a material map exists but cannot be decoded.
    pub async fn new(
        window: Arc<Window>,
        size: (u32, u32),
        options: &Options,
    ) -> Result<Self, Error> {
        let context = RenderContext::new(window, size).await?;

        let camera = CameraController::new(&context, &options.camera);
        let lighting = Lighting::new(&context, &options.lighting);
        let cubes = CubeRenderer::new(&context, &camera.layout, &lighting.layout)?;
        let lamps = LampRenderer::new(&context, &camera.layout, &options.lighting);
        let depth = DepthTexture::new(&context.device, size.0, size.1);

        log::info!(
            "engine initialized: {}x{}, {:?}",
            size.0,
            size.1,
            context.format()
        );

        Ok(Self {
            context,
            camera,
            lighting,
            frame_timing: FrameTiming::new(),
            cubes,
            lamps,
            depth,
        })
    }

    /// Reconfigure the surface, depth target, and camera aspect for a new
    /// window size. Zero-sized dimensions are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.camera.resize(width, height);
        self.depth = DepthTexture::new(&self.context.device, width, height);
    }

    /// Apply one frame of sampled input and upload the refreshed camera and
    /// lighting uniforms. `dt` is the elapsed frame time in seconds.
    pub fn update(&mut self, sample: &InputSample, dt: f32) {
        let camera = &mut self.camera.camera;

        if sample.forward {
            camera.apply_movement(MoveDirection::Forward, dt);
        }
        if sample.backward {
            camera.apply_movement(MoveDirection::Backward, dt);
        }
        if sample.left {
            camera.apply_movement(MoveDirection::Left, dt);
        }
        if sample.right {
            camera.apply_movement(MoveDirection::Right, dt);
        }
        if sample.look != glam::Vec2::ZERO {
            camera.apply_look(sample.look.x, sample.look.y, true);
        }
        if sample.scroll != 0.0 {
            camera.apply_zoom(sample.scroll);
        }

        self.lighting
            .update_headlamp(camera.position, camera.forward());

        self.camera.update_gpu(&self.context.queue);
        self.lighting.update_gpu(&self.context.queue);
    }

    /// Record and submit one frame: cubes, then lamp markers.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain frame cannot be
    /// acquired; `Lost`/`Outdated` should be answered with a resize.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.cubes
                .draw(&mut pass, &self.camera.bind_group, &self.lighting.bind_group);
            self.lamps.draw(&mut pass, &self.camera.bind_group);
        }

        self.context.submit(encoder);
        frame.present();

        self.frame_timing.end_frame();
        Ok(())
    }
}
