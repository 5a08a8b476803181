//! Depth targets and 2D color textures.
//!
//! Color textures decode from PNG/JPEG on disk; a missing file falls back
//! to a procedural pattern so the demo runs without shipped assets. A file
//! that exists but fails to decode is an error.

use std::path::Path;

use crate::error::Error;
use crate::gpu::render_context::RenderContext;

/// Depth buffer format used by every pipeline in the demo.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A depth render target matching the swapchain size.
pub struct DepthTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
}

impl DepthTexture {
    /// Create a depth texture with the given dimensions.
    #[must_use]
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// A sampled 2D color texture (material map).
pub struct ColorTexture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
    /// Repeat-addressed linear sampler.
    pub sampler: wgpu::Sampler,
}

impl ColorTexture {
    /// Upload RGBA8 pixels as a sampled texture.
    #[must_use]
    pub fn from_pixels(
        context: &RenderContext,
        label: &str,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = context.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        context.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = context.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Decode an image file into a sampled texture; a missing file falls
    /// back to the pixels produced by `fallback` (logged at warn).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Texture`] if the file exists but cannot be decoded.
    pub fn load_or(
        context: &RenderContext,
        path: &Path,
        label: &str,
        fallback: fn() -> (u32, u32, Vec<u8>),
    ) -> Result<Self, Error> {
        if path.exists() {
            let img = image::open(path)
                .map_err(|e| Error::Texture(format!("{}: {e}", path.display())))?
                .to_rgba8();
            let (width, height) = img.dimensions();
            Ok(Self::from_pixels(context, label, width, height, &img))
        } else {
            log::warn!(
                "{} not found, using procedural {label}",
                path.display()
            );
            let (width, height, rgba) = fallback();
            Ok(Self::from_pixels(context, label, width, height, &rgba))
        }
    }
}

/// Procedural stand-in for the diffuse map: a two-tone crate-like
/// checkerboard.
#[must_use]
pub fn checkerboard_pixels() -> (u32, u32, Vec<u8>) {
    const SIZE: u32 = 64;
    const CELL: u32 = 8;
    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let odd = ((x / CELL) + (y / CELL)) % 2 == 1;
            if odd {
                rgba.extend_from_slice(&[150, 100, 55, 255]);
            } else {
                rgba.extend_from_slice(&[95, 60, 30, 255]);
            }
        }
    }
    (SIZE, SIZE, rgba)
}

/// Procedural stand-in for the specular map: bright cell borders so the
/// highlights read as metal banding.
#[must_use]
pub fn specular_border_pixels() -> (u32, u32, Vec<u8>) {
    const SIZE: u32 = 64;
    const CELL: u32 = 8;
    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let on_border = x % CELL == 0 || y % CELL == 0;
            let v = if on_border { 200 } else { 40 };
            rgba.extend_from_slice(&[v, v, v, 255]);
        }
    }
    (SIZE, SIZE, rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_has_expected_dimensions() {
        let (w, h, rgba) = checkerboard_pixels();
        assert_eq!(rgba.len(), (w * h * 4) as usize);
        // Adjacent cells alternate.
        let first = &rgba[0..4];
        let next_cell = ((8 * 4) as usize)..((8 * 4) + 4) as usize;
        assert_ne!(first, &rgba[next_cell]);
    }

    #[test]
    fn specular_border_is_opaque_grayscale() {
        let (w, h, rgba) = specular_border_pixels();
        assert_eq!(rgba.len(), (w * h * 4) as usize);
        for px in rgba.chunks(4) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert_eq!(px[3], 255);
        }
    }
}
