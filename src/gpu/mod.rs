//! GPU plumbing: the wgpu device/surface owner and texture helpers.

/// Core wgpu context: device, queue, surface, configuration.
pub mod render_context;
/// Depth targets and 2D color textures with file/procedural sources.
pub mod texture;

pub use render_context::{RenderContext, RenderContextError};
pub use texture::{ColorTexture, DepthTexture, DEPTH_FORMAT};
