//! Camera system for the free-fly viewpoint.
//!
//! Provides the yaw/pitch orientation math, the GPU-facing controller that
//! owns the camera uniform buffer, and the per-frame input sampler.

/// GPU-facing camera controller: projection, uniform buffer, bind group.
pub mod controller;
/// Free-fly camera math: position, Euler angles, derived basis vectors.
pub mod core;
/// Per-frame input sampling from window events.
pub mod input;

pub use controller::CameraController;
pub use core::{FlyCamera, MoveDirection};
pub use input::{InputSample, InputSampler};
