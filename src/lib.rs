// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math: intentional float casts and comparisons
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]

//! Tutorial-scale real-time 3D rendering demo built on wgpu.
//!
//! A free-flying camera moves through a field of ten textured cubes lit by
//! one directional light, four colored point lights, and a spotlight that
//! follows the camera like a headlamp.
//!
//! # Key entry points
//!
//! - [`viewer::Viewer`] - the standalone window and event loop
//! - [`camera::FlyCamera`] - the yaw/pitch free-fly camera
//! - [`engine::RenderEngine`] - per-frame update and render orchestration
//! - [`options::Options`] - runtime configuration (window, camera, lighting)
//!
//! # Architecture
//!
//! Everything runs single-threaded in the winit event loop: each redraw
//! samples the accumulated input state, advances the camera, re-aims the
//! spotlight, uploads the camera and lighting uniforms, and records one
//! render pass (cubes, then lamp markers).

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod lighting;
pub mod options;
pub mod renderer;
pub mod util;
pub mod viewer;

pub use error::Error;
pub use viewer::Viewer;
