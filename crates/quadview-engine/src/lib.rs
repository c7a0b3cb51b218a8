//! Quadview engine crate.
//!
//! Owns the platform + GPU runtime pieces shared by the viewer steps:
//! window/event loop, device/surface management, keyboard input, frame
//! timing, camera math, mesh/texture upload and the two render pipelines.

pub mod camera;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod mesh;
pub mod render;
pub mod texture;
pub mod time;
pub mod window;
