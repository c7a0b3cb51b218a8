//! The tutorial steps, each a small `App` over the engine.

pub mod camera;
pub mod dynamic;
pub mod quad;
pub mod triangle;

/// Background color shared by all steps.
pub const CLEAR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};
