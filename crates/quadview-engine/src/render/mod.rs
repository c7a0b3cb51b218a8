//! GPU rendering.
//!
//! Two pipelines, one per tutorial capability: `FlatRenderer` draws a mesh in
//! a single solid color, `TexturedRenderer` samples a bound 2D texture. Both
//! transform vertices by a camera view-projection uniform (identity for the
//! camera-less steps).
//!
//! Renderers create their pipelines lazily on first use, keyed on the surface
//! format, and record into a pass that loads the already-cleared target.

mod ctx;
mod flat;
mod textured;

pub use ctx::{RenderCtx, RenderTarget};
pub use flat::FlatRenderer;
pub use textured::TexturedRenderer;
