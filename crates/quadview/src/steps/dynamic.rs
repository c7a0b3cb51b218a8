//! Step 4: dynamic mesh — the quad's vertices are rewritten every frame.
//!
//! The quad pulses by scaling its positions on the CPU and re-uploading the
//! vertex buffer, exercising the dynamic-mesh path.

use anyhow::Result;
use glam::Mat4;

use quadview_engine::core::{App, AppControl, FrameCtx};
use quadview_engine::device::GpuInit;
use quadview_engine::input::Key;
use quadview_engine::mesh::{GpuMesh, Mesh, MeshUsage};
use quadview_engine::render::TexturedRenderer;
use quadview_engine::texture::Texture2d;
use quadview_engine::window::{Runtime, RuntimeConfig};

use super::CLEAR;
use super::quad::{CHECKER_CELLS, CHECKER_SIZE};

/// Pulse between 50% and 100% of the unit quad, one cycle per ~3 s.
fn pulse_scale(t: f32) -> f32 {
    0.75 + 0.25 * (t * 2.0).sin()
}

#[derive(Default)]
struct DynamicApp {
    renderer: TexturedRenderer,
    loaded: Option<(GpuMesh, Texture2d)>,
    elapsed: f32,
}

impl DynamicApp {
    fn setup(&mut self, ctx: &FrameCtx<'_, '_>) -> Result<()> {
        if self.loaded.is_none() {
            let device = ctx.gpu.device();
            let queue = ctx.gpu.queue();

            let mesh = GpuMesh::upload(device, &Mesh::unit_quad(), MeshUsage::Dynamic)?;
            let texture = Texture2d::checkerboard(device, queue, CHECKER_SIZE, CHECKER_CELLS)?;

            self.loaded = Some((mesh, texture));
        }
        Ok(())
    }
}

impl App for DynamicApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        if let Err(e) = self.setup(ctx) {
            log::error!("scene setup failed: {e:#}");
            return AppControl::Exit;
        }

        self.elapsed += ctx.time.dt;
        let scaled = Mesh::scaled_quad(pulse_scale(self.elapsed));

        let renderer = &mut self.renderer;
        let loaded = &self.loaded;

        let mut update_failed = false;

        let control = ctx.render(CLEAR, |rctx, target| {
            let Some((mesh, texture)) = loaded.as_ref() else {
                return;
            };

            if let Err(e) = mesh.update_vertices(rctx.queue, &scaled.vertices) {
                log::error!("vertex update failed: {e:#}");
                update_failed = true;
                return;
            }

            renderer.render(rctx, target, mesh, texture, Mat4::IDENTITY);
        });

        if update_failed {
            return AppControl::Exit;
        }

        control
    }
}

pub fn run() -> Result<()> {
    let config = RuntimeConfig {
        title: "quadview — dynamic quad".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), DynamicApp::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_stays_within_bounds() {
        let mut t = 0.0;
        while t < 10.0 {
            let s = pulse_scale(t);
            assert!((0.5..=1.0).contains(&s), "scale {s} out of range at t={t}");
            t += 0.1;
        }
    }
}
