//! Step 1: a solid triangle on a cyan background.

use anyhow::Result;
use glam::Mat4;

use quadview_engine::core::{App, AppControl, FrameCtx};
use quadview_engine::device::GpuInit;
use quadview_engine::mesh::{GpuMesh, Mesh, MeshUsage};
use quadview_engine::render::FlatRenderer;
use quadview_engine::window::{Runtime, RuntimeConfig};

use super::CLEAR;

const ORANGE: [f32; 4] = [1.0, 0.5, 0.2, 1.0];

#[derive(Default)]
struct TriangleApp {
    renderer: FlatRenderer,
    mesh: Option<GpuMesh>,
}

impl App for TriangleApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.mesh.is_none() {
            match GpuMesh::upload(ctx.gpu.device(), &Mesh::triangle(), MeshUsage::Static) {
                Ok(mesh) => self.mesh = Some(mesh),
                Err(e) => {
                    log::error!("mesh upload failed: {e:#}");
                    return AppControl::Exit;
                }
            }
        }

        let renderer = &mut self.renderer;
        let mesh = &self.mesh;

        ctx.render(CLEAR, |rctx, target| {
            if let Some(mesh) = mesh.as_ref() {
                renderer.render(rctx, target, mesh, Mat4::IDENTITY, ORANGE);
            }
        })
    }
}

pub fn run() -> Result<()> {
    let config = RuntimeConfig {
        title: "quadview — triangle".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), TriangleApp::default())
}
