//! Step 2: a textured quad, still without a camera.

use anyhow::{Context, Result};
use glam::Mat4;

use quadview_engine::core::{App, AppControl, FrameCtx};
use quadview_engine::device::GpuInit;
use quadview_engine::mesh::{GpuMesh, Mesh, MeshUsage};
use quadview_engine::render::TexturedRenderer;
use quadview_engine::texture::Texture2d;
use quadview_engine::window::{Runtime, RuntimeConfig};

use super::CLEAR;

/// Fallback checkerboard parameters when no image is given.
pub const CHECKER_SIZE: u32 = 256;
pub const CHECKER_CELLS: u32 = 8;

/// Uploads the quad mesh and its texture on first use.
pub struct QuadScene {
    texture_path: Option<String>,
    loaded: Option<(GpuMesh, Texture2d)>,
}

impl QuadScene {
    pub fn new(texture_path: Option<String>) -> Self {
        Self {
            texture_path,
            loaded: None,
        }
    }

    /// Returns the mesh + texture, uploading them on the first call.
    pub fn get_or_upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
    ) -> Result<&(GpuMesh, Texture2d)> {
        let loaded = match self.loaded.take() {
            Some(pair) => pair,
            None => {
                let mesh = GpuMesh::upload(device, &Mesh::unit_quad(), MeshUsage::Static)
                    .context("quad upload failed")?;

                let texture = match self.texture_path.as_deref() {
                    Some(path) => Texture2d::open(device, queue, path)?,
                    None => Texture2d::checkerboard(device, queue, CHECKER_SIZE, CHECKER_CELLS)?,
                };

                (mesh, texture)
            }
        };

        Ok(self.loaded.insert(loaded))
    }
}

struct QuadApp {
    renderer: TexturedRenderer,
    scene: QuadScene,
}

impl App for QuadApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let pair = match self
            .scene
            .get_or_upload(ctx.gpu.device(), ctx.gpu.queue())
        {
            Ok(pair) => pair,
            Err(e) => {
                log::error!("scene setup failed: {e:#}");
                return AppControl::Exit;
            }
        };

        let renderer = &mut self.renderer;

        ctx.render(CLEAR, |rctx, target| {
            let (mesh, texture) = pair;
            renderer.render(rctx, target, mesh, texture, Mat4::IDENTITY);
        })
    }
}

pub fn run(texture_path: Option<String>) -> Result<()> {
    let config = RuntimeConfig {
        title: "quadview — textured quad".to_string(),
        ..RuntimeConfig::default()
    };

    let app = QuadApp {
        renderer: TexturedRenderer::new(),
        scene: QuadScene::new(texture_path),
    };

    Runtime::run(config, GpuInit::default(), app)
}
