//! Step 3: textured quad with a keyboard fly camera.
//!
//! W/S/A/D translate, R/F move vertically, arrow keys look around, Escape
//! quits. Window resizes reproject through the live aspect ratio.

use anyhow::Result;

use quadview_engine::camera::{Camera, FlyController};
use quadview_engine::core::{App, AppControl, FrameCtx};
use quadview_engine::device::GpuInit;
use quadview_engine::input::Key;
use quadview_engine::render::TexturedRenderer;
use quadview_engine::window::{Runtime, RuntimeConfig};

use super::CLEAR;
use super::quad::QuadScene;

struct CameraApp {
    renderer: TexturedRenderer,
    scene: QuadScene,
    camera: Camera,
    controller: FlyController,
}

impl App for CameraApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        self.controller
            .update(&mut self.camera, ctx.input, ctx.time.dt);

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

        let view_proj = self.camera.view_proj(ctx.aspect());
        let renderer = &mut self.renderer;

        ctx.render(CLEAR, |rctx, target| {
            let (mesh, texture) = pair;
            renderer.render(rctx, target, mesh, texture, view_proj);
        })
    }
}

pub fn run(texture_path: Option<String>) -> Result<()> {
    let config = RuntimeConfig {
        title: "quadview — camera".to_string(),
        ..RuntimeConfig::default()
    };

    let app = CameraApp {
        renderer: TexturedRenderer::new(),
        scene: QuadScene::new(texture_path),
        camera: Camera::default(),
        controller: FlyController::default(),
    };

    Runtime::run(config, GpuInit::default(), app)
}
