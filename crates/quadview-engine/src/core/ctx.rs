use winit::window::{Window, WindowId};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Per-window handles and window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Drawable aspect ratio for camera projection.
    pub fn aspect(&self) -> f32 {
        self.gpu.aspect()
    }

    /// Clears the surface to `clear`, calls `draw` with a ready [`RenderCtx`]
    /// and [`RenderTarget`], then presents the frame.
    ///
    /// Surface errors are mapped to skip-frame / reconfigure / exit, so a lost
    /// or outdated swapchain never reaches the app.
    pub fn render<F>(&mut self, clear: wgpu::Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                log::debug!("surface error: {err}");
                let action = self.gpu.handle_surface_error(err);
                if action == SurfaceErrorAction::Fatal {
                    log::error!("fatal surface error, exiting");
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        // Clear pass — dropped before the encoder is moved into submit().
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("quadview clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.gpu.aspect(),
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
