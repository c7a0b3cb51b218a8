use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by each viewer step.
pub trait App {
    /// Called for raw window events, before input translation is consumed.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
