use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{InputEvent, InputFrame, InputState, Key, KeyState, Modifiers};
use crate::time::{FrameClock, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "quadview".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    exit: bool,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.exit = true;
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, initializes the GPU and drives `app` until it exits
    /// or the window closes.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = ViewerState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.startup_error.map_or(Ok(()), Err)
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct ViewerState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    exit_requested: bool,

    /// Window/GPU setup failure, reported from `Runtime::run` after the loop
    /// unwinds.
    startup_error: Option<anyhow::Error>,
}

impl<A> ViewerState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            exit_requested: false,
            startup_error: None,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        self.entry = Some(entry);
        Ok(())
    }
}

impl<A> ApplicationHandler for ViewerState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("startup failed: {e:#}");
            self.startup_error = Some(e);
            self.request_exit();
            event_loop.exit();
            return;
        }

        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the viewer renders every frame.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Split borrows so the app can run inside the ouroboros closure.
        let (app, entry) = (&mut self.app, &mut self.entry);
        let Some(entry) = entry.as_mut() else {
            return;
        };

        let mut exit_from_app = false;

        entry.with_mut(|fields| {
            if let Some(ev) = translate_input_event(&event) {
                fields.input_state.apply_event(fields.input_frame, ev);
            }

            if app.on_window_event(&event) == AppControl::Exit {
                exit_from_app = true;
            }
        });

        if exit_from_app {
            self.exit_requested = true;
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => {
                let mut runtime_ctx = RuntimeCtx::default();
                let mut app_control = AppControl::Continue;

                entry.with_mut(|fields| {
                    let ft: FrameTime = fields.clock.tick();

                    // Scope so `ctx` is dropped before clearing frame state.
                    {
                        let mut ctx = FrameCtx {
                            window: WindowCtx {
                                id: fields.window.id(),
                                window: fields.window,
                            },
                            gpu: fields.gpu,
                            input: fields.input_state,
                            input_frame: fields.input_frame,
                            time: ft,
                            runtime: &mut runtime_ctx,
                        };

                        app_control = app.on_frame(&mut ctx);
                    }

                    // Per-frame deltas are consumed; drop them.
                    fields.input_frame.clear();
                });

                if app_control == AppControl::Exit || runtime_ctx.exit {
                    self.exit_requested = true;
                }
            }

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}

fn translate_input_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => {
            let ms: ModifiersState = m.state();
            Some(InputEvent::ModifiersChanged(map_modifiers(ms)))
        }

        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::KeyboardInput { event, .. } => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };

            Some(InputEvent::Key {
                key: map_key(event.physical_key),
                state,
                repeat: event.repeat,
            })
        }

        _ => None,
    }
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Space => Key::Space,

            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,

            KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
            KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
            KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
            KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

            KeyCode::KeyA => Key::A,
            KeyCode::KeyB => Key::B,
            KeyCode::KeyC => Key::C,
            KeyCode::KeyD => Key::D,
            KeyCode::KeyE => Key::E,
            KeyCode::KeyF => Key::F,
            KeyCode::KeyG => Key::G,
            KeyCode::KeyH => Key::H,
            KeyCode::KeyI => Key::I,
            KeyCode::KeyJ => Key::J,
            KeyCode::KeyK => Key::K,
            KeyCode::KeyL => Key::L,
            KeyCode::KeyM => Key::M,
            KeyCode::KeyN => Key::N,
            KeyCode::KeyO => Key::O,
            KeyCode::KeyP => Key::P,
            KeyCode::KeyQ => Key::Q,
            KeyCode::KeyR => Key::R,
            KeyCode::KeyS => Key::S,
            KeyCode::KeyT => Key::T,
            KeyCode::KeyU => Key::U,
            KeyCode::KeyV => Key::V,
            KeyCode::KeyW => Key::W,
            KeyCode::KeyX => Key::X,
            KeyCode::KeyY => Key::Y,
            KeyCode::KeyZ => Key::Z,

            KeyCode::Digit0 => Key::Digit0,
            KeyCode::Digit1 => Key::Digit1,
            KeyCode::Digit2 => Key::Digit2,
            KeyCode::Digit3 => Key::Digit3,
            KeyCode::Digit4 => Key::Digit4,
            KeyCode::Digit5 => Key::Digit5,
            KeyCode::Digit6 => Key::Digit6,
            KeyCode::Digit7 => Key::Digit7,
            KeyCode::Digit8 => Key::Digit8,
            KeyCode::Digit9 => Key::Digit9,

            _ => Key::Unknown,
        },

        PhysicalKey::Unidentified(_) => Key::Unknown,
    }
}
