use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Textures are uploaded as sRGB, so an sRGB surface keeps sampled colors
    /// matching the decoded image.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO is broadly supported and vsynced.
    pub present_mode: wgpu::PresentMode,

    /// Required wgpu features. The viewer pipelines need none.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface (a hint).
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

/// Owns the wgpu core objects and the surface configuration.
///
/// The surface borrows the window; the runtime keeps the window alive for at
/// least as long as this context.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,
}

/// A single acquired frame.
///
/// Short-lived: holding the surface texture prevents acquisition of
/// subsequent frames.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

impl<'w> Gpu<'w> {
    /// Creates a GPU context bound to a window.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        // All backends, letting wgpu pick the platform-appropriate one.
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let info = adapter.get_info();
        log::info!("adapter: {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("quadview device"),
                required_features: init.required_features,
                required_limits: init.required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let format =
            choose_surface_format(&caps.formats, init.prefer_srgb).context("no supported surface formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: init.present_mode,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };

        surface.configure(&device, &config);

        Ok(Gpu {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Returns the active surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Width/height ratio of the drawable, for camera projection.
    pub fn aspect(&self) -> f32 {
        self.size.width.max(1) as f32 / self.size.height.max(1) as f32
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Reconfigures the surface after a resize.
    ///
    /// wgpu cannot configure a 0x0 surface; in that case only internal state
    /// is updated and configuration is deferred until a non-empty resize.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }

        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Acquires the next surface texture and creates an encoder.
    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("quadview frame encoder"),
            });

        Ok(GpuFrame {
            surface_texture,
            view,
            encoder,
        })
    }

    /// Submits the recorded commands and schedules the frame for presentation.
    ///
    /// A surface texture dropped without `present()` is discarded, so this
    /// must be called for the frame to reach the screen.
    pub fn submit(&self, frame: GpuFrame) {
        self.queue.submit(std::iter::once(frame.encoder.finish()));
        frame.surface_texture.present();
    }

    /// Converts a `SurfaceError` into a higher-level action.
    pub fn handle_surface_error(&mut self, err: SurfaceError) -> SurfaceErrorAction {
        match err {
            SurfaceError::Lost | SurfaceError::Outdated => {
                if self.size.width > 0 && self.size.height > 0 {
                    self.surface.configure(&self.device, &self.config);
                }
                SurfaceErrorAction::Reconfigured
            }
            SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
            SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
            SurfaceError::Other => SurfaceErrorAction::SkipFrame,
        }
    }
}

fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if formats.contains(&f) {
                return Some(f);
            }
        }
    }

    formats.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_format_is_preferred() {
        let formats = [
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ];
        assert_eq!(
            choose_surface_format(&formats, true),
            Some(wgpu::TextureFormat::Bgra8UnormSrgb)
        );
    }

    #[test]
    fn first_format_when_srgb_not_requested() {
        let formats = [
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ];
        assert_eq!(
            choose_surface_format(&formats, false),
            Some(wgpu::TextureFormat::Bgra8Unorm)
        );
    }

    #[test]
    fn empty_format_list_is_none() {
        assert_eq!(choose_surface_format(&[], true), None);
    }
}
