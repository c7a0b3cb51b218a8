/// Renderer-facing context (device/queue + surface format + aspect ratio).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,

    /// Drawable width/height ratio, for camera projection.
    pub aspect: f32,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        aspect: f32,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            aspect,
        }
    }
}

/// Target for drawing (encoder + color view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
