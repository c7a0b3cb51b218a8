//! 2D texture loading and upload.
//!
//! Sources: an image file (decoded with the `image` crate), raw RGBA8 bytes,
//! or a procedural checkerboard so the demos run without any assets on disk.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// RGBA8 sRGB texture, exposed as the view + sampler the renderers bind.
pub struct Texture2d {
    /// Process-unique id; renderers key their cached bind group on it.
    id: u64,

    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
}

impl Texture2d {
    /// Loads and decodes an image file.
    pub fn open(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .with_context(|| format!("failed to load texture {}", path.display()))?;
        let rgba = img.to_rgba8();
        let (w, h) = rgba.dimensions();
        Self::from_rgba8(device, queue, w, h, rgba.as_raw())
    }

    /// Creates a texture from raw RGBA8 pixels, row-major, no padding.
    pub fn from_rgba8(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "texture has zero size");
        anyhow::ensure!(
            pixels.len() == (width as usize) * (height as usize) * 4,
            "pixel data is {} bytes, expected {} for {}x{} rgba8",
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            width,
            height
        );

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("quadview texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("quadview texture sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        // The view holds the underlying texture resource alive.
        Ok(Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            view,
            sampler,
        })
    }

    /// Procedural checkerboard fallback texture.
    pub fn checkerboard(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        size: u32,
        cells: u32,
    ) -> Result<Self> {
        let pixels = checkerboard_pixels(size, cells);
        Self::from_rgba8(device, queue, size, size, &pixels)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }
}

/// Generates `size`×`size` RGBA8 pixels of a `cells`×`cells` checkerboard.
fn checkerboard_pixels(size: u32, cells: u32) -> Vec<u8> {
    const LIGHT: [u8; 4] = [220, 220, 220, 255];
    const DARK: [u8; 4] = [40, 40, 60, 255];

    let cell = (size / cells.max(1)).max(1);
    let mut pixels = Vec::with_capacity((size as usize) * (size as usize) * 4);

    for y in 0..size {
        for x in 0..size {
            let parity = (x / cell + y / cell) % 2;
            pixels.extend_from_slice(if parity == 0 { &LIGHT } else { &DARK });
        }
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(pixels: &[u8], size: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * size + x) * 4) as usize;
        [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
    }

    #[test]
    fn checkerboard_has_expected_size() {
        let pixels = checkerboard_pixels(64, 8);
        assert_eq!(pixels.len(), 64 * 64 * 4);
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let size = 16;
        let pixels = checkerboard_pixels(size, 2); // 8x8 px cells
        let a = pixel(&pixels, size, 0, 0);
        let b = pixel(&pixels, size, 8, 0);
        let c = pixel(&pixels, size, 8, 8);
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn checkerboard_is_opaque() {
        let pixels = checkerboard_pixels(8, 2);
        assert!(pixels.chunks_exact(4).all(|p| p[3] == 255));
    }

    #[test]
    fn degenerate_cell_counts_do_not_panic() {
        // cells = 0 and cells > size both fall back to 1px cells.
        assert_eq!(checkerboard_pixels(4, 0).len(), 4 * 4 * 4);
        assert_eq!(checkerboard_pixels(4, 16).len(), 4 * 4 * 4);
    }
}
