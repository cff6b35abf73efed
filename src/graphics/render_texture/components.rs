//! Components for render textures

use bevy_ecs::prelude::Component;
use refract_macros::ExtractComponent;
use wgpu::{Extent3d, TextureDescriptor, TextureDimension, TextureFormat, TextureUsages};

/// An offscreen texture cameras can render into.
///
/// Point a camera at it with
/// [`CameraRenderTarget::Texture`](crate::graphics::camera::components::CameraRenderTarget::Texture).
/// The GPU texture is created in the render world the first frame this component is seen and
/// recreated whenever it changes.
#[derive(Component, Clone, Debug, PartialEq, ExtractComponent)]
pub struct RenderTexture {
    /// Debug label of the GPU texture
    pub label: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
}

impl RenderTexture {
    /// Usages every render texture is created with: it can be rendered to, sampled and copied
    pub const USAGES: TextureUsages = TextureUsages::RENDER_ATTACHMENT
        .union(TextureUsages::TEXTURE_BINDING)
        .union(TextureUsages::COPY_SRC);

    /// Creates a render texture description
    pub fn new(label: impl Into<String>, width: u32, height: u32, format: TextureFormat) -> Self {
        RenderTexture {
            label: label.into(),
            width,
            height,
            format,
        }
    }

    /// The size of the texture. Zero sizes are clamped to one pixel since wgpu rejects them.
    pub fn size(&self) -> Extent3d {
        Extent3d {
            width: self.width.max(1),
            height: self.height.max(1),
            depth_or_array_layers: 1,
        }
    }

    /// The wgpu descriptor of the texture
    pub fn descriptor(&self) -> TextureDescriptor<'_> {
        TextureDescriptor {
            label: Some(self.label.as_str()),
            size: self.size(),
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: self.format,
            usage: Self::USAGES,
            view_formats: &[],
        }
    }
}

impl Default for RenderTexture {
    fn default() -> Self {
        RenderTexture::new("Render Texture", 512, 512, TextureFormat::Rgba8UnormSrgb)
    }
}
