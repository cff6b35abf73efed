//! GPU side of render textures

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use bevy_ecs::entity::Entity;
use bevy_ecs::system::Resource;

use crate::graphics::render_texture::components::RenderTexture;

/// A render texture that exists on the GPU
pub struct GpuRenderTexture {
    /// The texture
    pub texture: wgpu::Texture,
    /// Default view of [`Self::texture`], used as the color attachment
    pub view: wgpu::TextureView,
    /// The description the texture was created from
    pub source: RenderTexture,
}

impl GpuRenderTexture {
    /// Creates the texture described by `source`
    pub fn new(device: &wgpu::Device, source: RenderTexture) -> Self {
        let texture = device.create_texture(&source.descriptor());
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        GpuRenderTexture {
            texture,
            view,
            source,
        }
    }
}

/// Every live render texture, keyed by the main world entity holding the [`RenderTexture`].
///
/// Unlike render world entities this survives from frame to frame.
#[derive(Resource, Default)]
pub struct GpuRenderTextures(pub HashMap<Entity, GpuRenderTexture>);

impl Deref for GpuRenderTextures {
    type Target = HashMap<Entity, GpuRenderTexture>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for GpuRenderTextures {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
