//! Offscreen render textures, see [`RenderTexture`](components::RenderTexture)

pub mod components;
pub mod resources;
pub mod systems;

use bevy_app::{App, Plugin};
use bevy_ecs::schedule::IntoSystemConfigs;

use crate::graphics::extract::utils::extract_component::ExtractComponentPlugin;
use crate::graphics::render_texture::components::RenderTexture;
use crate::graphics::render_texture::resources::GpuRenderTextures;
use crate::graphics::render_texture::systems::rp_prepare_render_textures;
use crate::graphics::{Render, RenderSet, RenderSubApp};

/// Extracts [`RenderTexture`]s and keeps their GPU textures up to date.
///
/// Requires the [`GraphicsState`](crate::graphics::resources::GraphicsState) in the render sub app.
pub struct RenderTexturePlugin;

impl Plugin for RenderTexturePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ExtractComponentPlugin::<RenderTexture>::default());

        if let Some(render_app) = app.get_sub_app_mut(RenderSubApp) {
            render_app
                .init_resource::<GpuRenderTextures>()
                .add_systems(
                    Render,
                    rp_prepare_render_textures.in_set(RenderSet::Prepare),
                );
        }
    }
}
