//! Systems keeping GPU render textures in sync with their descriptions

use std::collections::HashMap;

use bevy_ecs::entity::Entity;
use bevy_ecs::system::{Query, Res, ResMut};
use tracing::{debug, info};

use crate::graphics::render_texture::components::RenderTexture;
use crate::graphics::render_texture::resources::{GpuRenderTexture, GpuRenderTextures};
use crate::graphics::resources::GraphicsState;

/// Creates, recreates and drops GPU textures to match the extracted [`RenderTexture`]s
///
/// Called on `Prepare`
pub fn rp_prepare_render_textures(
    render_textures: Query<(Entity, &RenderTexture)>,
    graphics_state: Res<GraphicsState>,
    mut gpu_render_textures: ResMut<GpuRenderTextures>,
) {
    let changes = render_texture_changes(
        gpu_render_textures
            .iter()
            .map(|(entity, gpu_texture)| (*entity, &gpu_texture.source)),
        render_textures.iter(),
    );

    for entity in changes.dropped {
        debug!("Dropping render texture of {entity:?}");
        gpu_render_textures.remove(&entity);
    }

    for entity in changes.created {
        let Ok((_, render_texture)) = render_textures.get(entity) else {
            continue;
        };

        let size = render_texture.size();
        info!(
            "Creating render texture {} ({}x{}, {:?}) for {entity:?}",
            render_texture.label, size.width, size.height, render_texture.format
        );

        gpu_render_textures.insert(
            entity,
            GpuRenderTexture::new(&graphics_state.device, render_texture.clone()),
        );
    }
}

/// What has to change on the GPU for the uploaded textures to match the extracted ones
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RenderTextureChanges {
    /// Textures whose entity no longer has a [`RenderTexture`], sorted
    pub dropped: Vec<Entity>,
    /// Textures that are new or whose description changed, in extraction order
    pub created: Vec<Entity>,
}

/// Compares the descriptions the GPU textures were created from with the extracted ones.
///
/// A changed description shows up in [`RenderTextureChanges::created`] only, since inserting the
/// new texture replaces the old one.
pub fn render_texture_changes<'a>(
    uploaded: impl IntoIterator<Item = (Entity, &'a RenderTexture)>,
    extracted: impl IntoIterator<Item = (Entity, &'a RenderTexture)>,
) -> RenderTextureChanges {
    let mut stale: HashMap<Entity, &RenderTexture> = uploaded.into_iter().collect();
    let mut changes = RenderTextureChanges::default();

    for (entity, render_texture) in extracted {
        let up_to_date = stale
            .remove(&entity)
            .is_some_and(|source| source == render_texture);
        if !up_to_date {
            changes.created.push(entity);
        }
    }

    changes.dropped = stale.into_keys().collect();
    changes.dropped.sort();

    changes
}

#[cfg(test)]
mod tests {
    use assert2::assert;
    use bevy_ecs::entity::Entity;
    use wgpu::TextureFormat;

    use super::{render_texture_changes, RenderTextureChanges};
    use crate::graphics::render_texture::components::RenderTexture;

    /// A 64 pixel high texture of the given width
    fn texture(width: u32) -> RenderTexture {
        RenderTexture::new("Test", width, 64, TextureFormat::Rgba8UnormSrgb)
    }

    #[test]
    fn new_textures_are_created() {
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);
        let (ta, tb) = (texture(64), texture(32));

        let changes = render_texture_changes([], [(a, &ta), (b, &tb)]);

        assert!(changes.created == [a, b]);
        assert!(changes.dropped.is_empty());
    }

    #[test]
    fn unchanged_textures_are_kept() {
        let a = Entity::from_raw(1);
        let uploaded = texture(64);
        let extracted = texture(64);

        let changes = render_texture_changes([(a, &uploaded)], [(a, &extracted)]);

        assert!(changes == RenderTextureChanges::default());
    }

    #[test]
    fn changed_description_recreates_texture() {
        let a = Entity::from_raw(1);
        let uploaded = texture(64);
        let resized = texture(128);

        let changes = render_texture_changes([(a, &uploaded)], [(a, &resized)]);

        assert!(changes.created == [a]);
        assert!(changes.dropped.is_empty());
    }

    #[test]
    fn missing_textures_are_dropped() {
        let kept = Entity::from_raw(1);
        let gone = Entity::from_raw(2);
        let also_gone = Entity::from_raw(3);
        let t = texture(64);

        let changes = render_texture_changes(
            [(also_gone, &t), (kept, &t), (gone, &t)],
            [(kept, &t)],
        );

        assert!(changes.created.is_empty());
        assert!(changes.dropped == [gone, also_gone]);
    }
}
