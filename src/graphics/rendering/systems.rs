//! Contains wgpu code for rendering

use std::ops::DerefMut;

use bevy_ecs::system::{Commands, Query, Res, ResMut};
use bevy_ecs::world::World;
use tracing::{trace, warn};
use wgpu::{CommandEncoderDescriptor, Maintain};

use crate::graphics::camera::components::Camera;
use crate::graphics::camera::resources::CameraRenderQueue;
use crate::graphics::render_texture::resources::GpuRenderTextures;
use crate::graphics::rendering::resources::CommandEncoderWrapper;
use crate::graphics::rendering::utils::record_camera_pass;
use crate::graphics::resources::GraphicsState;

/// Creates the command encoder
///
/// Called on `Prepare`
pub fn rp_create_command_encoder(graphics_state: Res<GraphicsState>, mut commands: Commands) {
    let encoder = graphics_state
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    commands.insert_resource(CommandEncoderWrapper(encoder));
}

/// Records one render pass per entry of the [`CameraRenderQueue`]
///
/// Called on `Queue`
pub fn rq_render_cameras(
    cameras: Query<&Camera>,
    queue: Res<CameraRenderQueue>,
    render_textures: Res<GpuRenderTextures>,
    mut command_encoder: ResMut<CommandEncoderWrapper>,
) {
    for camera_entity in queue.iter() {
        let Ok(camera) = cameras.get(*camera_entity) else {
            continue;
        };

        let Some(texture_entity) = camera.render_target.get_texture_entity() else {
            continue;
        };

        let Some(render_texture) = render_textures.get(&texture_entity) else {
            warn!(
                "No render texture on {texture_entity:?}, skipping camera {camera_entity:?}"
            );
            continue;
        };

        trace!("Rendering {camera_entity:?} into {}", render_texture.source.label);
        record_camera_pass(
            format!("{camera_entity:?}").as_str(),
            &render_texture.view,
            command_encoder.deref_mut(),
            &camera.clear_behaviour,
        );
    }
}

/// Submits the command buffer
///
/// Called on `FinishQueue`
pub fn rfq_finish_queue(world: &mut World) {
    let command_encoder = world
        .remove_resource::<CommandEncoderWrapper>()
        .expect("Command encoder should exist");
    world
        .resource::<GraphicsState>()
        .queue
        .submit(std::iter::once(command_encoder.0.finish()));
}

/// Lets the device run callbacks and free resources of finished submissions
///
/// Called on `Render`
pub fn rr_poll_device(graphics_state: Res<GraphicsState>) {
    if !graphics_state.device.poll(Maintain::Poll).is_queue_empty() {
        trace!("GPU work still in flight");
    }
}
