//! Records and submits the render passes of the cameras queued each frame

pub mod resources;
pub mod systems;
pub mod utils;

use bevy_app::{App, Plugin};
use bevy_ecs::schedule::IntoSystemConfigs;

use crate::graphics::rendering::systems::{
    rfq_finish_queue, rp_create_command_encoder, rq_render_cameras, rr_poll_device,
};
use crate::graphics::{Render, RenderSet, RenderSubApp};

/// Adds the GPU side of rendering to the render sub app.
///
/// Requires the [`GraphicsState`](crate::graphics::resources::GraphicsState),
/// [`CameraPlugin`](crate::graphics::camera::CameraPlugin) and
/// [`RenderTexturePlugin`](crate::graphics::render_texture::RenderTexturePlugin).
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        let Some(render_app) = app.get_sub_app_mut(RenderSubApp) else {
            return;
        };

        render_app.add_systems(
            Render,
            (
                rp_create_command_encoder.in_set(RenderSet::Prepare),
                rq_render_cameras.in_set(RenderSet::Queue),
                rfq_finish_queue.in_set(RenderSet::FinishQueue),
                rr_poll_device.in_set(RenderSet::Render),
            ),
        );
    }
}
