//! Contains camera related functionality including the [`CameraPlugin`]

pub mod components;
pub mod resources;
pub mod systems;

use bevy_app::{App, Plugin};
use bevy_ecs::schedule::IntoSystemConfigs;

use crate::graphics::camera::resources::CameraRenderQueue;
use crate::graphics::camera::systems::{rc_clear_camera_renders, rpq_queue_camera_renders};
use crate::graphics::extract::camera::CameraExtractPlugin;
use crate::graphics::{Render, RenderSet, RenderSubApp};

/// Plugin containing functionality to do with a camera.
///
/// Extracts cameras and render requests and decides, every frame, which cameras render and how
/// often. Needs no GPU, so it works on a bare render sub app.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<CameraExtractPlugin>() {
            app.add_plugins(CameraExtractPlugin);
        }

        if let Some(render_app) = app.get_sub_app_mut(RenderSubApp) {
            render_app
                .init_resource::<CameraRenderQueue>()
                .add_systems(
                    Render,
                    (
                        rpq_queue_camera_renders.in_set(RenderSet::PreQueue),
                        rc_clear_camera_renders.in_set(RenderSet::CleanUp),
                    ),
                );
        }
    }
}
