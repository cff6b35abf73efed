//! Responsible for extracting cameras and render requests into the render world

use std::ops::{Deref, DerefMut};

use crate::graphics::camera::components::Camera;
use crate::graphics::extract::utils::extract_component::ExtractComponentPlugin;
use crate::graphics::extract::utils::extract_param::Extract;
use crate::graphics::{ExtractSchedule, RenderSubApp};
use crate::trigger::events::RenderCameraRequest;
use bevy_app::{App, Plugin};
use bevy_ecs::event::EventReader;
use bevy_ecs::system::{ResMut, Resource};

/// Extracts Cameras and [`RenderCameraRequest`]s into the render world
pub struct CameraExtractPlugin;

impl Plugin for CameraExtractPlugin {
    fn build(&self, app: &mut App) {
        // The extraction reads the events even if nothing sends them
        app.add_event::<RenderCameraRequest>();
        app.add_plugins(ExtractComponentPlugin::<Camera>::default());

        if let Some(render_app) = app.get_sub_app_mut(RenderSubApp) {
            render_app
                .init_resource::<ExtractedRenderRequests>()
                .add_systems(ExtractSchedule, e_extract_render_requests);
        }
    }
}

/// The render requests sent during the frame being rendered, in the order they were sent.
///
/// Emptied at the end of every render.
#[derive(Resource, Default, Debug)]
pub struct ExtractedRenderRequests(pub Vec<RenderCameraRequest>);

impl Deref for ExtractedRenderRequests {
    type Target = Vec<RenderCameraRequest>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ExtractedRenderRequests {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Copies the requests sent since the last extraction
///
/// Runs on `Extract`.
fn e_extract_render_requests(
    mut extracted_requests: ResMut<ExtractedRenderRequests>,
    mut requests: Extract<EventReader<RenderCameraRequest>>,
) {
    extracted_requests.extend(requests.read().copied());
}
