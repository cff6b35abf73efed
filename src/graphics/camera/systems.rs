//! Systems deciding which cameras render

use bevy_ecs::entity::Entity;
use bevy_ecs::system::{Query, Res, ResMut};
use tracing::{trace, warn};

use crate::graphics::camera::components::Camera;
use crate::graphics::camera::resources::CameraRenderQueue;
use crate::graphics::extract::camera::ExtractedRenderRequests;

/// Fills the [`CameraRenderQueue`] for this frame
///
/// Called on `PreQueue`
pub fn rpq_queue_camera_renders(
    cameras: Query<(Entity, &Camera)>,
    requests: Res<ExtractedRenderRequests>,
    mut queue: ResMut<CameraRenderQueue>,
) {
    queue.0.clear();

    // Cameras without a target have nothing to render into
    queue.0.extend(
        cameras
            .iter()
            .filter(|(_, camera)| camera.is_active && has_target(camera))
            .map(|(entity, _)| entity),
    );

    for request in requests.iter() {
        let Ok((_, camera)) = cameras.get(request.camera) else {
            warn!(
                "{:?} requested a render of {:?}, which is not a camera, skipping",
                request.trigger, request.camera
            );
            continue;
        };

        if !has_target(camera) {
            warn!(
                "{:?} requested a render of {:?}, which has no render target, skipping",
                request.trigger, request.camera
            );
            continue;
        }

        trace!(
            "Queued render of {:?} requested on frame {}",
            request.camera,
            request.frame
        );
        queue.0.push(request.camera);
    }
}

/// Whether the camera renders into anything
fn has_target(camera: &Camera) -> bool {
    camera.render_target.get_texture_entity().is_some()
}

/// Forgets this frame's requests and queue
///
/// Called on `CleanUp`
pub fn rc_clear_camera_renders(
    mut requests: ResMut<ExtractedRenderRequests>,
    mut queue: ResMut<CameraRenderQueue>,
) {
    requests.clear();
    queue.0.clear();
}
