//! Systems of the refraction trigger

use std::collections::HashSet;

use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{Local, Query, Res};
use snafu::{ensure, OptionExt};
use tracing::{debug, error, trace};

use crate::common::core::FrameCount;
use crate::graphics::camera::components::Camera;
use crate::trigger::components::RefractCameraRender;
use crate::trigger::errors::{CameraMissingCtx, TriggerResult, UnsetCtx};
use crate::trigger::events::RenderCameraRequest;
use crate::trigger::MissingCameraPolicy;

/// Asks every referenced environment camera to render, once per trigger.
///
/// Runs on `Update`, so exactly once per frame. Triggers whose camera cannot be resolved are
/// handled according to the [`MissingCameraPolicy`]. With [`MissingCameraPolicy::Log`] each
/// trigger is reported once until its camera resolves again.
pub fn u_trigger_refract_cameras(
    triggers: Query<(Entity, &RefractCameraRender)>,
    cameras: Query<(), With<Camera>>,
    policy: Res<MissingCameraPolicy>,
    frame_count: Res<FrameCount>,
    mut requests: EventWriter<RenderCameraRequest>,
    mut reported: Local<HashSet<Entity>>,
) {
    for (trigger, render) in triggers.iter() {
        match resolve_env_camera(trigger, render, &cameras) {
            Ok(camera) => {
                if reported.remove(&trigger) {
                    debug!("Environment camera of {trigger:?} resolved to {camera:?}");
                }

                trace!("{trigger:?} requests a render of {camera:?}");
                requests.send(RenderCameraRequest {
                    camera,
                    trigger,
                    frame: frame_count.0,
                });
            }
            Err(err) => match *policy {
                MissingCameraPolicy::Ignore => {}
                MissingCameraPolicy::Log => {
                    if reported.insert(trigger) {
                        error!("{err}");
                    }
                }
                MissingCameraPolicy::Panic => panic!("{err}"),
            },
        }
    }

    // Forget despawned triggers
    if !reported.is_empty() {
        reported.retain(|trigger| triggers.contains(*trigger));
    }
}

/// Resolves the camera a trigger refers to.
///
/// # Errors
/// * [`TriggerError::Unset`](crate::trigger::errors::TriggerError::Unset) if no camera was assigned
/// * [`TriggerError::CameraMissing`](crate::trigger::errors::TriggerError::CameraMissing) if the
///   entity is gone or has no [`Camera`]
pub fn resolve_env_camera(
    trigger: Entity,
    render: &RefractCameraRender,
    cameras: &Query<(), With<Camera>>,
) -> TriggerResult<Entity> {
    let camera = render.env_camera.context(UnsetCtx { trigger })?;
    ensure!(cameras.contains(camera), CameraMissingCtx { trigger, camera });

    Ok(camera)
}
