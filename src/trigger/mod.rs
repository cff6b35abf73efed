//! The refraction trigger: renders an environment camera once per frame.
//!
//! An entity with a [`RefractCameraRender`](components::RefractCameraRender) sends one
//! [`RenderCameraRequest`](events::RenderCameraRequest) for its camera every `Update`. The
//! graphics module picks the requests up during extraction and renders the camera into whatever
//! [`CameraRenderTarget`](crate::graphics::camera::components::CameraRenderTarget) it is
//! configured with.

pub mod components;
pub mod errors;
pub mod events;
pub mod systems;

use bevy_app::{App, Plugin, Update};
use bevy_ecs::schedule::{IntoSystemConfigs, SystemSet};
use bevy_ecs::system::Resource;
use serde::Deserialize;

use crate::common::core::FrameCount;
use crate::trigger::events::RenderCameraRequest;
use crate::trigger::systems::u_trigger_refract_cameras;

/// Adds the per-frame environment camera trigger.
#[derive(Default)]
pub struct RefractPlugin {
    /// What to do with triggers whose camera cannot be resolved
    pub missing_camera: MissingCameraPolicy,
}

impl Plugin for RefractPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<RenderCameraRequest>()
            .init_resource::<FrameCount>()
            .insert_resource(self.missing_camera)
            .add_systems(
                Update,
                u_trigger_refract_cameras.in_set(RefractSystems::Trigger),
            );
    }
}

/// System sets of the [`RefractPlugin`]
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum RefractSystems {
    /// Sends the render requests. Order systems that move cameras before this set.
    Trigger,
}

/// What happens when a trigger fires without a valid camera.
#[derive(Resource, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissingCameraPolicy {
    /// Skip the trigger silently
    Ignore,
    /// Skip the trigger and log an error the first time it fails
    #[default]
    Log,
    /// Panic with the error
    Panic,
}

#[cfg(test)]
mod tests {
    use assert2::assert;
    use bevy_app::{App, Last, Update};
    use bevy_ecs::change_detection::DetectChanges;
    use bevy_ecs::entity::Entity;
    use bevy_ecs::event::EventReader;
    use bevy_ecs::schedule::ExecutorKind;
    use bevy_ecs::system::{ResMut, Resource};
    use tracing_test::traced_test;

    use super::{MissingCameraPolicy, RefractPlugin};
    use crate::common::core::CorePlugin;
    use crate::graphics::camera::components::Camera;
    use crate::trigger::components::RefractCameraRender;
    use crate::trigger::events::RenderCameraRequest;

    #[derive(Resource, Default)]
    struct Seen(Vec<RenderCameraRequest>);

    fn record(mut reader: EventReader<RenderCameraRequest>, mut seen: ResMut<Seen>) {
        seen.0.extend(reader.read().copied());
    }

    fn app(policy: MissingCameraPolicy) -> App {
        let mut app = App::new();
        app.add_plugins((
            CorePlugin,
            RefractPlugin {
                missing_camera: policy,
            },
        ))
        .init_resource::<Seen>()
        .add_systems(Last, record);
        app
    }

    fn inactive_camera(app: &mut App) -> Entity {
        app.world_mut()
            .spawn(Camera {
                is_active: false,
                ..Default::default()
            })
            .id()
    }

    #[test]
    fn one_request_per_tick() {
        let mut app = app(MissingCameraPolicy::Log);
        let camera = inactive_camera(&mut app);
        let trigger = app.world_mut().spawn(RefractCameraRender::new(camera)).id();

        app.update();
        assert!(app.world().resource::<Seen>().0.len() == 1);

        app.update();
        app.update();

        let seen = &app.world().resource::<Seen>().0;
        assert!(seen.len() == 3);
        for (frame, request) in seen.iter().enumerate() {
            assert!(request.camera == camera);
            assert!(request.trigger == trigger);
            assert!(request.frame == frame as u64);
        }
    }

    #[test]
    fn one_request_per_trigger() {
        let mut app = app(MissingCameraPolicy::Log);
        let camera = inactive_camera(&mut app);
        app.world_mut().spawn(RefractCameraRender::new(camera));
        app.world_mut().spawn(RefractCameraRender::new(camera));

        app.update();
        app.update();

        let seen = &app.world().resource::<Seen>().0;
        assert!(seen.len() == 4);
        assert!(seen.iter().all(|request| request.camera == camera));
        assert!(seen.iter().filter(|request| request.frame == 1).count() == 2);
    }

    #[test]
    #[traced_test]
    fn unset_reference_is_logged_once() {
        let mut app = app(MissingCameraPolicy::Log);
        // Keep the trigger on the test thread so its logs are captured
        app.edit_schedule(Update, |schedule| {
            schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        });
        app.world_mut().spawn(RefractCameraRender::default());

        app.update();
        app.update();

        assert!(app.world().resource::<Seen>().0.is_empty());
        assert!(logs_contain("has no environment camera assigned"));
        logs_assert(|lines: &[&str]| {
            match lines
                .iter()
                .filter(|line| line.contains("has no environment camera assigned"))
                .count()
            {
                1 => Ok(()),
                n => Err(format!("expected one error, found {n}")),
            }
        });
    }

    #[test]
    #[traced_test]
    fn reported_again_after_resolving() {
        let mut app = app(MissingCameraPolicy::Log);
        app.edit_schedule(Update, |schedule| {
            schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        });
        let trigger = app.world_mut().spawn(RefractCameraRender::default()).id();

        app.update();
        app.update();

        let camera = inactive_camera(&mut app);
        app.world_mut()
            .entity_mut(trigger)
            .insert(RefractCameraRender::new(camera));
        app.update();

        app.world_mut().despawn(camera);
        app.update();
        app.update();

        assert!(app.world().resource::<Seen>().0.len() == 1);
        logs_assert(|lines: &[&str]| {
            let unset = lines
                .iter()
                .filter(|line| line.contains("has no environment camera assigned"))
                .count();
            let missing = lines
                .iter()
                .filter(|line| line.contains("which is not a camera"))
                .count();
            match (unset, missing) {
                (1, 1) => Ok(()),
                counts => Err(format!("expected one error of each kind, found {counts:?}")),
            }
        });
    }

    #[test]
    fn unset_reference_is_ignored() {
        let mut app = app(MissingCameraPolicy::Ignore);
        app.world_mut().spawn(RefractCameraRender::default());

        for _ in 0..3 {
            app.update();
        }

        assert!(app.world().resource::<Seen>().0.is_empty());
    }

    #[test]
    #[should_panic(expected = "has no environment camera assigned")]
    fn unset_reference_panics() {
        let mut app = app(MissingCameraPolicy::Panic);
        app.world_mut().spawn(RefractCameraRender::default());

        app.update();
    }

    #[test]
    fn despawned_camera_stops_requests() {
        let mut app = app(MissingCameraPolicy::Ignore);
        let camera = inactive_camera(&mut app);
        app.world_mut().spawn(RefractCameraRender::new(camera));

        app.update();
        app.world_mut().despawn(camera);
        app.update();
        app.update();

        assert!(app.world().resource::<Seen>().0.len() == 1);
    }

    #[test]
    fn assigning_later_starts_requests() {
        let mut app = app(MissingCameraPolicy::Ignore);
        let trigger = app.world_mut().spawn(RefractCameraRender::default()).id();

        app.update();

        let camera = inactive_camera(&mut app);
        app.world_mut()
            .entity_mut(trigger)
            .insert(RefractCameraRender::new(camera));
        app.update();

        let seen = &app.world().resource::<Seen>().0;
        assert!(seen.len() == 1);
        assert!(seen[0].frame == 1);
    }

    #[test]
    fn trigger_never_mutates_the_camera() {
        let mut app = app(MissingCameraPolicy::Log);
        let camera = inactive_camera(&mut app);
        app.world_mut().spawn(RefractCameraRender::new(camera));

        app.update();
        let tick = app.world().entity(camera).get_ref::<Camera>().unwrap().last_changed();
        app.update();
        app.update();

        let camera_ref = app.world().entity(camera).get_ref::<Camera>().unwrap();
        assert!(camera_ref.last_changed() == tick);
        assert!(!camera_ref.is_active);
    }
}
