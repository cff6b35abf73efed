//! Components of the refraction trigger

use bevy_ecs::entity::Entity;
use bevy_ecs::prelude::Component;

/// Asks an environment camera to render once per frame.
///
/// Put this on the object whose material refracts the environment. The camera is owned and
/// configured elsewhere (its render target, clear behaviour, etc.); this component only holds a
/// reference to it and never changes or despawns it.
///
/// The referenced camera is usually inactive (`is_active: false`) so that it only renders when
/// asked to.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefractCameraRender {
    /// The environment camera. `None` means the reference has not been assigned yet.
    pub env_camera: Option<Entity>,
}

impl RefractCameraRender {
    /// Creates a trigger for `env_camera`
    pub fn new(env_camera: Entity) -> Self {
        RefractCameraRender {
            env_camera: Some(env_camera),
        }
    }
}
