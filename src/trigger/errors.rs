//! Errors of the refraction trigger

use bevy_ecs::entity::Entity;
use snafu::Snafu;

/// Why a trigger could not resolve its camera
#[derive(Snafu, Debug, Clone, PartialEq, Eq)]
#[snafu(context(suffix(Ctx)), visibility(pub(super)))]
pub enum TriggerError {
    /// The trigger's camera reference was never assigned
    #[snafu(display("RefractCameraRender on {trigger:?} has no environment camera assigned!"))]
    Unset {
        /// Entity holding the trigger
        trigger: Entity,
    },
    /// The referenced entity does not exist anymore or is not a camera
    #[snafu(display("RefractCameraRender on {trigger:?} references {camera:?}, which is not a camera!"))]
    CameraMissing {
        /// Entity holding the trigger
        trigger: Entity,
        /// The dangling reference
        camera: Entity,
    },
}

/// Shorthand type for [`Result<T, TriggerError>`]
pub type TriggerResult<T> = Result<T, TriggerError>;
