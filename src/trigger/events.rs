//! Events sent by the refraction trigger

use bevy_ecs::entity::Entity;
use bevy_ecs::event::Event;

/// A request to render `camera` now.
///
/// One event is one render: the render world renders the camera once for every request it
/// extracts, in the order they were sent.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderCameraRequest {
    /// The camera to render
    pub camera: Entity,
    /// The entity whose [`RefractCameraRender`](super::components::RefractCameraRender) sent the request
    pub trigger: Entity,
    /// [`FrameCount`](crate::common::core::FrameCount) of the frame the request was sent in
    pub frame: u64,
}
