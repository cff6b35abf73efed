//! Resources for cameras in the render world

use std::ops::Deref;

use bevy_ecs::entity::Entity;
use bevy_ecs::system::Resource;

/// The cameras that render this frame, in render order.
///
/// A camera appears once per render: active cameras once, followed by one entry per extracted
/// request.
#[derive(Resource, Default, Debug)]
pub struct CameraRenderQueue(pub Vec<Entity>);

impl Deref for CameraRenderQueue {
    type Target = Vec<Entity>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
