//! Contains core engine code

use bevy_app::{App, Last, Plugin};
use bevy_ecs::system::{ResMut, Resource};
use bevy_tasks::{AsyncComputeTaskPool, ComputeTaskPool, IoTaskPool, TaskPool};

/// Contains core engine code (task pools and the frame counter)
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        ComputeTaskPool::get_or_init(TaskPool::default);
        AsyncComputeTaskPool::get_or_init(TaskPool::default);
        IoTaskPool::get_or_init(TaskPool::default);

        app.init_resource::<FrameCount>()
            .add_systems(Last, l_update_frame_count);
    }
}

/// Number of main world frames that have completed.
///
/// Reads `0` during the first frame. Wraps around on overflow.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCount(pub u64);

/// Advances the [`FrameCount`]
///
/// Called on `Last`
pub fn l_update_frame_count(mut frame_count: ResMut<FrameCount>) {
    frame_count.0 = frame_count.0.wrapping_add(1);
}
