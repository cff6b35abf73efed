//! Bevy systems for the graphics module.

use crate::graphics::ExtractSchedule;
use bevy_ecs::schedule::Schedules;
use bevy_ecs::world::World;
use bevy_ecs::world::Mut;

/// Applies commands added from the extract schedule
///
/// Called on `ExtractCommands` to allow it to run in parallel with the main world
pub fn rec_apply_commands(render_world: &mut World) {
    render_world.resource_scope(|render_world, mut schedules: Mut<Schedules>| {
        schedules
            .get_mut(ExtractSchedule)
            .expect("ExtractSchedule should exist")
            .apply_deferred(render_world);
    });
}
