//! The [`Extract`] system parameter

use std::ops::{Deref, DerefMut};

use bevy_ecs::component::Tick;
use bevy_ecs::system::{
    ReadOnlySystemParam, Res, SystemMeta, SystemParam, SystemParamItem, SystemState,
};
use bevy_ecs::world::unsafe_world_cell::UnsafeWorldCell;
use bevy_ecs::world::World;

use crate::graphics::resources::MainWorld;

/// A system parameter that reads from the main world while running in the render world.
///
/// Only usable in systems on the [`ExtractSchedule`](crate::graphics::ExtractSchedule), where the
/// main world is available as [`MainWorld`]. `P` is any read-only parameter, e.g.
/// `Extract<Query<&Camera>>` or `Extract<EventReader<RenderCameraRequest>>`.
pub struct Extract<'w, 's, P>
where
    P: ReadOnlySystemParam + 'static,
{
    /// The parameter fetched from the main world
    item: SystemParamItem<'w, 's, P>,
}

#[doc(hidden)]
pub struct ExtractState<P: SystemParam + 'static> {
    /// State of `P`, initialized against the main world
    state: SystemState<P>,
    /// State of the `Res<MainWorld>` read in the render world
    main_world_state: <Res<'static, MainWorld> as SystemParam>::State,
}

// SAFETY: The only world access is a read of the `MainWorld` resource, which is registered by
// `Res::<MainWorld>::init_state`. The inner parameter reads from a different world.
unsafe impl<P> SystemParam for Extract<'_, '_, P>
where
    P: ReadOnlySystemParam,
{
    type State = ExtractState<P>;
    type Item<'w, 's> = Extract<'w, 's, P>;

    fn init_state(world: &mut World, system_meta: &mut SystemMeta) -> Self::State {
        let mut main_world = world.resource_mut::<MainWorld>();
        ExtractState {
            state: SystemState::new(&mut main_world),
            main_world_state: Res::<MainWorld>::init_state(world, system_meta),
        }
    }

    unsafe fn get_param<'w, 's>(
        state: &'s mut Self::State,
        system_meta: &SystemMeta,
        world: UnsafeWorldCell<'w>,
        change_tick: Tick,
    ) -> Self::Item<'w, 's> {
        // SAFETY: Access to `MainWorld` was registered in `init_state`.
        let main_world = unsafe {
            Res::<MainWorld>::get_param(
                &mut state.main_world_state,
                system_meta,
                world,
                change_tick,
            )
        };
        let item = state.state.get(main_world.into_inner());
        Extract { item }
    }
}

impl<'w, 's, P> Deref for Extract<'w, 's, P>
where
    P: ReadOnlySystemParam,
{
    type Target = SystemParamItem<'w, 's, P>;

    fn deref(&self) -> &Self::Target {
        &self.item
    }
}

impl<'w, 's, P> DerefMut for Extract<'w, 's, P>
where
    P: ReadOnlySystemParam,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.item
    }
}

impl<'a, 'w, 's, P> IntoIterator for &'a Extract<'w, 's, P>
where
    P: ReadOnlySystemParam,
    &'a SystemParamItem<'w, 's, P>: IntoIterator,
{
    type Item = <&'a SystemParamItem<'w, 's, P> as IntoIterator>::Item;
    type IntoIter = <&'a SystemParamItem<'w, 's, P> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&self.item).into_iter()
    }
}
