//! Rendering code for the engine.
//!
//! This module contains the [`GraphicsPlugin`] which is responsible for initializing rendering with [`wgpu`](https://docs.rs/wgpu/latest/wgpu/index.html).
//!
//! Rendering happens in a separate [`SubApp`] with its own world. Once per frame the
//! [`ExtractSchedule`] copies what rendering needs out of the main world, then the [`Render`]
//! schedule runs through the [`RenderSet`]s in order.

use crate::graphics::camera::CameraPlugin;
use crate::graphics::render_texture::RenderTexturePlugin;
use crate::graphics::rendering::RenderingPlugin;
use crate::graphics::resources::{GraphicsState, MainWorld, ScratchMainWorld};
use crate::graphics::systems::rec_apply_commands;
use bevy_app::{App, AppLabel, Plugin, SubApp};
use bevy_ecs::schedule::{
    IntoSystemConfigs, IntoSystemSetConfigs, Schedule, ScheduleBuildSettings, ScheduleLabel,
    SystemSet,
};
use bevy_ecs::world::World;

pub mod adapter_selection_utils;
pub mod camera;
pub mod errors;
pub mod extract;
pub mod render_texture;
pub mod rendering;
pub mod resources;
mod systems;

/// Responsible for initializing rendering with wgpu.
///
/// This plugin creates the render sub app, initializes the graphics state and adds everything
/// needed to render cameras into render textures.
///
/// # Panics
/// Panics if no adapter is available or the device cannot be created.
///
/// # Examples
/// ```no_run
/// use bevy_app::App;
/// use refract::graphics::GraphicsPlugin;
///
/// App::new().add_plugins(GraphicsPlugin).run();
/// ```
pub struct GraphicsPlugin;

impl Plugin for GraphicsPlugin {
    fn build(&self, app: &mut App) {
        let graphics_state = pollster::block_on(GraphicsState::new())
            .unwrap_or_else(|err| panic!("Failed to initialize graphics: {err}"));

        insert_render_sub_app(app).insert_resource(graphics_state);

        app.add_plugins((CameraPlugin, RenderTexturePlugin, RenderingPlugin));
    }
}

/// Creates the render sub app with its schedules and inserts it into `app`.
///
/// The sub app has no [`GraphicsState`]; [`GraphicsPlugin`] adds it. Plugins that do not touch
/// the GPU (extraction, [`CameraPlugin`]) work on the bare sub app.
pub fn insert_render_sub_app(app: &mut App) -> &mut SubApp {
    app.init_resource::<ScratchMainWorld>();

    let mut extract_schedule = Schedule::new(ExtractSchedule);
    extract_schedule.set_build_settings(ScheduleBuildSettings {
        auto_insert_apply_deferred: false,
        ..Default::default()
    });
    // Commands are applied in `RenderSet::ExtractCommands` instead
    extract_schedule.set_apply_final_deferred(false);

    let mut render_app = SubApp::new();
    render_app.update_schedule = Some(Render.intern());
    render_app
        .add_schedule(Render::schedule())
        .add_schedule(extract_schedule)
        .add_systems(
            Render,
            (
                rec_apply_commands.in_set(RenderSet::ExtractCommands),
                World::clear_entities.in_set(RenderSet::CleanUp),
            ),
        );
    render_app.set_extract(extract);

    app.insert_sub_app(RenderSubApp, render_app);
    app.sub_app_mut(RenderSubApp)
}

/// Runs the extract schedule on the main world.
///
/// The main world is moved into the render world as [`MainWorld`] for the duration of the
/// schedule, and an empty world takes its place.
fn extract(main_world: &mut World, render_world: &mut World) {
    let scratch_world = main_world
        .remove_resource::<ScratchMainWorld>()
        .expect("ScratchMainWorld should exist");
    let inserted_world = std::mem::replace(main_world, scratch_world.0);
    render_world.insert_resource(MainWorld(inserted_world));
    render_world.run_schedule(ExtractSchedule);

    // Move app world back and replace scratch world with empty world.
    let inserted_world = render_world
        .remove_resource::<MainWorld>()
        .expect("MainWorld should exist");
    let scratch_world = std::mem::replace(main_world, inserted_world.0);
    main_world.insert_resource(ScratchMainWorld(scratch_world));
}

/// System sets for the Render schedule
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum RenderSet {
    /// Applies commands used in extract schedule
    ExtractCommands,
    /// Prepare resources and entities needed for rendering
    Prepare,
    /// Decides which cameras render this frame
    PreQueue,
    /// The render passes are recorded here
    Queue,
    /// Finishes the command buffer and submits it
    FinishQueue,
    /// Lets the device make progress on submitted work
    Render,
    /// Clean up the ECS world after rendering
    CleanUp,
}

/// Schedule label of the Render schedule
#[derive(ScheduleLabel, Debug, Hash, PartialEq, Eq, Clone)]
pub struct Render;

impl Render {
    /// Returns a schedule pre-configured with render system sets.
    fn schedule() -> Schedule {
        let mut schedule = Schedule::new(Render);

        schedule.configure_sets(
            (
                RenderSet::ExtractCommands,
                RenderSet::Prepare,
                RenderSet::PreQueue,
                RenderSet::Queue,
                RenderSet::FinishQueue,
                RenderSet::Render,
                RenderSet::CleanUp,
            )
                .chain(),
        );

        schedule
    }
}

/// App label for the Render sub app
#[derive(AppLabel, Debug, Hash, PartialEq, Eq, Clone)]
pub struct RenderSubApp;

/// Schedule label of the Extract schedule
#[derive(ScheduleLabel, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ExtractSchedule;
