//! Render requests travelling from the trigger through extraction into the render world.
//!
//! The render sub app is built without a GPU: only the [`CameraPlugin`] runs in it, and the
//! camera render queue is recorded instead of being turned into render passes.

use assert2::assert;
use bevy_app::App;
use bevy_ecs::entity::Entity;
use bevy_ecs::schedule::IntoSystemConfigs;
use bevy_ecs::system::{Query, Res, ResMut, Resource};
use refract::common::core::{CorePlugin, FrameCount};
use refract::graphics::camera::components::{Camera, CameraClearBehaviour, CameraRenderTarget};
use refract::graphics::camera::resources::CameraRenderQueue;
use refract::graphics::camera::CameraPlugin;
use refract::graphics::extract::camera::ExtractedRenderRequests;
use refract::graphics::{insert_render_sub_app, Render, RenderSet, RenderSubApp};
use refract::trigger::components::RefractCameraRender;
use refract::trigger::events::RenderCameraRequest;
use refract::trigger::{MissingCameraPolicy, RefractPlugin};
use wgpu::Color;

/// Every frame's camera render queue, as seen by the render world
#[derive(Resource, Default)]
struct RenderLog(Vec<Vec<Entity>>);

/// Frames of the requests rendered in each render world frame
#[derive(Resource, Default)]
struct RenderedFrames(Vec<Vec<u64>>);

/// Cameras present in the render world, per frame
#[derive(Resource, Default)]
struct ExtractedCameras(Vec<Vec<(Entity, Camera)>>);

/// Copies the queue of the current frame into the [`RenderLog`]
fn record_queue(queue: Res<CameraRenderQueue>, mut log: ResMut<RenderLog>) {
    log.0.push(queue.0.clone());
}

/// Copies the frame numbers of the extracted requests into [`RenderedFrames`]
fn record_request_frames(
    requests: Res<ExtractedRenderRequests>,
    mut frames: ResMut<RenderedFrames>,
) {
    frames.0.push(requests.iter().map(|request| request.frame).collect());
}

/// Copies the cameras of the current frame into [`ExtractedCameras`]
fn record_cameras(cameras: Query<(Entity, &Camera)>, mut extracted: ResMut<ExtractedCameras>) {
    extracted.0.push(
        cameras
            .iter()
            .map(|(entity, camera)| (entity, camera.clone()))
            .collect(),
    );
}

/// Main app with the trigger and a render sub app without GPU
fn app() -> App {
    let mut app = App::new();
    app.add_plugins((
        CorePlugin,
        RefractPlugin {
            missing_camera: MissingCameraPolicy::Ignore,
        },
    ));

    insert_render_sub_app(&mut app)
        .init_resource::<RenderLog>()
        .init_resource::<ExtractedCameras>()
        .init_resource::<RenderedFrames>()
        .add_systems(
            Render,
            (record_queue, record_cameras, record_request_frames).in_set(RenderSet::Queue),
        );

    app.add_plugins(CameraPlugin);
    app
}

/// The recorded render queues, one per frame
fn render_log(app: &App) -> &[Vec<Entity>] {
    &app.sub_app(RenderSubApp).world().resource::<RenderLog>().0
}

/// Spawns an inactive environment camera
fn env_camera(app: &mut App) -> Entity {
    app.world_mut()
        .spawn(Camera {
            render_target: CameraRenderTarget::Texture(Entity::PLACEHOLDER),
            clear_behaviour: CameraClearBehaviour::Color(Color::GREEN),
            is_active: false,
        })
        .id()
}

#[test]
fn three_ticks_render_three_times_in_order() {
    let mut app = app();
    let camera = env_camera(&mut app);
    app.world_mut().spawn(RefractCameraRender::new(camera));

    for _ in 0..3 {
        app.update();
    }

    assert!(render_log(&app) == [vec![camera], vec![camera], vec![camera]]);
}

#[test]
fn inactive_camera_without_trigger_never_renders() {
    let mut app = app();
    env_camera(&mut app);

    app.update();
    app.update();

    assert!(render_log(&app) == [Vec::<Entity>::new(), Vec::new()]);
}

#[test]
fn active_camera_renders_every_frame_and_on_request() {
    let mut app = app();
    let active = app
        .world_mut()
        .spawn(Camera {
            render_target: CameraRenderTarget::Texture(Entity::PLACEHOLDER),
            ..Default::default()
        })
        .id();
    let camera = env_camera(&mut app);
    app.world_mut().spawn(RefractCameraRender::new(camera));
    app.world_mut().spawn(RefractCameraRender::new(active));

    app.update();

    let log = render_log(&app);
    assert!(log.len() == 1);
    assert!(log[0].len() == 3);
    assert!(log[0][0] == active);
    assert!(log[0].iter().filter(|entity| **entity == active).count() == 2);
    assert!(log[0].iter().filter(|entity| **entity == camera).count() == 1);
}

#[test]
fn requests_are_consumed_once() {
    let mut app = app();
    let camera = env_camera(&mut app);
    let trigger = app.world_mut().spawn(RefractCameraRender::new(camera)).id();

    app.update();
    app.world_mut().entity_mut(trigger).remove::<RefractCameraRender>();
    app.update();
    app.update();

    assert!(render_log(&app) == [vec![camera], vec![], vec![]]);
}

#[test]
fn request_for_unknown_camera_is_skipped() {
    let mut app = app();
    let not_a_camera = app.world_mut().spawn_empty().id();
    app.world_mut().send_event(RenderCameraRequest {
        camera: not_a_camera,
        trigger: not_a_camera,
        frame: 0,
    });

    app.update();

    assert!(render_log(&app) == [Vec::<Entity>::new()]);
}

#[test]
fn cameras_are_extracted_with_their_settings() {
    let mut app = app();
    let camera = env_camera(&mut app);

    app.update();

    let extracted = &app
        .sub_app(RenderSubApp)
        .world()
        .resource::<ExtractedCameras>()
        .0;
    assert!(extracted.len() == 1);
    assert!(extracted[0].len() == 1);

    let (entity, extracted_camera) = &extracted[0][0];
    assert!(*entity == camera);
    assert!(!extracted_camera.is_active);
    assert!(extracted_camera.clear_behaviour == CameraClearBehaviour::Color(Color::GREEN));
    assert!(extracted_camera.render_target == CameraRenderTarget::Texture(Entity::PLACEHOLDER));
}

#[test]
fn camera_changes_reach_the_render_world_next_frame() {
    let mut app = app();
    let camera = env_camera(&mut app);

    app.update();
    app.world_mut().get_mut::<Camera>(camera).unwrap().is_active = true;
    app.update();

    assert!(render_log(&app) == [vec![], vec![camera]]);
}

#[test]
fn requests_render_in_the_frame_they_were_sent() {
    let mut app = app();
    let camera = env_camera(&mut app);
    app.world_mut().spawn(RefractCameraRender::new(camera));

    for _ in 0..3 {
        app.update();
    }

    let frames = &app
        .sub_app(RenderSubApp)
        .world()
        .resource::<RenderedFrames>()
        .0;
    assert!(*frames == [vec![0], vec![1], vec![2]]);
    assert!(app.world().resource::<FrameCount>().0 == 3);
}

#[test]
fn request_for_camera_without_target_is_skipped() {
    let mut app = app();
    let camera = app
        .world_mut()
        .spawn(Camera {
            render_target: CameraRenderTarget::None,
            is_active: false,
            ..Default::default()
        })
        .id();
    app.world_mut().spawn(RefractCameraRender::new(camera));

    app.update();

    assert!(render_log(&app) == [Vec::<Entity>::new()]);
}

#[test]
fn active_camera_without_target_is_not_queued() {
    let mut app = app();
    app.world_mut().spawn(Camera::default());

    app.update();
    app.update();

    assert!(render_log(&app) == [Vec::<Entity>::new(), Vec::new()]);
}
