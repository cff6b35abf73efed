//! The demo scene

use bevy_app::{App, Plugin, Startup};
use bevy_ecs::system::{Commands, Res, Resource};
use refract::common::config::EnvironmentConfig;
use refract::graphics::camera::components::{Camera, CameraClearBehaviour, CameraRenderTarget};
use refract::graphics::render_texture::components::RenderTexture;
use refract::trigger::components::RefractCameraRender;
use tracing::info;

/// Spawns the environment camera, its render texture and the refraction surface.
pub struct ScenePlugin {
    /// Settings of the environment camera and its texture
    pub environment: EnvironmentConfig,
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(EnvironmentSettings(self.environment.clone()))
            .add_systems(Startup, s_spawn_environment_camera);
    }
}

/// The `[environment]` section of the configuration
#[derive(Resource)]
struct EnvironmentSettings(EnvironmentConfig);

/// Runs on startup and spawns the scene.
fn s_spawn_environment_camera(mut commands: Commands, settings: Res<EnvironmentSettings>) {
    let settings = &settings.0;

    let texture = commands
        .spawn(RenderTexture::new(
            "Environment Texture",
            settings.width,
            settings.height,
            settings.format.into(),
        ))
        .id();

    // Only renders when the refraction surface asks for it
    let env_camera = commands
        .spawn(Camera {
            render_target: CameraRenderTarget::Texture(texture),
            clear_behaviour: CameraClearBehaviour::Color(settings.clear_color()),
            is_active: false,
        })
        .id();

    let surface = commands.spawn(RefractCameraRender::new(env_camera)).id();

    info!(
        "Spawned environment camera {env_camera:?} rendering {}x{} into {texture:?} for {surface:?}",
        settings.width, settings.height
    );
}
