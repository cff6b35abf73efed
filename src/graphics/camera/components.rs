//! Contains the components related to the camera

use bevy_ecs::entity::Entity;
use bevy_ecs::prelude::Component;
use refract_macros::ExtractComponent;
use wgpu::Color;

/// A component representing a camera and its settings.
///
/// Not exhaustive at the moment, but it will be expanded with more fields later on.
#[derive(Component, Clone, Debug, ExtractComponent)]
pub struct Camera {
    /// Where the camera renders to
    ///
    /// # See Also
    /// [`CameraRenderTarget`]
    pub render_target: CameraRenderTarget,
    /// How the camera should clear
    ///
    /// # See Also
    /// [`CameraClearBehaviour`]
    pub clear_behaviour: CameraClearBehaviour,
    /// Active cameras render every frame.
    ///
    /// Inactive cameras only render when a
    /// [`RenderCameraRequest`](crate::trigger::events::RenderCameraRequest) asks for them,
    /// once per request.
    pub is_active: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            render_target: CameraRenderTarget::default(),
            clear_behaviour: CameraClearBehaviour::default(),
            is_active: true,
        }
    }
}

/// Where a camera renders to.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraRenderTarget {
    /// Rendering to the [`RenderTexture`](crate::graphics::render_texture::components::RenderTexture) on this entity
    Texture(Entity),
    /// Ignores the camera when rendering
    #[default]
    None,
}

impl CameraRenderTarget {
    /// Returns the entity holding the render texture
    ///
    /// # Returns
    /// [`Some(entity)`](Some) if the camera is pointing to a texture
    /// [`None`] otherwise.
    pub fn get_texture_entity(&self) -> Option<Entity> {
        match self {
            CameraRenderTarget::Texture(entity) => Some(*entity),
            CameraRenderTarget::None => None,
        }
    }
}

/// How a camera clears the render target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraClearBehaviour {
    /// Do not clear the target at the start of the frame
    DontClear,
    /// Clears the target with the supplied color
    Color(Color),
}

impl Default for CameraClearBehaviour {
    fn default() -> Self {
        CameraClearBehaviour::Color(Color::BLACK)
    }
}
