//! Resources of the render world

use std::ops::{Deref, DerefMut};

use bevy_ecs::system::Resource;
use bevy_ecs::world::World;
use snafu::{OptionExt, ResultExt};
use tracing::info;
use wgpu::Backends;

use crate::graphics::adapter_selection_utils::get_best_adapter;
use crate::graphics::errors::{GraphicsResult, NoAdapterCtx, RequestDeviceCtx};

/// The global wgpu objects.
///
/// There are no surfaces: everything renders into offscreen textures.
#[derive(Resource)]
pub struct GraphicsState {
    /// The wgpu instance
    pub instance: wgpu::Instance,
    /// The adapter picked by [`get_best_adapter`]
    pub adapter: wgpu::Adapter,
    /// The logical device
    pub device: wgpu::Device,
    /// The queue command buffers are submitted to
    pub queue: wgpu::Queue,
}

impl GraphicsState {
    /// Picks an adapter and requests a device from it.
    pub async fn new() -> GraphicsResult<Self> {
        let instance = wgpu::Instance::default();

        let adapters = instance.enumerate_adapters(Backends::all());
        let adapter = get_best_adapter(adapters).context(NoAdapterCtx)?;
        let adapter_info = adapter.get_info();

        info!("Selected Adapter: {:?}", adapter_info);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Render Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .context(RequestDeviceCtx {
                adapter: adapter_info.name,
            })?;

        Ok(Self {
            instance,
            adapter,
            device,
            queue,
        })
    }
}

/// The main world, inserted into the render world while the extract schedule runs
#[derive(Resource, Default)]
pub struct MainWorld(pub World);

impl Deref for MainWorld {
    type Target = World;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MainWorld {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// An empty world that stands in for the main world while it is being extracted
#[derive(Resource, Default)]
pub struct ScratchMainWorld(pub World);
