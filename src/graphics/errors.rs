//! Errors raised while setting up wgpu

use snafu::Snafu;

/// Error raised while initializing the [`GraphicsState`](super::resources::GraphicsState).
#[derive(Snafu, Debug)]
#[snafu(context(suffix(Ctx)), visibility(pub(super)))]
pub enum GraphicsError {
    /// wgpu found no adapter on any backend
    #[snafu(display("No GPU adapter found!"))]
    NoAdapter,
    /// The selected adapter refused to create a device
    #[snafu(display("Failed to request a device from adapter {adapter}: {source}"))]
    RequestDevice {
        /// The wgpu error
        source: wgpu::RequestDeviceError,
        /// Name of the adapter
        adapter: String,
    },
}

/// Shorthand type for [`Result<T, GraphicsError>`]
pub type GraphicsResult<T> = Result<T, GraphicsError>;
