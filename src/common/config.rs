//! Loading of `refract.toml`.
//!
//! Every key is optional. A missing file is not an error, the defaults are used instead.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use snafu::{ResultExt, Snafu};
use tracing::info;
use wgpu::{Color, TextureFormat};

use crate::trigger::MissingCameraPolicy;

/// Environment variable pointing at the configuration file
pub const CONFIG_ENV_VAR: &str = "REFRACT_CONFIG";

/// Path used when neither the command line nor [`CONFIG_ENV_VAR`] provide one
pub const DEFAULT_CONFIG_PATH: &str = "refract.toml";

/// Error raised while loading the configuration.
#[derive(Snafu, Debug)]
#[snafu(context(suffix(Ctx)))]
pub enum ConfigError {
    /// The file exists but could not be read
    #[snafu(display("Failed to read config file at {}: {source}", path.display()))]
    ReadConfig {
        /// The [`std::io::Error`].
        source: std::io::Error,
        /// The path of the config file
        path: PathBuf,
    },
    /// The file is not valid TOML or does not match the expected layout
    #[snafu(display("Failed to parse config file at {}. This probably means its format is not correct. {source}", path.display()))]
    ParseConfig {
        /// The toml deserialize error
        source: toml::de::Error,
        /// The path of the config file
        path: PathBuf,
    },
}

/// Shorthand type for [`Result<T, ConfigError>`]
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root of `refract.toml`
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RefractConfig {
    /// The environment camera and its render texture
    pub environment: EnvironmentConfig,
    /// The per-frame trigger
    pub trigger: TriggerConfig,
    /// The frame runner
    pub runner: RunnerConfig,
}

impl RefractConfig {
    /// Parses a configuration from TOML source. `path` is only used for error reporting.
    pub fn from_toml(source: &str, path: &Path) -> ConfigResult<Self> {
        toml::from_str(source).context(ParseConfigCtx { path })
    }

    /// Loads the configuration at `path`, falling back to the defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            info!(
                "No config file at {}, using default configuration",
                path.display()
            );
            return Ok(Self::default());
        }

        let source = std::fs::read_to_string(path).context(ReadConfigCtx { path })?;
        let config = Self::from_toml(&source, path)?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// `[environment]`
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Width of the render texture in pixels
    pub width: u32,
    /// Height of the render texture in pixels
    pub height: u32,
    /// Format of the render texture
    pub format: TextureFormatConfig,
    /// RGBA color the environment camera clears with
    pub clear_color: [f64; 4],
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        EnvironmentConfig {
            width: 512,
            height: 512,
            format: TextureFormatConfig::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl EnvironmentConfig {
    /// The clear color as a [`wgpu::Color`]
    pub fn clear_color(&self) -> Color {
        let [r, g, b, a] = self.clear_color;
        Color { r, g, b, a }
    }
}

/// The texture formats a render texture can be configured with.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TextureFormatConfig {
    /// [`TextureFormat::Rgba8Unorm`]
    Rgba8Unorm,
    /// [`TextureFormat::Rgba8UnormSrgb`]
    #[default]
    Rgba8UnormSrgb,
    /// [`TextureFormat::Bgra8UnormSrgb`]
    Bgra8UnormSrgb,
    /// [`TextureFormat::Rgba16Float`]
    Rgba16Float,
}

impl From<TextureFormatConfig> for TextureFormat {
    fn from(value: TextureFormatConfig) -> Self {
        match value {
            TextureFormatConfig::Rgba8Unorm => TextureFormat::Rgba8Unorm,
            TextureFormatConfig::Rgba8UnormSrgb => TextureFormat::Rgba8UnormSrgb,
            TextureFormatConfig::Bgra8UnormSrgb => TextureFormat::Bgra8UnormSrgb,
            TextureFormatConfig::Rgba16Float => TextureFormat::Rgba16Float,
        }
    }
}

/// `[trigger]`
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TriggerConfig {
    /// What happens when a trigger has no camera to render
    pub missing_camera: MissingCameraPolicy,
}

/// `[runner]`
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Target frames per second. `0` or less runs frames back to back.
    pub frame_rate: f64,
    /// Number of frames to run before exiting. `0` runs until stopped.
    pub frames: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            frame_rate: 60.0,
            frames: 0,
        }
    }
}
