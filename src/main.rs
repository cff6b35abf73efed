#![deny(missing_docs)]

//! Headless demo of refract.
//!
//! Spawns a render texture, an inactive environment camera rendering into it and a refraction
//! surface that asks the camera to render every frame, then runs the frame loop.

mod scene;

use std::path::PathBuf;

use bevy_app::prelude::*;
use clap::Parser;
use refract::common::config::{RefractConfig, CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use refract::common::runner::FrameRunnerPlugin;
use refract::plugins::RefractPlugins;
use refract::trigger::RefractPlugin;

use crate::scene::ScenePlugin;

/// Command line arguments
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file.
    #[arg(short, long, env = CONFIG_ENV_VAR, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Number of frames to run before exiting. Overrides `runner.frames`, 0 runs until stopped.
    #[arg(short, long)]
    frames: Option<u64>,
}

/// The main entry point for the application.
///
/// Loads the configuration and runs the [bevy application](https://docs.rs/bevy_app/latest/bevy_app/).
pub fn main() -> AppExit {
    let args = Args::parse();

    let config = match RefractConfig::load_or_default(&args.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration! Error: {err}");
            return AppExit::error();
        }
    };

    let frames = args.frames.unwrap_or(config.runner.frames);

    App::new()
        .add_plugins(
            RefractPlugins
                .set(RefractPlugin {
                    missing_camera: config.trigger.missing_camera,
                })
                .set(FrameRunnerPlugin {
                    frame_rate: config.runner.frame_rate,
                    frame_limit: (frames > 0).then_some(frames),
                }),
        )
        .add_plugins(ScenePlugin {
            environment: config.environment,
        })
        .run()
}
