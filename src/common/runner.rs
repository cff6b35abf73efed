//! Contains the [`FrameRunnerPlugin`], the scheduler that ticks the app once per frame.

use std::time::{Duration, Instant};

use bevy_app::{App, AppExit, Last, Plugin, PluginsState};
use bevy_ecs::event::EventWriter;
use bevy_ecs::schedule::IntoSystemConfigs;
use bevy_ecs::system::{Res, Resource};
use tracing::{debug, info};

use crate::common::core::{l_update_frame_count, FrameCount};

/// Drives the app headlessly: one [`App::update`] per frame, paced to a frame rate.
///
/// The runner returns once any system sends an [`AppExit`].
pub struct FrameRunnerPlugin {
    /// Target frames per second. `0` or less runs frames back to back.
    pub frame_rate: f64,
    /// Exit after this many frames. `None` runs until something else exits the app.
    pub frame_limit: Option<u64>,
}

impl Default for FrameRunnerPlugin {
    fn default() -> Self {
        FrameRunnerPlugin {
            frame_rate: 60.0,
            frame_limit: None,
        }
    }
}

impl Plugin for FrameRunnerPlugin {
    fn build(&self, app: &mut App) {
        if let Some(limit) = self.frame_limit {
            app.insert_resource(FrameLimit(limit)).add_systems(
                Last,
                l_exit_after_frames.after(l_update_frame_count),
            );
        }

        let frame_time = frame_time(self.frame_rate);
        app.set_runner(move |app| run_frames(app, frame_time));
    }
}

/// Number of frames after which [`l_exit_after_frames`] exits the app
#[derive(Resource, Debug, Clone, Copy)]
pub struct FrameLimit(pub u64);

/// Sends [`AppExit::Success`] once [`FrameCount`] reaches the [`FrameLimit`]
///
/// Called on `Last`, after the frame counter has been advanced.
pub fn l_exit_after_frames(
    frame_count: Res<FrameCount>,
    limit: Res<FrameLimit>,
    mut app_exit: EventWriter<AppExit>,
) {
    if frame_count.0 >= limit.0 {
        info!("Ran {} frames, exiting", frame_count.0);
        app_exit.send(AppExit::Success);
    }
}

/// Converts a frame rate into the minimum duration of one frame
fn frame_time(frame_rate: f64) -> Option<Duration> {
    (frame_rate > 0.0).then(|| Duration::from_secs_f64(1.0 / frame_rate))
}

/// The runner installed by [`FrameRunnerPlugin`]
fn run_frames(mut app: App, frame_time: Option<Duration>) -> AppExit {
    if app.plugins_state() != PluginsState::Cleaned {
        while app.plugins_state() == PluginsState::Adding {
            bevy_tasks::tick_global_task_pools_on_main_thread();
        }
        app.finish();
        app.cleanup();
    }

    debug!("Entering frame loop with frame time {frame_time:?}");

    loop {
        let start = Instant::now();

        app.update();

        if let Some(exit) = app.should_exit() {
            return exit;
        }

        if let Some(frame_time) = frame_time {
            let elapsed = start.elapsed();
            if elapsed < frame_time {
                std::thread::sleep(frame_time - elapsed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert2::assert;
    use bevy_app::{App, AppExit};

    use super::{frame_time, FrameRunnerPlugin};
    use crate::common::core::CorePlugin;

    #[test]
    fn frame_time_from_rate() {
        assert!(frame_time(50.0) == Some(Duration::from_millis(20)));
        assert!(frame_time(0.0).is_none());
        assert!(frame_time(-1.0).is_none());
    }

    #[test]
    fn exits_after_frame_limit() {
        let mut app = App::new();
        app.add_plugins((
            CorePlugin,
            FrameRunnerPlugin {
                frame_rate: 0.0,
                frame_limit: Some(3),
            },
        ));

        app.update();
        app.update();
        assert!(app.should_exit().is_none());

        app.update();
        assert!(app.should_exit() == Some(AppExit::Success));
    }

    #[test]
    fn runner_returns_exit_code() {
        let mut app = App::new();
        app.add_plugins((
            CorePlugin,
            FrameRunnerPlugin {
                frame_rate: 0.0,
                frame_limit: Some(2),
            },
        ));

        assert!(app.run() == AppExit::Success);
    }
}
