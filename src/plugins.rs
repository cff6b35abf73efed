//! Module containing plugin groups

use crate::common::core::CorePlugin;
use crate::common::runner::FrameRunnerPlugin;
use crate::common::trace::TracePlugin;
use crate::graphics::GraphicsPlugin;
use crate::trigger::RefractPlugin;
use bevy_app::{PluginGroup, PluginGroupBuilder};

/// Default plugins for refract
///
/// Configure the members with [`PluginGroup::set`], e.g. to change the
/// [`MissingCameraPolicy`](crate::trigger::MissingCameraPolicy) or the frame rate.
pub struct RefractPlugins;

impl PluginGroup for RefractPlugins {
    fn build(self) -> PluginGroupBuilder {
        let mut group = PluginGroupBuilder::start::<Self>();

        group = group
            .add(TracePlugin)
            .add(CorePlugin)
            .add(GraphicsPlugin)
            .add(RefractPlugin::default())
            .add(FrameRunnerPlugin::default());

        group
    }
}
