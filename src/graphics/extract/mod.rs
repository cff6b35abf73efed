//! Moving data from the main world into the render world.

pub mod camera;
pub mod utils;
