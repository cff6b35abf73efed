//! Engine-wide plumbing shared by every other module: task pools, frame counting, logging,
//! configuration and the frame runner.

pub mod config;
pub mod core;
pub mod runner;
pub mod trace;
