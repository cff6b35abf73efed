#![deny(missing_docs)]

//! Renders an environment camera into an offscreen texture once per frame.
//!
//! The [`RefractPlugin`](trigger::RefractPlugin) holds the per-frame trigger: every entity with a
//! [`RefractCameraRender`](trigger::components::RefractCameraRender) asks its environment camera
//! to render every `Update`. The rest of the crate is the small host engine that makes the request
//! observable: a render sub app fed by extraction, wgpu render passes into
//! [`RenderTexture`](graphics::render_texture::components::RenderTexture)s and the usual logging
//! and configuration plumbing.

pub mod common;
pub mod graphics;
pub mod plugins;
pub mod trigger;
