//! Helpers for recording render passes

use wgpu::{CommandEncoder, LoadOp, TextureView};

use crate::graphics::camera::components::CameraClearBehaviour;

/// Maps a clear behaviour to the load operation of the color attachment
pub fn load_op(clear_behaviour: &CameraClearBehaviour) -> LoadOp<wgpu::Color> {
    match clear_behaviour {
        CameraClearBehaviour::DontClear => LoadOp::Load,
        CameraClearBehaviour::Color(color) => LoadOp::Clear(*color),
    }
}

/// Records one render pass of a camera into `view`
pub fn record_camera_pass(
    id: &str,
    view: &TextureView,
    command_encoder: &mut CommandEncoder,
    clear_behaviour: &CameraClearBehaviour,
) {
    let _render_pass = command_encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(format!("Render Pass {id}").as_str()),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: load_op(clear_behaviour),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        occlusion_query_set: None,
        timestamp_writes: None,
    });
}
