//! Replays a [`DrawStream`] as GL calls

use crate::render::device::{BufferTarget, BufferUsage, GraphicsDevice};
use crate::render::{RenderError, RenderResult};
use crate::ui::input::FrameState;
use crate::ui::rendering::{CommandList, DrawCommand, DrawParams, DrawStream};

use super::binding::RenderStateScope;
use super::resources::DeviceResources;

const INDEX_SIZE: usize = std::mem::size_of::<u16>();

/// Draw every command list of `stream` in order.
///
/// An empty stream, or a framebuffer with a zero axis (minimized window), returns
/// before touching any GL state. A user callback aborts
/// with [`RenderError::UnsupportedCallback`]; nothing after it is drawn and the
/// render state is still restored.
pub fn render_draw_stream<D: GraphicsDevice>(
    device: &D,
    resources: &DeviceResources<D>,
    frame: &FrameState,
    stream: &DrawStream,
) -> RenderResult<()> {
    if stream.is_empty() || frame.framebuffer_width == 0 || frame.framebuffer_height == 0 {
        return Ok(());
    }

    log::trace!(
        "Drawing {} lists ({} vertices, {} indices)",
        stream.command_lists.len(),
        stream.total_vertices(),
        stream.total_indices()
    );

    let _scope = RenderStateScope::enter(device, resources, frame);
    let fb_height = frame.framebuffer_height as f32;

    for (list_index, list) in stream.command_lists.iter().enumerate() {
        upload_list(device, resources, list);

        for (command_index, command) in list.commands.iter().enumerate() {
            match command {
                DrawCommand::Elements { count, params } => {
                    debug_assert_in_bounds(list, *count, params);
                    device.bind_texture(device.texture_from_id(params.texture_id));
                    device.scissor(params.scissor(fb_height));
                    device.draw_elements_base_vertex(
                        *count as i32,
                        (params.idx_offset * INDEX_SIZE) as i32,
                        params.vtx_offset as i32,
                    );
                }
                DrawCommand::UserCallback => {
                    return Err(RenderError::UnsupportedCallback {
                        list: list_index,
                        command: command_index,
                    });
                }
            }
        }
    }

    Ok(())
}

/// Replace both streaming buffers with exactly this list's data
fn upload_list<D: GraphicsDevice>(device: &D, resources: &DeviceResources<D>, list: &CommandList) {
    device.bind_buffer(BufferTarget::Array, Some(resources.buffers.vertex_buffer));
    device.upload_buffer(BufferTarget::Array, list.vertex_bytes(), BufferUsage::StreamDraw);

    device.bind_buffer(BufferTarget::ElementArray, Some(resources.buffers.index_buffer));
    device.upload_buffer(BufferTarget::ElementArray, list.index_bytes(), BufferUsage::StreamDraw);
}

fn debug_assert_in_bounds(list: &CommandList, count: usize, params: &DrawParams) {
    debug_assert!(
        params.idx_offset + count <= list.indices.len(),
        "draw reads indices {}..{} of {}",
        params.idx_offset,
        params.idx_offset + count,
        list.indices.len()
    );
    debug_assert!(
        params.vtx_offset <= list.vertices.len(),
        "base vertex {} past {} vertices",
        params.vtx_offset,
        list.vertices.len()
    );
}
