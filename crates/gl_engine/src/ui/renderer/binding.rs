//! Scoped GL render state for GUI drawing

use crate::foundation::math::{orthographic_top_left, to_column_major};
use crate::render::device::{BlendEquation, BlendFactor, BufferTarget, Capability, GraphicsDevice};
use crate::ui::input::FrameState;

use super::resources::DeviceResources;

/// GUI pipeline state, set on entry and torn down on drop.
///
/// Entering enables alpha blending and scissoring, disables culling and depth
/// testing, covers the framebuffer with the viewport and binds the GUI program,
/// projection, sampler unit and vertex array. Dropping disables scissor and
/// blend, re-enables depth testing and unbinds the vertex array, program,
/// texture and array buffer, including on early return.
pub struct RenderStateScope<'a, D: GraphicsDevice> {
    device: &'a D,
}

impl<'a, D: GraphicsDevice> RenderStateScope<'a, D> {
    /// Set up GUI render state for a framebuffer described by `frame`
    pub fn enter(device: &'a D, resources: &DeviceResources<D>, frame: &FrameState) -> Self {
        let [width, height] = frame.framebuffer_size();

        device.enable(Capability::Blend);
        device.blend_equation(BlendEquation::Add);
        device.blend_func(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
        device.disable(Capability::CullFace);
        device.disable(Capability::DepthTest);
        device.enable(Capability::ScissorTest);
        device.viewport(0, 0, frame.framebuffer_width as i32, frame.framebuffer_height as i32);

        let projection = to_column_major(&orthographic_top_left(width, height));

        device.use_program(Some(resources.shaders.program));
        device.active_texture(0);
        device.uniform_1_i32(resources.bindings.texture.as_ref(), 0);
        device.uniform_matrix_4(resources.bindings.projection.as_ref(), &projection);
        device.bind_vertex_array(Some(resources.buffers.vertex_array));

        Self { device }
    }
}

impl<D: GraphicsDevice> Drop for RenderStateScope<'_, D> {
    fn drop(&mut self) {
        self.device.disable(Capability::ScissorTest);
        self.device.disable(Capability::Blend);
        self.device.enable(Capability::DepthTest);
        self.device.bind_vertex_array(None);
        self.device.use_program(None);
        self.device.bind_texture(None);
        self.device.bind_buffer(BufferTarget::Array, None);
    }
}
