//! The demo scene: one vertex-colored triangle drawn under the GUI

use gl_engine::render::{
    build_program, check_gl_errors, AttribLayout, AttribType, BufferTarget, BufferUsage, Capability, ClearFlags,
    GraphicsDevice, RenderError, RenderResult,
};

const VERTEX_SHADER_SOURCE: &str = r#"#version 330 core
layout(location = 0) in vec3 aPosition;
layout(location = 1) in vec3 aColor;
out vec3 vertexColor;
void main()
{
    gl_Position = vec4(aPosition, 1.0);
    vertexColor = aColor;
}
"#;

const FRAGMENT_SHADER_SOURCE: &str = r#"#version 330 core
in vec3 vertexColor;
out vec4 FragColor;
void main()
{
    FragColor = vec4(vertexColor, 1.0);
}
"#;

/// Interleaved position (xyz) and color (rgb)
#[rustfmt::skip]
const VERTICES: [f32; 18] = [
     0.0,  0.8, 0.0,   1.0, 0.0, 0.0,
     0.8, -0.8, 0.0,   0.0, 1.0, 0.0,
    -0.8, -0.8, 0.0,   0.0, 0.0, 1.0,
];

const STRIDE: i32 = 6 * std::mem::size_of::<f32>() as i32;

pub struct TriangleScene<D: GraphicsDevice> {
    vertex_array: D::VertexArray,
    vertex_buffer: D::Buffer,
    program: D::Program,
}

impl<D: GraphicsDevice> TriangleScene<D> {
    pub fn new(device: &D) -> RenderResult<Self> {
        let vertex_array = device
            .create_vertex_array()
            .map_err(|message| RenderError::creation("triangle vertex array", message))?;
        device.bind_vertex_array(Some(vertex_array));

        let vertex_buffer = device
            .create_buffer()
            .map_err(|message| RenderError::creation("triangle vertex buffer", message))?;
        device.bind_buffer(BufferTarget::Array, Some(vertex_buffer));
        device.upload_buffer(BufferTarget::Array, bytemuck::cast_slice(&VERTICES), BufferUsage::StaticDraw);

        // The program keeps the compiled stages alive after linking
        let shaders = build_program(device, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE)?;
        device.delete_shader(shaders.vertex_shader);
        device.delete_shader(shaders.fragment_shader);

        for (index, offset) in [(0, 0), (1, 3 * std::mem::size_of::<f32>() as i32)] {
            device.vertex_attrib_pointer(
                index,
                AttribLayout {
                    components: 3,
                    kind: AttribType::Float,
                    normalized: false,
                    stride: STRIDE,
                    offset,
                },
            );
            device.enable_vertex_attrib(index);
        }

        device.bind_buffer(BufferTarget::Array, None);
        device.bind_vertex_array(None);

        Ok(Self {
            vertex_array,
            vertex_buffer,
            program: shaders.program,
        })
    }

    /// Clear the framebuffer and draw the triangle
    pub fn draw(&self, device: &D, framebuffer_size: (u32, u32)) {
        device.enable(Capability::DepthTest);
        device.disable(Capability::Blend);
        device.viewport(0, 0, framebuffer_size.0 as i32, framebuffer_size.1 as i32);
        device.clear(ClearFlags::COLOR | ClearFlags::DEPTH);
        check_gl_errors(device, "Clear");

        device.use_program(Some(self.program));
        check_gl_errors(device, "UseProgram");
        device.bind_vertex_array(Some(self.vertex_array));
        check_gl_errors(device, "Bind VAO");
        device.draw_arrays(0, 3);
        check_gl_errors(device, "DrawArrays");

        device.bind_vertex_array(None);
        device.use_program(None);
    }

    pub fn destroy(self, device: &D) {
        device.delete_buffer(self.vertex_buffer);
        device.delete_vertex_array(self.vertex_array);
        device.delete_program(self.program);
        log::debug!("Triangle resources destroyed");
    }
}
