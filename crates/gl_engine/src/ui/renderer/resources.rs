//! GPU objects owned by the GUI renderer

use crate::core::config::GuiConfig;
use crate::render::device::{BufferTarget, BufferUsage, GraphicsDevice, TextureFilter};
use crate::render::shader::{build_program, ShaderResources};
use crate::render::{RenderError, RenderResult};
use crate::ui::backend::{FontAtlasPixels, GuiLibrary};
use crate::ui::rendering::GuiVertex;

/// GUI vertex shader
pub const VERTEX_SHADER_SOURCE: &str = r#"#version 330 core
layout(location = 0) in vec2 aPosition;
layout(location = 1) in vec2 aUV;
layout(location = 2) in vec4 aColor;
uniform mat4 projection_matrix;
out vec2 vUV;
out vec4 vColor;
void main()
{
    vUV = aUV;
    vColor = aColor;
    gl_Position = projection_matrix * vec4(aPosition.xy, 0.0, 1.0);
}
"#;

/// GUI fragment shader
pub const FRAGMENT_SHADER_SOURCE: &str = r#"#version 330 core
in vec2 vUV;
in vec4 vColor;
uniform sampler2D Texture;
out vec4 FragColor;
void main()
{
    FragColor = vColor * texture(Texture, vUV.st);
}
"#;

/// Name of the sampler uniform
pub const TEXTURE_UNIFORM: &str = "Texture";
/// Name of the projection uniform
pub const PROJECTION_UNIFORM: &str = "projection_matrix";

/// Streaming vertex/index buffers and the vertex array describing them.
///
/// Both buffers are reallocated to fit each command list on upload.
pub struct GpuBuffers<D: GraphicsDevice> {
    /// Vertex buffer
    pub vertex_buffer: D::Buffer,
    /// 16-bit index buffer
    pub index_buffer: D::Buffer,
    /// Vertex array with the [`GuiVertex`] layout
    pub vertex_array: D::VertexArray,
}

/// Uniform and attribute locations resolved against the linked program
pub struct ShaderAttributeBindings<D: GraphicsDevice> {
    /// `Texture` sampler
    pub texture: Option<D::UniformLocation>,
    /// `projection_matrix`
    pub projection: Option<D::UniformLocation>,
    /// `aPosition`
    pub position: u32,
    /// `aUV`
    pub uv: u32,
    /// `aColor`
    pub color: u32,
}

impl<D: GraphicsDevice> ShaderAttributeBindings<D> {
    /// Look up every location; attributes a broken program doesn't expose fall
    /// back to the layout qualifiers in [`VERTEX_SHADER_SOURCE`].
    pub fn resolve(device: &D, program: D::Program) -> Self {
        let texture = device.uniform_location(program, TEXTURE_UNIFORM);
        let projection = device.uniform_location(program, PROJECTION_UNIFORM);
        if texture.is_none() || projection.is_none() {
            log::warn!("GUI program is missing the '{}' or '{}' uniform", TEXTURE_UNIFORM, PROJECTION_UNIFORM);
        }

        Self {
            texture,
            projection,
            position: attribute(device, program, "aPosition", 0),
            uv: attribute(device, program, "aUV", 1),
            color: attribute(device, program, "aColor", 2),
        }
    }
}

fn attribute<D: GraphicsDevice>(device: &D, program: D::Program, name: &str, fallback: u32) -> u32 {
    device.attrib_location(program, name).unwrap_or_else(|| {
        log::warn!("Attribute '{}' not found in GUI program, assuming location {}", name, fallback);
        fallback
    })
}

/// Every GPU object the GUI renderer owns
pub struct DeviceResources<D: GraphicsDevice> {
    /// Program and its shaders
    pub shaders: ShaderResources<D>,
    /// Locations in `shaders.program`
    pub bindings: ShaderAttributeBindings<D>,
    /// Streaming geometry buffers
    pub buffers: GpuBuffers<D>,
    /// Font atlas texture
    pub font_texture: D::Texture,
}

impl<D: GraphicsDevice> DeviceResources<D> {
    /// Build the program, allocate the buffers and upload the font atlas.
    ///
    /// Leaves no program, vertex array, buffer or texture bound.
    pub fn create<G: GuiLibrary>(device: &D, gui: &mut G, config: &GuiConfig) -> RenderResult<Self> {
        let shaders = build_program(device, VERTEX_SHADER_SOURCE, FRAGMENT_SHADER_SOURCE)?;
        let bindings = ShaderAttributeBindings::resolve(device, shaders.program);

        let buffers = match create_buffers(device, &bindings, config) {
            Ok(buffers) => buffers,
            Err(err) => {
                shaders.destroy(device);
                return Err(err);
            }
        };

        let font_texture = match upload_font_atlas(device, gui) {
            Ok(texture) => texture,
            Err(err) => {
                buffers.destroy(device);
                shaders.destroy(device);
                return Err(err);
            }
        };

        Ok(Self {
            shaders,
            bindings,
            buffers,
            font_texture,
        })
    }

    /// Delete the font texture, program, shaders, buffers and vertex array
    pub fn destroy(self, device: &D) {
        device.delete_texture(self.font_texture);
        self.shaders.destroy(device);
        self.buffers.destroy(device);
    }
}

impl<D: GraphicsDevice> GpuBuffers<D> {
    fn destroy(self, device: &D) {
        device.delete_buffer(self.vertex_buffer);
        device.delete_buffer(self.index_buffer);
        device.delete_vertex_array(self.vertex_array);
    }
}

fn create_buffers<D: GraphicsDevice>(
    device: &D,
    bindings: &ShaderAttributeBindings<D>,
    config: &GuiConfig,
) -> RenderResult<GpuBuffers<D>> {
    let vertex_array = device
        .create_vertex_array()
        .map_err(|message| RenderError::creation("vertex array", message))?;
    let vertex_buffer = match device.create_buffer() {
        Ok(buffer) => buffer,
        Err(message) => {
            device.delete_vertex_array(vertex_array);
            return Err(RenderError::creation("vertex buffer", message));
        }
    };
    let index_buffer = match device.create_buffer() {
        Ok(buffer) => buffer,
        Err(message) => {
            device.delete_buffer(vertex_buffer);
            device.delete_vertex_array(vertex_array);
            return Err(RenderError::creation("index buffer", message));
        }
    };

    device.bind_vertex_array(Some(vertex_array));

    device.bind_buffer(BufferTarget::Array, Some(vertex_buffer));
    device.allocate_buffer(BufferTarget::Array, config.initial_vertex_capacity, BufferUsage::DynamicDraw);

    device.bind_buffer(BufferTarget::ElementArray, Some(index_buffer));
    device.allocate_buffer(BufferTarget::ElementArray, config.initial_index_capacity, BufferUsage::DynamicDraw);

    for (location, layout) in [
        (bindings.position, GuiVertex::POSITION),
        (bindings.uv, GuiVertex::UV),
        (bindings.color, GuiVertex::COLOR),
    ] {
        device.enable_vertex_attrib(location);
        device.vertex_attrib_pointer(location, layout);
    }

    // Unbind the VAO first so it keeps its element buffer binding
    device.bind_vertex_array(None);
    device.bind_buffer(BufferTarget::Array, None);
    device.bind_buffer(BufferTarget::ElementArray, None);

    Ok(GpuBuffers {
        vertex_buffer,
        index_buffer,
        vertex_array,
    })
}

fn validate_atlas(atlas: &FontAtlasPixels<'_>) -> RenderResult<()> {
    if atlas.is_consistent() {
        Ok(())
    } else {
        Err(RenderError::InvalidFontAtlas {
            width: atlas.width,
            height: atlas.height,
            len: atlas.pixels.len(),
        })
    }
}

fn upload_font_atlas<D: GraphicsDevice, G: GuiLibrary>(device: &D, gui: &mut G) -> RenderResult<D::Texture> {
    let texture = {
        let atlas = gui.font_atlas();
        validate_atlas(&atlas)?;
        let (Ok(width), Ok(height)) = (i32::try_from(atlas.width), i32::try_from(atlas.height)) else {
            return Err(RenderError::InvalidFontAtlas {
                width: atlas.width,
                height: atlas.height,
                len: atlas.pixels.len(),
            });
        };

        let texture = device
            .create_texture()
            .map_err(|message| RenderError::creation("font texture", message))?;
        device.bind_texture(Some(texture));
        device.set_texture_filter(TextureFilter::Linear);
        device.upload_texture_rgba8(width, height, atlas.pixels);
        log::debug!("Uploaded {}x{} font atlas", atlas.width, atlas.height);
        texture
    };

    gui.register_font_texture(device.texture_id(texture));
    gui.release_font_pixels();
    device.bind_texture(None);

    Ok(texture)
}
