//! Graphics device abstraction
//!
//! The renderer talks to OpenGL through [`GraphicsDevice`], a narrow slice of the
//! GL 3.3 core API covering exactly what the GUI bridge and the demo scene use.
//! `glow::Context` implements it for real rendering (see [`super::opengl`]); tests
//! substitute a recording device that logs every call.
//!
//! Methods take `&self` like `glow` does: GL state lives in the driver, not in
//! the Rust value.

use std::fmt::Debug;

use bitflags::bitflags;

use crate::ui::rendering::TextureId;

/// Shader pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

impl ShaderStage {
    /// Upper-case stage tag used in compile diagnostics
    pub fn diagnostic_tag(self) -> &'static str {
        match self {
            Self::Vertex => "VERTEX",
            Self::Fragment => "FRAGMENT",
        }
    }
}

/// Buffer binding point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// `GL_ARRAY_BUFFER`
    Array,
    /// `GL_ELEMENT_ARRAY_BUFFER`
    ElementArray,
}

/// Buffer usage hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferUsage {
    /// Written once, drawn many times
    StaticDraw,
    /// Rewritten occasionally
    DynamicDraw,
    /// Rewritten every use
    StreamDraw,
}

/// Server-side capability toggled with `glEnable`/`glDisable`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Color blending
    Blend,
    /// Face culling
    CullFace,
    /// Depth testing
    DepthTest,
    /// Scissor testing
    ScissorTest,
}

/// Blend equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendEquation {
    /// `src + dst`
    Add,
}

/// Blend factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// Source alpha
    SrcAlpha,
    /// One minus source alpha
    OneMinusSrcAlpha,
}

/// Texture minification/magnification filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFilter {
    /// Bilinear
    Linear,
    /// Point sampling
    Nearest,
}

/// Component type of a vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttribType {
    /// 32-bit float
    Float,
    /// 8-bit unsigned integer
    UnsignedByte,
}

/// How one vertex attribute is read out of the bound array buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttribLayout {
    /// Number of components (1-4)
    pub components: i32,
    /// Component type
    pub kind: AttribType,
    /// Map integer components to `[0, 1]`
    pub normalized: bool,
    /// Bytes between consecutive vertices
    pub stride: i32,
    /// Byte offset of the first component
    pub offset: i32,
}

/// Scissor rectangle in GL window space (bottom-left origin, physical pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScissorRect {
    /// Left edge
    pub x: i32,
    /// Bottom edge
    pub y: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

bitflags! {
    /// Buffers cleared by [`GraphicsDevice::clear`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u32 {
        /// Color buffer
        const COLOR = 1 << 0;
        /// Depth buffer
        const DEPTH = 1 << 1;
    }
}

/// The OpenGL surface the renderer is written against.
///
/// Object creation returns the driver's error text on failure, mirroring `glow`.
/// Everything else is fire-and-forget; errors surface through [`Self::next_error`].
pub trait GraphicsDevice {
    /// Shader object handle
    type Shader: Copy + Debug + PartialEq;
    /// Program object handle
    type Program: Copy + Debug + PartialEq;
    /// Buffer object handle
    type Buffer: Copy + Debug + PartialEq;
    /// Vertex array object handle
    type VertexArray: Copy + Debug + PartialEq;
    /// Texture object handle
    type Texture: Copy + Debug + PartialEq;
    /// Uniform location
    type UniformLocation: Clone + Debug;

    // --- shaders and programs ---

    /// Create an empty shader object
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    /// Replace a shader's source
    fn shader_source(&self, shader: Self::Shader, source: &str);
    /// Compile a shader
    fn compile_shader(&self, shader: Self::Shader);
    /// Whether the last compile succeeded
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    /// Compiler output for a shader
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    /// Delete a shader object
    fn delete_shader(&self, shader: Self::Shader);

    /// Create an empty program object
    fn create_program(&self) -> Result<Self::Program, String>;
    /// Attach a shader to a program
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// Link a program
    fn link_program(&self, program: Self::Program);
    /// Whether the last link succeeded
    fn program_link_status(&self, program: Self::Program) -> bool;
    /// Linker output for a program
    fn program_info_log(&self, program: Self::Program) -> String;
    /// Delete a program object
    fn delete_program(&self, program: Self::Program);
    /// Make a program current, or none
    fn use_program(&self, program: Option<Self::Program>);

    /// Look up a uniform by name
    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation>;
    /// Look up a vertex attribute by name
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    /// Set an `int`/`sampler` uniform on the current program
    fn uniform_1_i32(&self, location: Option<&Self::UniformLocation>, value: i32);
    /// Set a `mat4` uniform on the current program from column-major data
    fn uniform_matrix_4(&self, location: Option<&Self::UniformLocation>, column_major: &[f32; 16]);

    // --- vertex arrays and buffers ---

    /// Create a vertex array object
    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    /// Bind a vertex array, or none
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    /// Delete a vertex array object
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    /// Create a buffer object
    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    /// Bind a buffer to a target, or unbind the target
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<Self::Buffer>);
    /// Reallocate the bound buffer with `size` uninitialized bytes
    fn allocate_buffer(&self, target: BufferTarget, size: usize, usage: BufferUsage);
    /// Reallocate the bound buffer to exactly `data` and copy it in
    fn upload_buffer(&self, target: BufferTarget, data: &[u8], usage: BufferUsage);
    /// Delete a buffer object
    fn delete_buffer(&self, buffer: Self::Buffer);

    /// Enable a vertex attribute array on the bound vertex array
    fn enable_vertex_attrib(&self, index: u32);
    /// Describe a vertex attribute's layout in the bound array buffer
    fn vertex_attrib_pointer(&self, index: u32, layout: AttribLayout);

    // --- textures ---

    /// Create a texture object
    fn create_texture(&self) -> Result<Self::Texture, String>;
    /// Select the active texture unit (0-based)
    fn active_texture(&self, unit: u32);
    /// Bind a 2D texture to the active unit, or unbind
    fn bind_texture(&self, texture: Option<Self::Texture>);
    /// Upload tightly packed RGBA8 pixels to the bound 2D texture (level 0)
    fn upload_texture_rgba8(&self, width: i32, height: i32, pixels: &[u8]);
    /// Set min and mag filter on the bound 2D texture
    fn set_texture_filter(&self, filter: TextureFilter);
    /// Delete a texture object
    fn delete_texture(&self, texture: Self::Texture);
    /// Identifier for a texture as handed to the GUI library
    fn texture_id(&self, texture: Self::Texture) -> TextureId;
    /// Resolve a GUI texture identifier back to a texture (`None` for id 0)
    fn texture_from_id(&self, id: TextureId) -> Option<Self::Texture>;

    // --- fixed-function state ---

    /// `glEnable`
    fn enable(&self, capability: Capability);
    /// `glDisable`
    fn disable(&self, capability: Capability);
    /// Set the blend equation
    fn blend_equation(&self, equation: BlendEquation);
    /// Set source and destination blend factors
    fn blend_func(&self, src: BlendFactor, dst: BlendFactor);
    /// Set the viewport
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    /// Set the scissor box
    fn scissor(&self, rect: ScissorRect);
    /// Set the clear color
    fn clear_color(&self, rgba: [f32; 4]);
    /// Clear the selected buffers
    fn clear(&self, flags: ClearFlags);

    // --- drawing ---

    /// Draw non-indexed triangles from the bound vertex array
    fn draw_arrays(&self, first: i32, count: i32);
    /// Draw triangles indexed by 16-bit indices from the bound element buffer.
    ///
    /// `index_offset_bytes` is the byte offset into the element buffer and
    /// `base_vertex` is added to every fetched index.
    fn draw_elements_base_vertex(&self, count: i32, index_offset_bytes: i32, base_vertex: i32);

    /// Pop one code off the GL error queue (`None` once it is empty)
    fn next_error(&self) -> Option<u32>;
}
