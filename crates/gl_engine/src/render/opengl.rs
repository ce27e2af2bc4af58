//! OpenGL implementation of [`GraphicsDevice`] on top of `glow`
//!
//! Every call here forwards to the current GL context. The caller guarantees a
//! context created on this thread is current for as long as the `glow::Context`
//! is used; that is the only invariant the `unsafe` blocks below depend on.

use std::num::NonZeroU32;

use glow::HasContext;

use super::device::{
    AttribLayout, AttribType, BlendEquation, BlendFactor, BufferTarget, BufferUsage, Capability,
    ClearFlags, GraphicsDevice, ScissorRect, ShaderStage, TextureFilter,
};
use crate::ui::rendering::TextureId;

fn shader_stage(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

fn buffer_target(target: BufferTarget) -> u32 {
    match target {
        BufferTarget::Array => glow::ARRAY_BUFFER,
        BufferTarget::ElementArray => glow::ELEMENT_ARRAY_BUFFER,
    }
}

fn buffer_usage(usage: BufferUsage) -> u32 {
    match usage {
        BufferUsage::StaticDraw => glow::STATIC_DRAW,
        BufferUsage::DynamicDraw => glow::DYNAMIC_DRAW,
        BufferUsage::StreamDraw => glow::STREAM_DRAW,
    }
}

fn capability(cap: Capability) -> u32 {
    match cap {
        Capability::Blend => glow::BLEND,
        Capability::CullFace => glow::CULL_FACE,
        Capability::DepthTest => glow::DEPTH_TEST,
        Capability::ScissorTest => glow::SCISSOR_TEST,
    }
}

fn blend_factor(factor: BlendFactor) -> u32 {
    match factor {
        BlendFactor::SrcAlpha => glow::SRC_ALPHA,
        BlendFactor::OneMinusSrcAlpha => glow::ONE_MINUS_SRC_ALPHA,
    }
}

fn attrib_type(kind: AttribType) -> u32 {
    match kind {
        AttribType::Float => glow::FLOAT,
        AttribType::UnsignedByte => glow::UNSIGNED_BYTE,
    }
}

fn clear_mask(flags: ClearFlags) -> u32 {
    let mut mask = 0;
    if flags.contains(ClearFlags::COLOR) {
        mask |= glow::COLOR_BUFFER_BIT;
    }
    if flags.contains(ClearFlags::DEPTH) {
        mask |= glow::DEPTH_BUFFER_BIT;
    }
    mask
}

impl GraphicsDevice for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type Buffer = glow::Buffer;
    type VertexArray = glow::VertexArray;
    type Texture = glow::Texture;
    type UniformLocation = glow::UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        unsafe { HasContext::create_shader(self, shader_stage(stage)) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation> {
        unsafe { self.get_uniform_location(program, name) }
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        unsafe { self.get_attrib_location(program, name) }
    }

    fn uniform_1_i32(&self, location: Option<&Self::UniformLocation>, value: i32) {
        unsafe { HasContext::uniform_1_i32(self, location, value) }
    }

    fn uniform_matrix_4(&self, location: Option<&Self::UniformLocation>, column_major: &[f32; 16]) {
        unsafe { self.uniform_matrix_4_f32_slice(location, false, column_major) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vertex_array) }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, vertex_array) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<Self::Buffer>) {
        unsafe { HasContext::bind_buffer(self, buffer_target(target), buffer) }
    }

    fn allocate_buffer(&self, target: BufferTarget, size: usize, usage: BufferUsage) {
        let size = i32::try_from(size).unwrap_or(i32::MAX);
        unsafe { self.buffer_data_size(buffer_target(target), size, buffer_usage(usage)) }
    }

    fn upload_buffer(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        unsafe { self.buffer_data_u8_slice(buffer_target(target), data, buffer_usage(usage)) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn enable_vertex_attrib(&self, index: u32) {
        unsafe { self.enable_vertex_attrib_array(index) }
    }

    fn vertex_attrib_pointer(&self, index: u32, layout: AttribLayout) {
        unsafe {
            self.vertex_attrib_pointer_f32(
                index,
                layout.components,
                attrib_type(layout.kind),
                layout.normalized,
                layout.stride,
                layout.offset,
            );
        }
    }

    fn create_texture(&self) -> Result<Self::Texture, String> {
        unsafe { HasContext::create_texture(self) }
    }

    fn active_texture(&self, unit: u32) {
        unsafe { HasContext::active_texture(self, glow::TEXTURE0 + unit) }
    }

    fn bind_texture(&self, texture: Option<Self::Texture>) {
        unsafe { HasContext::bind_texture(self, glow::TEXTURE_2D, texture) }
    }

    fn upload_texture_rgba8(&self, width: i32, height: i32, pixels: &[u8]) {
        unsafe {
            self.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width,
                height,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                Some(pixels),
            );
        }
    }

    fn set_texture_filter(&self, filter: TextureFilter) {
        let value = match filter {
            TextureFilter::Linear => glow::LINEAR,
            TextureFilter::Nearest => glow::NEAREST,
        } as i32;
        unsafe {
            self.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, value);
            self.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, value);
        }
    }

    fn delete_texture(&self, texture: Self::Texture) {
        unsafe { HasContext::delete_texture(self, texture) }
    }

    fn texture_id(&self, texture: Self::Texture) -> TextureId {
        TextureId(texture.0.get() as usize)
    }

    fn texture_from_id(&self, id: TextureId) -> Option<Self::Texture> {
        u32::try_from(id.0).ok().and_then(NonZeroU32::new).map(glow::NativeTexture)
    }

    fn enable(&self, cap: Capability) {
        unsafe { HasContext::enable(self, capability(cap)) }
    }

    fn disable(&self, cap: Capability) {
        unsafe { HasContext::disable(self, capability(cap)) }
    }

    fn blend_equation(&self, equation: BlendEquation) {
        let mode = match equation {
            BlendEquation::Add => glow::FUNC_ADD,
        };
        unsafe { HasContext::blend_equation(self, mode) }
    }

    fn blend_func(&self, src: BlendFactor, dst: BlendFactor) {
        unsafe { HasContext::blend_func(self, blend_factor(src), blend_factor(dst)) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, x, y, width, height) }
    }

    fn scissor(&self, rect: ScissorRect) {
        unsafe { HasContext::scissor(self, rect.x, rect.y, rect.width, rect.height) }
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        unsafe { HasContext::clear_color(self, rgba[0], rgba[1], rgba[2], rgba[3]) }
    }

    fn clear(&self, flags: ClearFlags) {
        unsafe { HasContext::clear(self, clear_mask(flags)) }
    }

    fn draw_arrays(&self, first: i32, count: i32) {
        unsafe { HasContext::draw_arrays(self, glow::TRIANGLES, first, count) }
    }

    fn draw_elements_base_vertex(&self, count: i32, index_offset_bytes: i32, base_vertex: i32) {
        unsafe {
            HasContext::draw_elements_base_vertex(
                self,
                glow::TRIANGLES,
                count,
                glow::UNSIGNED_SHORT,
                index_offset_bytes,
                base_vertex,
            );
        }
    }

    fn next_error(&self) -> Option<u32> {
        let code = unsafe { self.get_error() };
        (code != glow::NO_ERROR).then_some(code)
    }
}
