//! Recording [`GraphicsDevice`] for tests.
//!
//! Every call is appended to a log, objects are tracked so tests can check that
//! teardown balances creation, and a handful of knobs simulate driver failures.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};

use super::device::{
    AttribLayout, BlendEquation, BlendFactor, BufferTarget, BufferUsage, Capability, ClearFlags, GraphicsDevice,
    ScissorRect, ShaderStage, TextureFilter,
};
use crate::ui::rendering::TextureId;

/// One recorded device call
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    Uniform1i(Option<String>, i32),
    UniformMatrix4(Option<String>, [f32; 16]),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindBuffer(BufferTarget, Option<u32>),
    AllocateBuffer(BufferTarget, usize, BufferUsage),
    UploadBuffer(BufferTarget, Vec<u8>, BufferUsage),
    DeleteBuffer(u32),
    EnableVertexAttrib(u32),
    VertexAttribPointer(u32, AttribLayout),
    CreateTexture(u32),
    ActiveTexture(u32),
    BindTexture(Option<u32>),
    UploadTexture { width: i32, height: i32, len: usize },
    SetTextureFilter(TextureFilter),
    DeleteTexture(u32),
    Enable(Capability),
    Disable(Capability),
    BlendEquation(BlendEquation),
    BlendFunc(BlendFactor, BlendFactor),
    Viewport(i32, i32, i32, i32),
    Scissor(ScissorRect),
    ClearColor([f32; 4]),
    Clear(ClearFlags),
    DrawArrays(i32, i32),
    DrawElementsBaseVertex { count: i32, index_offset_bytes: i32, base_vertex: i32 },
}

/// Kind of GPU object the device hands out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Shader,
    Program,
    Buffer,
    VertexArray,
    Texture,
}

#[derive(Debug, Default)]
struct BindState {
    program: Option<u32>,
    vertex_array: Option<u32>,
    array_buffer: Option<u32>,
    element_buffer: Option<u32>,
    texture: Option<u32>,
    enabled: HashSet<Capability>,
    // Element buffer bindings are vertex array state
    vao_elements: HashMap<Option<u32>, Option<u32>>,
}

/// Fake device that records calls instead of issuing them
#[derive(Debug)]
pub struct RecordingDevice {
    calls: RefCell<Vec<GlCall>>,
    next_handle: Cell<u32>,
    live: RefCell<HashMap<u32, ObjectKind>>,
    shader_stages: RefCell<HashMap<u32, ShaderStage>>,
    compile_ok: RefCell<HashMap<u32, bool>>,
    link_ok: RefCell<HashMap<u32, bool>>,
    failing_kinds: RefCell<HashSet<ObjectKind>>,
    compile_failures: RefCell<HashMap<ShaderStage, String>>,
    link_failure: RefCell<Option<String>>,
    attribs: RefCell<HashMap<String, u32>>,
    errors: RefCell<VecDeque<u32>>,
    state: RefCell<BindState>,
}

impl RecordingDevice {
    /// Device whose programs expose `aPosition`, `aUV` and `aColor` at 0, 1, 2
    pub fn new() -> Self {
        let attribs = [("aPosition", 0), ("aUV", 1), ("aColor", 2)]
            .into_iter()
            .map(|(name, index)| (name.to_string(), index))
            .collect();

        Self {
            calls: RefCell::new(Vec::new()),
            next_handle: Cell::new(1),
            live: RefCell::new(HashMap::new()),
            shader_stages: RefCell::new(HashMap::new()),
            compile_ok: RefCell::new(HashMap::new()),
            link_ok: RefCell::new(HashMap::new()),
            failing_kinds: RefCell::new(HashSet::new()),
            compile_failures: RefCell::new(HashMap::new()),
            link_failure: RefCell::new(None),
            attribs: RefCell::new(attribs),
            errors: RefCell::new(VecDeque::new()),
            state: RefCell::new(BindState::default()),
        }
    }

    // --- knobs ---

    /// Make creation of `kind` objects fail
    pub fn fail_creation(&self, kind: ObjectKind) {
        self.failing_kinds.borrow_mut().insert(kind);
    }

    /// Make compiles of `stage` fail with `log`
    pub fn fail_compile(&self, stage: ShaderStage, log: &str) {
        self.compile_failures.borrow_mut().insert(stage, log.to_string());
    }

    /// Make every link fail with `log`
    pub fn fail_link(&self, log: &str) {
        *self.link_failure.borrow_mut() = Some(log.to_string());
    }

    /// Remove a vertex attribute from every program
    pub fn hide_attrib(&self, name: &str) {
        self.attribs.borrow_mut().remove(name);
    }

    /// Queue a GL error code
    pub fn push_error(&self, code: u32) {
        self.errors.borrow_mut().push_back(code);
    }

    // --- inspection ---

    /// Snapshot of the call log
    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    /// Forget recorded calls (object tracking is kept)
    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Number of live objects of `kind`
    pub fn live_count(&self, kind: ObjectKind) -> usize {
        self.live.borrow().values().filter(|k| **k == kind).count()
    }

    /// Every indexed draw recorded, as `(count, index_offset_bytes, base_vertex)`
    pub fn indexed_draws(&self) -> Vec<(i32, i32, i32)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GlCall::DrawElementsBaseVertex {
                    count,
                    index_offset_bytes,
                    base_vertex,
                } => Some((*count, *index_offset_bytes, *base_vertex)),
                _ => None,
            })
            .collect()
    }

    /// Every scissor rectangle set, in order
    pub fn scissors(&self) -> Vec<ScissorRect> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GlCall::Scissor(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Last matrix written to any uniform
    pub fn last_matrix(&self) -> Option<[f32; 16]> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            GlCall::UniformMatrix4(_, m) => Some(*m),
            _ => None,
        })
    }

    /// Whether a capability is currently enabled
    pub fn is_enabled(&self, capability: Capability) -> bool {
        self.state.borrow().enabled.contains(&capability)
    }

    /// Whether no program, vertex array, buffer or texture is bound
    pub fn bindings_clear(&self) -> bool {
        let state = self.state.borrow();
        state.program.is_none()
            && state.vertex_array.is_none()
            && state.array_buffer.is_none()
            && state.element_buffer.is_none()
            && state.texture.is_none()
    }

    /// Currently bound texture
    pub fn bound_texture(&self) -> Option<u32> {
        self.state.borrow().texture
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate(&self, kind: ObjectKind) -> Result<u32, String> {
        if self.failing_kinds.borrow().contains(&kind) {
            return Err(format!("simulated {kind:?} creation failure"));
        }
        let handle = self.next_handle.get();
        self.next_handle.set(handle + 1);
        self.live.borrow_mut().insert(handle, kind);
        Ok(handle)
    }

    fn release(&self, handle: u32, kind: ObjectKind) {
        let removed = self.live.borrow_mut().remove(&handle);
        assert_eq!(removed, Some(kind), "deleting unknown or mismatched {kind:?} {handle}");
    }
}

impl Default for RecordingDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsDevice for RecordingDevice {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type Texture = u32;
    type UniformLocation = String;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let shader = self.allocate(ObjectKind::Shader)?;
        self.shader_stages.borrow_mut().insert(shader, stage);
        self.record(GlCall::CreateShader(stage, shader));
        Ok(shader)
    }

    fn shader_source(&self, shader: u32, _source: &str) {
        self.record(GlCall::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        let stage = self.shader_stages.borrow().get(&shader).copied();
        let ok = stage.map_or(false, |stage| !self.compile_failures.borrow().contains_key(&stage));
        self.compile_ok.borrow_mut().insert(shader, ok);
        self.record(GlCall::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.compile_ok.borrow().get(&shader).copied().unwrap_or(false)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        let stage = self.shader_stages.borrow().get(&shader).copied();
        stage
            .and_then(|stage| self.compile_failures.borrow().get(&stage).cloned())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        self.release(shader, ObjectKind::Shader);
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let program = self.allocate(ObjectKind::Program)?;
        self.record(GlCall::CreateProgram(program));
        Ok(program)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(GlCall::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        let ok = self.link_failure.borrow().is_none();
        self.link_ok.borrow_mut().insert(program, ok);
        self.record(GlCall::LinkProgram(program));
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.link_ok.borrow().get(&program).copied().unwrap_or(false)
    }

    fn program_info_log(&self, _program: u32) -> String {
        self.link_failure.borrow().clone().unwrap_or_default()
    }

    fn delete_program(&self, program: u32) {
        self.release(program, ObjectKind::Program);
        self.record(GlCall::DeleteProgram(program));
    }

    fn use_program(&self, program: Option<u32>) {
        self.state.borrow_mut().program = program;
        self.record(GlCall::UseProgram(program));
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<String> {
        Some(name.to_string())
    }

    fn attrib_location(&self, _program: u32, name: &str) -> Option<u32> {
        self.attribs.borrow().get(name).copied()
    }

    fn uniform_1_i32(&self, location: Option<&String>, value: i32) {
        self.record(GlCall::Uniform1i(location.cloned(), value));
    }

    fn uniform_matrix_4(&self, location: Option<&String>, column_major: &[f32; 16]) {
        self.record(GlCall::UniformMatrix4(location.cloned(), *column_major));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let vertex_array = self.allocate(ObjectKind::VertexArray)?;
        self.record(GlCall::CreateVertexArray(vertex_array));
        Ok(vertex_array)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        {
            let mut state = self.state.borrow_mut();
            state.vertex_array = vertex_array;
            state.element_buffer = state.vao_elements.get(&vertex_array).copied().flatten();
        }
        self.record(GlCall::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.release(vertex_array, ObjectKind::VertexArray);
        self.record(GlCall::DeleteVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let buffer = self.allocate(ObjectKind::Buffer)?;
        self.record(GlCall::CreateBuffer(buffer));
        Ok(buffer)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<u32>) {
        {
            let mut state = self.state.borrow_mut();
            match target {
                BufferTarget::Array => state.array_buffer = buffer,
                BufferTarget::ElementArray => {
                    let vertex_array = state.vertex_array;
                    state.vao_elements.insert(vertex_array, buffer);
                    state.element_buffer = buffer;
                }
            }
        }
        self.record(GlCall::BindBuffer(target, buffer));
    }

    fn allocate_buffer(&self, target: BufferTarget, size: usize, usage: BufferUsage) {
        self.record(GlCall::AllocateBuffer(target, size, usage));
    }

    fn upload_buffer(&self, target: BufferTarget, data: &[u8], usage: BufferUsage) {
        self.record(GlCall::UploadBuffer(target, data.to_vec(), usage));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.release(buffer, ObjectKind::Buffer);
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn enable_vertex_attrib(&self, index: u32) {
        self.record(GlCall::EnableVertexAttrib(index));
    }

    fn vertex_attrib_pointer(&self, index: u32, layout: AttribLayout) {
        self.record(GlCall::VertexAttribPointer(index, layout));
    }

    fn create_texture(&self) -> Result<u32, String> {
        let texture = self.allocate(ObjectKind::Texture)?;
        self.record(GlCall::CreateTexture(texture));
        Ok(texture)
    }

    fn active_texture(&self, unit: u32) {
        self.record(GlCall::ActiveTexture(unit));
    }

    fn bind_texture(&self, texture: Option<u32>) {
        self.state.borrow_mut().texture = texture;
        self.record(GlCall::BindTexture(texture));
    }

    fn upload_texture_rgba8(&self, width: i32, height: i32, pixels: &[u8]) {
        self.record(GlCall::UploadTexture {
            width,
            height,
            len: pixels.len(),
        });
    }

    fn set_texture_filter(&self, filter: TextureFilter) {
        self.record(GlCall::SetTextureFilter(filter));
    }

    fn delete_texture(&self, texture: u32) {
        self.release(texture, ObjectKind::Texture);
        self.record(GlCall::DeleteTexture(texture));
    }

    fn texture_id(&self, texture: u32) -> TextureId {
        TextureId(texture as usize)
    }

    fn texture_from_id(&self, id: TextureId) -> Option<u32> {
        u32::try_from(id.0).ok().filter(|handle| *handle != 0)
    }

    fn enable(&self, capability: Capability) {
        self.state.borrow_mut().enabled.insert(capability);
        self.record(GlCall::Enable(capability));
    }

    fn disable(&self, capability: Capability) {
        self.state.borrow_mut().enabled.remove(&capability);
        self.record(GlCall::Disable(capability));
    }

    fn blend_equation(&self, equation: BlendEquation) {
        self.record(GlCall::BlendEquation(equation));
    }

    fn blend_func(&self, src: BlendFactor, dst: BlendFactor) {
        self.record(GlCall::BlendFunc(src, dst));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport(x, y, width, height));
    }

    fn scissor(&self, rect: ScissorRect) {
        self.record(GlCall::Scissor(rect));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.record(GlCall::ClearColor(rgba));
    }

    fn clear(&self, flags: ClearFlags) {
        self.record(GlCall::Clear(flags));
    }

    fn draw_arrays(&self, first: i32, count: i32) {
        self.record(GlCall::DrawArrays(first, count));
    }

    fn draw_elements_base_vertex(&self, count: i32, index_offset_bytes: i32, base_vertex: i32) {
        self.record(GlCall::DrawElementsBaseVertex {
            count,
            index_offset_bytes,
            base_vertex,
        });
    }

    fn next_error(&self) -> Option<u32> {
        self.errors.borrow_mut().pop_front()
    }
}
