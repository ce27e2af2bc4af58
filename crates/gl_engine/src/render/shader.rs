//! Shader compilation and program linking
//!
//! Compile and link failures are logged with the fixed tags
//! `ERROR::SHADER::<STAGE>::COMPILATION_FAILED` / `ERROR::SHADER::PROGRAM::LINKING_FAILED`
//! followed by the driver's info log, and the handle is returned anyway. Log
//! tooling greps for those tags, so keep them stable. Only failing to create an
//! object at all is an error.

use super::device::{GraphicsDevice, ShaderStage};
use super::{RenderError, RenderResult};

/// Vertex shader, fragment shader and the program linking them.
///
/// If `program` linked, both shaders are attached to it.
pub struct ShaderResources<D: GraphicsDevice> {
    /// Vertex stage
    pub vertex_shader: D::Shader,
    /// Fragment stage
    pub fragment_shader: D::Shader,
    /// Linked program
    pub program: D::Program,
}

impl<D: GraphicsDevice> ShaderResources<D> {
    /// Delete the program and both shaders
    pub fn destroy(self, device: &D) {
        device.delete_program(self.program);
        device.delete_shader(self.fragment_shader);
        device.delete_shader(self.vertex_shader);
    }
}

/// Diagnostic line written when a shader stage fails to compile
pub fn compile_failure_message(stage: ShaderStage, info_log: &str) -> String {
    format!("ERROR::SHADER::{}::COMPILATION_FAILED\n{}", stage.diagnostic_tag(), info_log)
}

/// Diagnostic line written when a program fails to link
pub fn link_failure_message(info_log: &str) -> String {
    format!("ERROR::SHADER::PROGRAM::LINKING_FAILED\n{info_log}")
}

/// Create and compile one shader stage.
///
/// A failed compile is logged and the shader handle is still returned.
pub fn compile_stage<D: GraphicsDevice>(device: &D, stage: ShaderStage, source: &str) -> RenderResult<D::Shader> {
    let shader = device
        .create_shader(stage)
        .map_err(|message| RenderError::creation("shader", message))?;
    device.shader_source(shader, source);
    device.compile_shader(shader);

    if !device.shader_compile_status(shader) {
        log::error!("{}", compile_failure_message(stage, &device.shader_info_log(shader)));
    }
    Ok(shader)
}

/// Create a program, attach both shaders and link.
///
/// A failed link is logged and the program handle is still returned.
pub fn link_program<D: GraphicsDevice>(
    device: &D,
    vertex_shader: D::Shader,
    fragment_shader: D::Shader,
) -> RenderResult<D::Program> {
    let program = device
        .create_program()
        .map_err(|message| RenderError::creation("program", message))?;
    device.attach_shader(program, vertex_shader);
    device.attach_shader(program, fragment_shader);
    device.link_program(program);

    if !device.program_link_status(program) {
        log::error!("{}", link_failure_message(&device.program_info_log(program)));
    }
    Ok(program)
}

/// Compile both stages and link them into a program
pub fn build_program<D: GraphicsDevice>(
    device: &D,
    vertex_source: &str,
    fragment_source: &str,
) -> RenderResult<ShaderResources<D>> {
    let vertex_shader = compile_stage(device, ShaderStage::Vertex, vertex_source)?;
    let fragment_shader = compile_stage(device, ShaderStage::Fragment, fragment_source)?;
    let program = link_program(device, vertex_shader, fragment_shader)?;

    Ok(ShaderResources {
        vertex_shader,
        fragment_shader,
        program,
    })
}
