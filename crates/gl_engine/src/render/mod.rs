//! # Rendering
//!
//! Thin layer over OpenGL 3.3 core. Everything above this module talks to the GPU
//! through [`GraphicsDevice`]; [`opengl`] implements it for `glow::Context`.
//!
//! - [`device`]: the device trait and the small GL enums it takes
//! - [`shader`]: compile/link helpers with the engine's diagnostic format
//! - [`diagnostics`]: draining the GL error queue

pub mod device;
pub mod diagnostics;
pub mod opengl;
pub mod shader;

#[cfg(test)]
pub(crate) mod testing;

pub use device::{
    AttribLayout, AttribType, BlendEquation, BlendFactor, BufferTarget, BufferUsage, Capability, ClearFlags,
    GraphicsDevice, ScissorRect, ShaderStage, TextureFilter,
};
pub use diagnostics::check_gl_errors;
pub use shader::{build_program, ShaderResources};

use thiserror::Error;

/// Errors raised while creating GPU resources or translating draw data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The driver refused to create an object
    #[error("Failed to create {kind}: {message}")]
    ResourceCreation {
        /// Object kind ("shader", "buffer", ...)
        kind: &'static str,
        /// Driver message
        message: String,
    },

    /// A draw list contained a user callback, which this renderer does not run
    #[error("Draw list {list} command {command} is a user callback; callbacks are not supported")]
    UnsupportedCallback {
        /// Index of the command list
        list: usize,
        /// Index of the command within the list
        command: usize,
    },

    /// Font atlas pixel data does not match its dimensions
    #[error("Font atlas is {width}x{height} but holds {len} bytes of RGBA data")]
    InvalidFontAtlas {
        /// Atlas width in pixels
        width: u32,
        /// Atlas height in pixels
        height: u32,
        /// Byte length of the pixel buffer
        len: usize,
    },
}

impl RenderError {
    /// Shorthand for [`RenderError::ResourceCreation`]
    pub fn creation(kind: &'static str, message: impl Into<String>) -> Self {
        Self::ResourceCreation {
            kind,
            message: message.into(),
        }
    }
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
