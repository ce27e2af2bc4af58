//! Draw commands inside a command list

use super::data::ClipRect;
use crate::render::device::ScissorRect;

/// Opaque texture identifier carried by draw commands.
///
/// The renderer hands the font texture's id to the GUI library, which echoes it
/// back on every command that samples the atlas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// Per-command draw parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    /// Clip rectangle in framebuffer space, top-left origin
    pub clip_rect: ClipRect,
    /// Texture to sample
    pub texture_id: TextureId,
    /// Added to every index of this command
    pub vtx_offset: usize,
    /// First index of this command within the list's index buffer
    pub idx_offset: usize,
}

impl DrawParams {
    /// Scissor box for this command on a framebuffer `fb_height` pixels tall
    pub fn scissor(&self, fb_height: f32) -> ScissorRect {
        self.clip_rect.to_scissor(fb_height)
    }
}

/// A single draw command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Draw `count` indices as triangles
    Elements {
        /// Number of indices
        count: usize,
        /// Clip, texture and offsets
        params: DrawParams,
    },
    /// Application callback embedded in the stream (not supported by the renderer)
    UserCallback,
}
