//! Vertex layout shared with the GUI library

use bytemuck::{Pod, Zeroable};

use crate::render::device::{AttribLayout, AttribType};

/// GUI vertex: 2D position, texture coordinate and packed RGBA color.
///
/// Byte layout is fixed at 20 bytes (pos @ 0, uv @ 8, col @ 16) so a GUI library's
/// vertex buffer can be reinterpreted as `&[GuiVertex]` and uploaded as-is.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GuiVertex {
    /// Position in logical pixels, top-left origin
    pub pos: [f32; 2],
    /// Font atlas / texture coordinate
    pub uv: [f32; 2],
    /// RGBA, one byte per channel
    pub col: [u8; 4],
}

const _: () = assert!(std::mem::size_of::<GuiVertex>() == 20);

impl GuiVertex {
    /// Size of one vertex in bytes
    pub const STRIDE: i32 = std::mem::size_of::<Self>() as i32;

    /// Layout of the `pos` attribute
    pub const POSITION: AttribLayout = AttribLayout {
        components: 2,
        kind: AttribType::Float,
        normalized: false,
        stride: Self::STRIDE,
        offset: 0,
    };

    /// Layout of the `uv` attribute
    pub const UV: AttribLayout = AttribLayout {
        components: 2,
        kind: AttribType::Float,
        normalized: false,
        stride: Self::STRIDE,
        offset: 8,
    };

    /// Layout of the `col` attribute, normalized to `[0, 1]`
    pub const COLOR: AttribLayout = AttribLayout {
        components: 4,
        kind: AttribType::UnsignedByte,
        normalized: true,
        stride: Self::STRIDE,
        offset: 16,
    };

    /// Build a vertex
    pub fn new(pos: [f32; 2], uv: [f32; 2], col: [u8; 4]) -> Self {
        Self { pos, uv, col }
    }
}
