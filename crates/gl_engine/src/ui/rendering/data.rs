//! Frame draw data handed from the GUI library to the renderer

use super::commands::DrawCommand;
use super::vertex::GuiVertex;
use crate::render::device::ScissorRect;

/// Axis-aligned clip rectangle, top-left origin
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClipRect {
    /// Left edge (x1)
    pub left: f32,
    /// Top edge (y1)
    pub top: f32,
    /// Right edge (x2)
    pub right: f32,
    /// Bottom edge (y2)
    pub bottom: f32,
}

impl ClipRect {
    /// Rectangle from its edges
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Convert to a GL scissor box (bottom-left origin).
    ///
    /// `(left, fb_height - bottom, right - left, bottom - top)`, truncated to integers.
    pub fn to_scissor(&self, fb_height: f32) -> ScissorRect {
        ScissorRect {
            x: self.left as i32,
            y: (fb_height - self.bottom) as i32,
            width: (self.right - self.left) as i32,
            height: (self.bottom - self.top) as i32,
        }
    }
}

/// One command list: shared vertex and index buffers plus the commands drawing from them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandList {
    /// Vertices
    pub vertices: Vec<GuiVertex>,
    /// 16-bit indices into `vertices` (before `vtx_offset`)
    pub indices: Vec<u16>,
    /// Commands, drawn in order
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    /// Vertex buffer as raw bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Everything the GUI library produced for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawStream {
    /// Command lists, drawn in order
    pub command_lists: Vec<CommandList>,
}

impl DrawStream {
    /// Stream with nothing to draw
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether there is no command list
    pub fn is_empty(&self) -> bool {
        self.command_lists.is_empty()
    }

    /// Total vertices across all lists
    pub fn total_vertices(&self) -> usize {
        self.command_lists.iter().map(|list| list.vertices.len()).sum()
    }

    /// Total indices across all lists
    pub fn total_indices(&self) -> usize {
        self.command_lists.iter().map(|list| list.indices.len()).sum()
    }
}
