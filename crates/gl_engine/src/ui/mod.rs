//! GUI System Module
//!
//! Draws an immediate-mode GUI on top of an OpenGL scene.
//!
//! Architecture:
//! - backend: the [`GuiLibrary`] seam the renderer drives
//! - rendering/: library-agnostic draw data (vertices, command lists, clip rects)
//! - input/: window snapshot to GUI display/pointer state, DPI handling
//! - renderer/: GPU resources, frame protocol and draw-list translation

pub mod backend;
pub mod input;
pub mod renderer;
pub mod rendering;

#[cfg(feature = "imgui")]
pub mod imgui_backend;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{DisplayMetrics, FontAtlasPixels, GuiLibrary, PointerInput};
pub use input::{DpiScale, FrameInput, FrameState};
pub use renderer::GuiRenderer;
pub use rendering::{ClipRect, CommandList, DrawCommand, DrawParams, DrawStream, GuiVertex, TextureId};
