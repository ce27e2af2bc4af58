//! Backend-agnostic GUI draw data
//!
//! The GUI library's per-frame output, copied into owned types the renderer can
//! translate without knowing which library produced it.

pub mod commands;
pub mod data;
pub mod vertex;

pub use commands::{DrawCommand, DrawParams, TextureId};
pub use data::{ClipRect, CommandList, DrawStream};
pub use vertex::GuiVertex;
