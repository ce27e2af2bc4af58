//! GUI input handling module

pub mod processor;

// Re-export commonly used types
pub use processor::{DpiScale, FrameInput, FrameState};
