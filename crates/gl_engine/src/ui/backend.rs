//! GUI library seam
//!
//! The renderer drives an immediate-mode GUI library through [`GuiLibrary`]: it
//! pushes display and pointer state, opens a frame, lets the application build
//! widgets, and collects a [`DrawStream`] when the frame ends. The library owns
//! layout and font rasterization; the renderer owns every GPU object.

use super::rendering::{DrawStream, TextureId};

/// Font atlas pixels as produced by the GUI library (tightly packed RGBA8)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontAtlasPixels<'a> {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// `width * height * 4` bytes
    pub pixels: &'a [u8],
}

impl FontAtlasPixels<'_> {
    /// Whether the pixel buffer matches the dimensions
    pub fn is_consistent(&self) -> bool {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|n| n.checked_mul(4))
            .is_some_and(|expected| expected == self.pixels.len())
    }
}

/// Display state pushed to the library before each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Logical display size (`framebuffer / scale`)
    pub display_size: [f32; 2],
    /// Framebuffer pixels per logical pixel
    pub framebuffer_scale: [f32; 2],
    /// Seconds since the previous frame, always positive
    pub delta_seconds: f32,
}

/// Pointer state pushed to the library before each frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInput {
    /// Position in logical pixels, clamped to the display
    pub position: [f32; 2],
    /// Left, right and middle button
    pub buttons: [bool; 3],
    /// Wheel offset `(horizontal, vertical)` accumulated since the last frame
    pub wheel: [f32; 2],
}

/// Immediate-mode GUI library driven by the renderer
pub trait GuiLibrary {
    /// Per-frame UI builder handed to the application
    type Frame;

    /// Build the font atlas and expose its RGBA8 pixels
    fn font_atlas(&mut self) -> FontAtlasPixels<'_>;

    /// Tell the library which texture holds the uploaded atlas
    fn register_font_texture(&mut self, id: TextureId);

    /// Drop the CPU copy of the atlas once it lives on the GPU
    fn release_font_pixels(&mut self) {}

    /// Push display size, framebuffer scale and frame delta
    fn set_display(&mut self, metrics: &DisplayMetrics);

    /// Push pointer position, buttons and wheel
    fn set_pointer(&mut self, pointer: &PointerInput);

    /// Open a new frame
    fn begin_frame(&mut self) -> &mut Self::Frame;

    /// Close the open frame and collect its draw data
    fn end_frame(&mut self) -> DrawStream;
}
