//! Scripted [`GuiLibrary`] for tests.
//!
//! Records every push and frame transition, and returns queued draw streams from
//! `end_frame` (an empty stream once the queue runs dry).

use std::collections::VecDeque;

use super::backend::{DisplayMetrics, FontAtlasPixels, GuiLibrary, PointerInput};
use super::rendering::{DrawStream, TextureId};

/// Frame transition seen by the scripted library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    Begin,
    End,
}

/// Stand-in for the per-frame UI builder
#[derive(Debug, Default)]
pub struct ScriptedFrame {
    pub widgets: Vec<String>,
}

impl ScriptedFrame {
    pub fn text(&mut self, text: &str) {
        self.widgets.push(text.to_string());
    }
}

#[derive(Debug)]
pub struct ScriptedGui {
    pub atlas_pixels: Vec<u8>,
    pub font_texture: Option<TextureId>,
    pub font_pixels_released: bool,
    pub displays: Vec<DisplayMetrics>,
    pub pointers: Vec<PointerInput>,
    pub events: Vec<FrameEvent>,
    pub queued: VecDeque<DrawStream>,
    frame: ScriptedFrame,
}

impl ScriptedGui {
    pub const ATLAS_WIDTH: u32 = 8;
    pub const ATLAS_HEIGHT: u32 = 4;

    pub fn new() -> Self {
        Self {
            atlas_pixels: vec![0xff; (Self::ATLAS_WIDTH * Self::ATLAS_HEIGHT * 4) as usize],
            font_texture: None,
            font_pixels_released: false,
            displays: Vec::new(),
            pointers: Vec::new(),
            events: Vec::new(),
            queued: VecDeque::new(),
            frame: ScriptedFrame::default(),
        }
    }

    /// Stream returned by the next `end_frame`
    pub fn queue(&mut self, stream: DrawStream) {
        self.queued.push_back(stream);
    }

    pub fn last_display(&self) -> Option<&DisplayMetrics> {
        self.displays.last()
    }

    pub fn last_pointer(&self) -> Option<&PointerInput> {
        self.pointers.last()
    }

    pub fn frame(&self) -> &ScriptedFrame {
        &self.frame
    }
}

impl Default for ScriptedGui {
    fn default() -> Self {
        Self::new()
    }
}

impl GuiLibrary for ScriptedGui {
    type Frame = ScriptedFrame;

    fn font_atlas(&mut self) -> FontAtlasPixels<'_> {
        FontAtlasPixels {
            width: Self::ATLAS_WIDTH,
            height: Self::ATLAS_HEIGHT,
            pixels: &self.atlas_pixels,
        }
    }

    fn register_font_texture(&mut self, id: TextureId) {
        self.font_texture = Some(id);
    }

    fn release_font_pixels(&mut self) {
        self.atlas_pixels.clear();
        self.font_pixels_released = true;
    }

    fn set_display(&mut self, metrics: &DisplayMetrics) {
        self.displays.push(*metrics);
    }

    fn set_pointer(&mut self, pointer: &PointerInput) {
        self.pointers.push(*pointer);
    }

    fn begin_frame(&mut self) -> &mut ScriptedFrame {
        self.events.push(FrameEvent::Begin);
        self.frame.widgets.clear();
        &mut self.frame
    }

    fn end_frame(&mut self) -> DrawStream {
        self.events.push(FrameEvent::End);
        self.queued.pop_front().unwrap_or_default()
    }
}
