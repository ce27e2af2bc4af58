//! Frame input synchronization
//!
//! Converts the window's per-frame snapshot into the display and pointer state
//! the GUI library expects. GUI coordinates are logical (DPI-independent) pixels;
//! the GPU side works in physical framebuffer pixels. The scale between the two is
//! recomputed from every snapshot since it changes when the window moves between
//! monitors.

use crate::ui::backend::{DisplayMetrics, PointerInput};

/// Window state sampled once per frame by the windowing layer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Framebuffer size in physical pixels
    pub framebuffer_size: (u32, u32),
    /// Client area size in logical pixels
    pub client_size: (u32, u32),
    /// Cursor position in logical pixels relative to the client area (may lie outside it)
    pub cursor: [f32; 2],
    /// Left, right, middle
    pub buttons: [bool; 3],
    /// Scroll offset `(horizontal, vertical)` since the previous frame
    pub scroll: [f32; 2],
}

impl FrameInput {
    /// Snapshot with only sizes set
    pub fn with_sizes(framebuffer_size: (u32, u32), client_size: (u32, u32)) -> Self {
        Self {
            framebuffer_size,
            client_size,
            ..Self::default()
        }
    }
}

/// Physical pixels per logical pixel, per axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DpiScale {
    /// Horizontal scale
    pub x: f32,
    /// Vertical scale
    pub y: f32,
}

impl Default for DpiScale {
    fn default() -> Self {
        Self::UNIT
    }
}

impl DpiScale {
    /// No scaling
    pub const UNIT: Self = Self { x: 1.0, y: 1.0 };

    /// Scale from an OS query, falling back to 1.0 when the query failed or
    /// returned something unusable.
    pub fn resolve(queried: Option<(f32, f32)>) -> Self {
        match queried {
            Some((x, y)) if is_usable(x) && is_usable(y) => {
                log::info!("DPI scale retrieved: {}x{}", x, y);
                Self { x, y }
            }
            Some((x, y)) => {
                log::debug!("Failed to get monitor scale factor (got {}x{}), using 1.0", x, y);
                Self::UNIT
            }
            None => {
                log::debug!("No current monitor found, using DPI scale 1.0");
                Self::UNIT
            }
        }
    }

    /// `framebuffer / client` per axis; an empty client axis yields 1.0
    pub fn from_sizes(framebuffer: (u32, u32), client: (u32, u32)) -> Self {
        Self {
            x: axis_ratio(framebuffer.0, client.0),
            y: axis_ratio(framebuffer.1, client.1),
        }
    }
}

fn is_usable(scale: f32) -> bool {
    scale.is_finite() && scale > 0.0
}

fn axis_ratio(framebuffer: u32, client: u32) -> f32 {
    if client == 0 {
        1.0
    } else {
        framebuffer as f32 / client as f32
    }
}

/// Framebuffer geometry and frame-open flag owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Framebuffer width in physical pixels
    pub framebuffer_width: u32,
    /// Framebuffer height in physical pixels
    pub framebuffer_height: u32,
    /// Current DPI scale
    pub dpi: DpiScale,
    /// Whether a GUI frame is open
    pub frame_begun: bool,
}

impl FrameState {
    /// Closed frame with the given geometry
    pub fn new(framebuffer_width: u32, framebuffer_height: u32, dpi: DpiScale) -> Self {
        Self {
            framebuffer_width,
            framebuffer_height,
            dpi,
            frame_begun: false,
        }
    }

    /// Framebuffer size as floats
    pub fn framebuffer_size(&self) -> [f32; 2] {
        [self.framebuffer_width as f32, self.framebuffer_height as f32]
    }

    /// Display size in logical pixels
    pub fn logical_size(&self) -> [f32; 2] {
        [
            self.framebuffer_width as f32 / self.dpi.x,
            self.framebuffer_height as f32 / self.dpi.y,
        ]
    }

    /// Display data for the GUI library
    pub fn display_metrics(&self, delta_seconds: f32) -> DisplayMetrics {
        DisplayMetrics {
            display_size: self.logical_size(),
            framebuffer_scale: [self.dpi.x, self.dpi.y],
            delta_seconds,
        }
    }

    /// Clamp a logical cursor position to the visible display
    pub fn clamp_pointer(&self, cursor: [f32; 2]) -> [f32; 2] {
        let [max_x, max_y] = self.logical_size();
        [cursor[0].clamp(0.0, max_x), cursor[1].clamp(0.0, max_y)]
    }

    /// Take framebuffer size and DPI scale from a fresh window snapshot
    pub fn refresh(&mut self, input: &FrameInput) {
        self.framebuffer_width = input.framebuffer_size.0;
        self.framebuffer_height = input.framebuffer_size.1;
        self.dpi = DpiScale::from_sizes(input.framebuffer_size, input.client_size);
    }

    /// Pointer state for the GUI library
    pub fn pointer_input(&self, input: &FrameInput) -> PointerInput {
        PointerInput {
            position: self.clamp_pointer(input.cursor),
            buttons: input.buttons,
            wheel: input.scroll,
        }
    }
}
