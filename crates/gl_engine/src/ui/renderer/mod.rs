//! # GUI Renderer
//!
//! Bridges an immediate-mode GUI library to OpenGL:
//!
//! - [`resources`]: program, streaming buffers and font atlas texture
//! - [`binding`]: scoped render state around GUI drawing
//! - [`translate`]: replays a frame's [`DrawStream`](crate::ui::rendering::DrawStream)
//!
//! ## Frame protocol
//!
//! ```text
//! new() ──> [open] ──update()──> [open] ──render()──> [closed] ──update()──> [open]
//! ```
//!
//! `update` must run before the application issues GUI calls for a frame, and
//! `render` after all of them and before the buffer swap.

pub mod binding;
pub mod resources;
pub mod translate;

pub use binding::RenderStateScope;
pub use resources::{DeviceResources, GpuBuffers, ShaderAttributeBindings};
pub use translate::render_draw_stream;

use crate::core::config::GuiConfig;
use crate::render::device::GraphicsDevice;
use crate::render::RenderResult;
use crate::ui::backend::GuiLibrary;
use crate::ui::input::{DpiScale, FrameInput, FrameState};
use crate::ui::rendering::TextureId;

/// Renders an immediate-mode GUI through a [`GraphicsDevice`].
///
/// Owns the GUI library and every GPU object it draws with. The device is
/// borrowed per call; it must be the context the renderer was created on.
pub struct GuiRenderer<D: GraphicsDevice, G: GuiLibrary> {
    gui: G,
    resources: DeviceResources<D>,
    frame: FrameState,
    default_delta: f32,
}

impl<D: GraphicsDevice, G: GuiLibrary> GuiRenderer<D, G> {
    /// Create GPU resources, push the initial display state and open the first frame
    pub fn new(
        device: &D,
        mut gui: G,
        framebuffer_width: u32,
        framebuffer_height: u32,
        dpi: DpiScale,
        config: &GuiConfig,
    ) -> RenderResult<Self> {
        let resources = DeviceResources::create(device, &mut gui, config)?;

        let mut renderer = Self {
            gui,
            resources,
            frame: FrameState::new(framebuffer_width, framebuffer_height, dpi),
            default_delta: config.default_delta_seconds,
        };
        renderer.push_display(renderer.default_delta);
        renderer.gui.begin_frame();
        renderer.frame.frame_begun = true;

        log::info!(
            "GUI renderer initialized: {}x{} framebuffer, DPI scale {}x{}",
            framebuffer_width,
            framebuffer_height,
            dpi.x,
            dpi.y
        );
        Ok(renderer)
    }

    /// Sync display and pointer state from `input` and open a new frame.
    ///
    /// An open frame is finalized first and its draw data discarded. The DPI
    /// scale is recomputed from `input` every call. Build the frame's UI with
    /// the returned builder, then call [`Self::render`].
    pub fn update(&mut self, input: &FrameInput, delta_seconds: f32) -> &mut G::Frame {
        if self.frame.frame_begun {
            drop(self.gui.end_frame());
        }

        self.frame.refresh(input);
        self.push_display(delta_seconds);
        self.gui.set_pointer(&self.frame.pointer_input(input));

        self.frame.frame_begun = true;
        self.gui.begin_frame()
    }

    /// Finalize the open frame and draw it.
    ///
    /// Does nothing when no frame is open. A stream without command lists
    /// returns without touching GL state.
    pub fn render(&mut self, device: &D) -> RenderResult<()> {
        if !self.frame.frame_begun {
            return Ok(());
        }
        self.frame.frame_begun = false;

        let stream = self.gui.end_frame();
        if stream.is_empty() {
            return Ok(());
        }
        render_draw_stream(device, &self.resources, &self.frame, &stream)
    }

    /// Record a new framebuffer size and push it to the GUI library
    pub fn resize(&mut self, framebuffer_width: u32, framebuffer_height: u32) {
        self.frame.framebuffer_width = framebuffer_width;
        self.frame.framebuffer_height = framebuffer_height;
        self.push_display(self.default_delta);
    }

    /// Delete every GPU object. Call before the GL context goes away.
    pub fn destroy(self, device: &D) {
        self.resources.destroy(device);
        log::info!("GUI renderer resources destroyed");
    }

    /// Current framebuffer geometry and frame flag
    pub fn frame_state(&self) -> &FrameState {
        &self.frame
    }

    /// Whether a GUI frame is open
    pub fn is_frame_begun(&self) -> bool {
        self.frame.frame_begun
    }

    /// Id of the font atlas texture
    pub fn font_texture_id(&self, device: &D) -> TextureId {
        device.texture_id(self.resources.font_texture)
    }

    /// The GUI library
    pub fn gui(&self) -> &G {
        &self.gui
    }

    /// The GUI library, mutably
    pub fn gui_mut(&mut self) -> &mut G {
        &mut self.gui
    }

    fn push_display(&mut self, delta_seconds: f32) {
        let delta = if delta_seconds > 0.0 {
            delta_seconds
        } else {
            self.default_delta
        };
        self.gui.set_display(&self.frame.display_metrics(delta));
    }
}
