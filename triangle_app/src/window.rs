//! Window management using GLFW
//!
//! Creates an OpenGL 3.3 core window and turns GLFW's polled state into the
//! per-frame snapshot the GUI renderer consumes.

use gl_engine::core::config::WindowConfig;
use gl_engine::ui::{DpiScale, FrameInput};
use glfw::Context as _;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("GLFW initialization failed")]
    InitializationFailed,

    #[error("Window creation failed")]
    CreationFailed,

    #[error("GLFW error: {0}")]
    GlfwError(String),
}

pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window with a current OpenGL context
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    scroll: [f32; 2],
}

impl Window {
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors).map_err(|_| WindowError::InitializationFailed)?;

        let (major, minor) = config.gl_version;
        glfw.window_hint(glfw::WindowHint::ContextVersion(major, minor));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(config.forward_compatible));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();
        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_scroll_polling(true);

        glfw.set_swap_interval(if config.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        log::info!("Created {}x{} window '{}' (OpenGL {}.{} core)", config.width, config.height, config.title, major, minor);

        Ok(Self {
            glfw,
            window,
            events,
            scroll: [0.0, 0.0],
        })
    }

    /// Load OpenGL function pointers for this window's context
    pub fn load_gl(&mut self) -> glow::Context {
        // SAFETY: the context was made current in `new` and lives as long as the window
        unsafe { glow::Context::from_loader_function(|symbol| self.window.get_proc_address(symbol) as *const _) }
    }

    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Poll GLFW and return this frame's events; scroll is accumulated for [`Self::frame_input`]
    pub fn poll_events(&mut self) -> Vec<glfw::WindowEvent> {
        self.glfw.poll_events();

        let events: Vec<_> = glfw::flush_messages(&self.events).map(|(_, event)| event).collect();
        for event in &events {
            if let glfw::WindowEvent::Scroll(x, y) = event {
                self.scroll[0] += *x as f32;
                self.scroll[1] += *y as f32;
            }
        }
        events
    }

    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    pub fn get_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width.max(0) as u32, height.max(0) as u32)
    }

    pub fn get_framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width.max(0) as u32, height.max(0) as u32)
    }

    /// Snapshot for the GUI renderer; consumes the accumulated scroll
    pub fn frame_input(&mut self) -> FrameInput {
        let (x, y) = self.window.get_cursor_pos();
        let pressed = |button| self.window.get_mouse_button(button) == glfw::Action::Press;

        FrameInput {
            framebuffer_size: self.get_framebuffer_size(),
            client_size: self.get_size(),
            cursor: [x as f32, y as f32],
            buttons: [
                pressed(glfw::MouseButton::Button1),
                pressed(glfw::MouseButton::Button2),
                pressed(glfw::MouseButton::Button3),
            ],
            scroll: std::mem::take(&mut self.scroll),
        }
    }

    /// Content scale of the primary monitor, or 1.0 if it can't be queried
    pub fn monitor_dpi_scale(&mut self) -> DpiScale {
        let queried = self
            .glfw
            .with_primary_monitor(|_, monitor| monitor.map(|monitor| monitor.get_content_scale()));
        DpiScale::resolve(queried)
    }
}
