//! Demo application: triangle scene with a GUI panel on top

use std::error::Error;

use gl_engine::core::config::ApplicationConfig;
use gl_engine::foundation::time::Timer;
use gl_engine::render::GraphicsDevice;
use gl_engine::ui::imgui_backend::create_context;
use gl_engine::ui::GuiRenderer;
use glfw::{Action, Key, WindowEvent};

use crate::triangle::TriangleScene;
use crate::window::Window;

pub struct TriangleApp {
    window: Window,
    gl: glow::Context,
    gui: GuiRenderer<glow::Context, imgui::Context>,
    triangle: TriangleScene<glow::Context>,
    timer: Timer,
}

impl TriangleApp {
    pub fn new(config: &ApplicationConfig) -> Result<Self, Box<dyn Error>> {
        log::info!("Creating window...");
        let mut window = Window::new(&config.window)?;
        let gl = window.load_gl();
        gl.clear_color(config.window.clear_color);

        let dpi = window.monitor_dpi_scale();
        let (fb_width, fb_height) = window.get_framebuffer_size();
        let gui = GuiRenderer::new(&gl, create_context(&config.gui), fb_width, fb_height, dpi, &config.gui)?;

        let triangle = TriangleScene::new(&gl)?;

        Ok(Self {
            window,
            gl,
            gui,
            triangle,
            timer: Timer::new(),
        })
    }

    /// Run until the window closes, then release GPU resources
    pub fn run(mut self) -> Result<(), Box<dyn Error>> {
        log::info!("Starting triangle demo...");
        let result = self.main_loop();
        self.shutdown();
        result
    }

    fn main_loop(&mut self) -> Result<(), Box<dyn Error>> {
        while !self.window.should_close() {
            for event in self.window.poll_events() {
                match event {
                    WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                        self.window.set_should_close(true);
                    }
                    WindowEvent::FramebufferSize(width, height) => {
                        self.gl.viewport(0, 0, width, height);
                        self.gui.resize(width.max(0) as u32, height.max(0) as u32);
                    }
                    _ => {}
                }
            }

            let delta = self.timer.tick();
            let input = self.window.frame_input();

            let ui = self.gui.update(&input, delta);
            ui.window("Sample Window").build(|| {
                ui.text("This is a UI window with a close button and background panel.");
                if ui.button("Close") {
                    log::info!("Close button clicked!");
                }
            });

            self.triangle.draw(&self.gl, input.framebuffer_size);
            self.gui.render(&self.gl)?;
            self.window.swap_buffers();
        }

        log::info!(
            "Triangle demo finished after {} frames ({:.1} fps average)",
            self.timer.frame_count(),
            self.timer.average_fps()
        );
        Ok(())
    }

    fn shutdown(self) {
        let Self { gl, gui, triangle, .. } = self;
        triangle.destroy(&gl);
        gui.destroy(&gl);
    }
}
