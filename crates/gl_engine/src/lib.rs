//! # GL Engine
//!
//! A small OpenGL 3.3 engine crate whose centerpiece is an immediate-mode GUI
//! render bridge.
//!
//! ## Features
//!
//! - **GUI Rendering**: replays a GUI library's draw lists with per-command clipping
//! - **DPI Awareness**: logical GUI coordinates, physical framebuffer pixels
//! - **Device Seam**: all GL access goes through [`render::GraphicsDevice`]
//! - **Dear ImGui**: optional adapter behind the `imgui` feature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gl_engine::prelude::*;
//!
//! let gui = gl_engine::ui::imgui_backend::create_context(&config.gui);
//! let mut renderer = GuiRenderer::new(&gl, gui, fb_width, fb_height, dpi, &config.gui)?;
//!
//! loop {
//!     let ui = renderer.update(&window.frame_input(), timer.tick());
//!     ui.text("Hello");
//!     renderer.render(&gl)?;
//!     window.swap_buffers();
//! }
//!
//! renderer.destroy(&gl);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

// Core engine modules
pub mod config;
pub mod core;
pub mod foundation;
pub mod render;
pub mod ui;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{ApplicationConfig, Config, ConfigSource, GuiConfig, LoggingConfig, WindowConfig},
        foundation::{
            math::Mat4,
            time::Timer,
        },
        render::{check_gl_errors, GraphicsDevice, RenderError, RenderResult},
        ui::{DpiScale, FrameInput, GuiLibrary, GuiRenderer},
    };
}
