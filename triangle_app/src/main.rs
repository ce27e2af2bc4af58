//! Triangle demo application
//!
//! Draws a vertex-colored triangle with an ImGui panel on top of it, exercising
//! the engine's GUI renderer.

mod app;
mod triangle;
mod window;

use gl_engine::core::config::ApplicationConfig;
use gl_engine::foundation::logging;

use app::TriangleApp;

const CONFIG_PATH: &str = "triangle_app.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic hook for better error reporting
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC occurred: {:?}", panic_info);

        if let Some(location) = panic_info.location() {
            eprintln!("Panic location: {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    let (config, source) = ApplicationConfig::load_or_default(CONFIG_PATH)?;
    logging::init(&config.logging)?;
    log::info!("{}", source);

    log::info!("Starting Opengl engine triangle demo");

    let result = TriangleApp::new(&config).and_then(TriangleApp::run);
    match result {
        Ok(()) => {
            log::info!("Triangle demo finished successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Application error: {}", e);
            Err(e)
        }
    }
}
