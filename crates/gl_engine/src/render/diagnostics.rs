//! GL error queue draining

use super::device::GraphicsDevice;

/// Upper bound on codes read per check; a lost context can report errors forever.
const MAX_ERRORS_PER_CHECK: usize = 32;

/// Log every pending GL error as `OpenGL Error in <context>: <code>`.
///
/// Returns how many errors were drained.
pub fn check_gl_errors<D: GraphicsDevice>(device: &D, context: &str) -> usize {
    let mut count = 0;
    while count < MAX_ERRORS_PER_CHECK {
        let Some(code) = device.next_error() else {
            break;
        };
        log::error!("OpenGL Error in {}: {:#06x}", context, code);
        count += 1;
    }
    count
}
