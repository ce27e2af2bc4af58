//! Math utilities and types
//!
//! Thin aliases over `nalgebra` plus the projection used by screen-space overlays.

pub use nalgebra::Matrix4;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Orthographic projection for a top-left-origin pixel space.
///
/// Maps `[0, width] x [0, height]` onto clip space with Y inverted, so pixel
/// `(0, 0)` lands on clip `(-1, 1)` and `(width, height)` on clip `(1, -1)`.
/// Depth range is `[-1, 1]`.
pub fn orthographic_top_left(width: f32, height: f32) -> Mat4 {
    Mat4::new_orthographic(0.0, width, height, 0.0, -1.0, 1.0)
}

/// Column-major copy of a matrix, as expected by `glUniformMatrix4fv` without transpose.
pub fn to_column_major(matrix: &Mat4) -> [f32; 16] {
    let mut out = [0.0; 16];
    out.copy_from_slice(matrix.as_slice());
    out
}
