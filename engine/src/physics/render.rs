//! Render-side output of the physics core
//!
//! The physics frame is Z-up with gravity along -Z. Renderers that expect a
//! Y-up frame get a single constant basis change, applied here and nowhere
//! else; integration and collision code never see it.

use glam::{Mat4, Vec4};
use serde::{Deserialize, Serialize};

/// Maps Z-up physics coordinates to a Y-up render frame: x -> x, z -> y, y -> -z.
pub const Z_UP_TO_Y_UP: Mat4 = Mat4::from_cols(
    Vec4::new(1.0, 0.0, 0.0, 0.0),
    Vec4::new(0.0, 0.0, -1.0, 0.0),
    Vec4::new(0.0, 1.0, 0.0, 0.0),
    Vec4::new(0.0, 0.0, 0.0, 1.0),
);

/// Up-axis convention of the consuming renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisConvention {
    /// Same frame as the physics core
    #[default]
    ZUp,
    /// Y-up renderer; transforms are prefixed with [`Z_UP_TO_Y_UP`]
    YUp,
}

impl AxisConvention {
    /// Basis change applied as the outermost factor of a render transform.
    pub fn basis(self) -> Mat4 {
        match self {
            AxisConvention::ZUp => Mat4::IDENTITY,
            AxisConvention::YUp => Z_UP_TO_Y_UP,
        }
    }
}

/// Column-major 4x4 world transform, ready for a uniform or instance buffer.
///
/// Layout: 4 columns of vec4<f32> = 64 bytes, matching `mat4x4<f32>`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderTransform {
    pub cols: [[f32; 4]; 4],
}

static_assertions::assert_eq_size!(RenderTransform, [u8; 64]);

impl RenderTransform {
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.cols)
    }
}

impl From<Mat4> for RenderTransform {
    fn from(m: Mat4) -> Self {
        Self {
            cols: m.to_cols_array_2d(),
        }
    }
}
