use glamx::{Mat4, Vec4};

/// A truncated-pyramid viewing volume.
///
/// The bounds `left`, `right`, `bottom` and `top` are measured on the near plane,
/// in view space, following the usual `glFrustum` conventions.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frustum {
    /// Left bound on the near plane.
    pub left: f32,
    /// Right bound on the near plane.
    pub right: f32,
    /// Bottom bound on the near plane.
    pub bottom: f32,
    /// Top bound on the near plane.
    pub top: f32,
    /// Distance to the near clipping plane.
    pub znear: f32,
    /// Distance to the far clipping plane.
    pub zfar: f32,
}

impl Frustum {
    /// Builds a symmetric frustum from a vertical field of view.
    ///
    /// # Arguments
    /// * `fov_degrees` - The full vertical field of view, in degrees
    /// * `aspect` - Width divided by height
    /// * `znear` - Distance to the near plane
    /// * `zfar` - Distance to the far plane
    pub fn from_fov(fov_degrees: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        let top = (fov_degrees / 2.0).to_radians().tan() * znear;
        let right = top * aspect;

        Frustum {
            left: -right,
            right,
            bottom: -top,
            top,
            znear,
            zfar,
        }
    }

    /// The right-handed perspective matrix for this frustum.
    ///
    /// Points at `-znear` along the view axis land at depth 0 and points at `-zfar`
    /// at depth 1, as expected by wgpu.
    pub fn to_matrix(&self) -> Mat4 {
        let Frustum {
            left: l,
            right: r,
            bottom: b,
            top: t,
            znear: n,
            zfar: f,
        } = *self;

        Mat4::from_cols(
            Vec4::new(2.0 * n / (r - l), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * n / (t - b), 0.0, 0.0),
            Vec4::new((r + l) / (r - l), (t + b) / (t - b), -f / (f - n), -1.0),
            Vec4::new(0.0, 0.0, -f * n / (f - n), 0.0),
        )
    }
}
