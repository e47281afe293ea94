use crate::camera::{Camera3d, Frustum};
use crate::event::WindowEvent;
use glamx::Mat4;

/// A camera that cannot move, looking down the negative z axis.
///
/// The projection is computed once from the frustum given at construction time
/// and is kept as-is when the framebuffer is resized.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedFrustum3d {
    frustum: Frustum,
    proj: Mat4,
}

impl FixedFrustum3d {
    /// Creates a camera from an explicit frustum.
    pub fn new(frustum: Frustum) -> FixedFrustum3d {
        FixedFrustum3d {
            frustum,
            proj: frustum.to_matrix(),
        }
    }

    /// Creates a camera with a symmetric frustum whose aspect ratio is `width / height`.
    pub fn with_fov(fov_degrees: f32, width: u32, height: u32, znear: f32, zfar: f32) -> Self {
        let aspect = width as f32 / height.max(1) as f32;
        Self::new(Frustum::from_fov(fov_degrees, aspect, znear, zfar))
    }

    /// The frustum this camera was built from.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }
}

impl Camera3d for FixedFrustum3d {
    fn handle_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::FramebufferSize(w, h) = *event {
            log::debug!("framebuffer resized to {}x{}, projection unchanged", w, h);
        }
    }

    #[inline]
    fn transformation(&self) -> Mat4 {
        self.proj
    }

    fn clip_planes(&self) -> (f32, f32) {
        (self.frustum.znear, self.frustum.zfar)
    }
}
