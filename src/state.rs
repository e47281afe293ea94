//! The mutable state of the animated cube.

use crate::config::DemoConfig;
use glamx::{Mat4, Vec3};

/// Position and rotation of the cube.
///
/// Written by the input handler while events are dispatched, read once per frame
/// to build the object transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubeState {
    /// Translation applied by the user, before the camera offset.
    pub position: Vec3,
    /// Current rotation angle, in degrees. Never wrapped.
    pub angle: f32,
    camera_offset: Vec3,
    rotation_axis: Vec3,
    rotation_step: f32,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::from_config(&DemoConfig::default())
    }
}

impl CubeState {
    /// A cube at the origin, not rotated yet.
    ///
    /// `rotation_axis` must be non-zero; it is normalized here.
    pub fn new(camera_offset: Vec3, rotation_axis: Vec3, rotation_step: f32) -> CubeState {
        CubeState {
            position: Vec3::ZERO,
            angle: 0.0,
            camera_offset,
            rotation_axis: rotation_axis.normalize(),
            rotation_step,
        }
    }

    /// A cube animated with the offsets and steps of `config`.
    pub fn from_config(config: &DemoConfig) -> CubeState {
        Self::new(
            config.camera_offset,
            config.rotation_axis,
            config.rotation_step,
        )
    }

    /// Moves the cube by `delta`. The position is not clamped.
    #[inline]
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Advances the rotation by one frame.
    #[inline]
    pub fn advance_frame(&mut self) {
        self.angle += self.rotation_step;
    }

    /// The object transform: position, then camera offset, then rotation.
    pub fn model_transform(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_translation(self.camera_offset)
            * Mat4::from_axis_angle(self.rotation_axis, self.angle.to_radians())
    }
}
