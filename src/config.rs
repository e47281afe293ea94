//! Demo configuration.

use crate::color::{self, Color};
use crate::window::CanvasSetup;
use glamx::Vec3;

/// Initial window width, in logical pixels.
pub const DEFAULT_WIDTH: u32 = 1800;
/// Initial window height, in logical pixels.
pub const DEFAULT_HEIGHT: u32 = 1200;

/// Everything the demo needs to open its window and animate the cube.
///
/// The defaults reproduce the classic demo: an 80° frustum computed from a
/// 1800x1200 window, 0.1 units per key press and 0.7° of rotation per frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemoConfig {
    /// The window title.
    pub title: String,
    /// Initial window width. Also fixes the projection aspect ratio.
    pub width: u32,
    /// Initial window height. Also fixes the projection aspect ratio.
    pub height: u32,
    /// Surface options.
    pub canvas: CanvasSetup,
    /// Vertical field of view, in degrees.
    pub fov: f32,
    /// Distance to the near clipping plane.
    pub znear: f32,
    /// Distance to the far clipping plane.
    pub zfar: f32,
    /// Distance the cube moves for each key press or repeat.
    pub move_step: f32,
    /// Degrees added to the cube angle after each frame.
    pub rotation_step: f32,
    /// Axis the cube spins around. Normalized before use.
    pub rotation_axis: Vec3,
    /// Translation applied after the cube position, moving it in front of the camera.
    pub camera_offset: Vec3,
    /// Clear color of each frame.
    pub background: Color,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            title: "spincube".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            canvas: CanvasSetup::default(),
            fov: 80.0,
            znear: 0.1,
            zfar: 100.0,
            move_step: 0.1,
            rotation_step: 0.7,
            rotation_axis: Vec3::new(1.0, 1.0, 0.0),
            camera_offset: Vec3::new(0.0, 0.0, -5.0),
            background: color::CHARCOAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_demo() {
        let config = DemoConfig::default();

        assert_eq!((config.width, config.height), (1800, 1200));
        assert_eq!(config.width as f32 / config.height as f32, 1.5);
        assert_eq!(config.fov, 80.0);
        assert_eq!((config.znear, config.zfar), (0.1, 100.0));
        assert_eq!(config.move_step, 0.1);
        assert_eq!(config.rotation_step, 0.7);
        assert!(config.canvas.vsync);
        assert!(config.canvas.resizable);
    }
}
