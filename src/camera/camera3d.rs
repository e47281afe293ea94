use crate::event::WindowEvent;
use glamx::Mat4;

/// Trait that all camera implementations must implement.
///
/// Cameras control the projection applied to the scene. The renderer multiplies
/// [`transformation()`](Self::transformation) with the object transform to obtain
/// the matrix uploaded to the GPU.
pub trait Camera3d {
    /// Handles window events to update camera state.
    ///
    /// This is called for each event polled from the window.
    fn handle_event(&mut self, event: &WindowEvent);

    /// Returns the combined projection and view transformation matrix.
    ///
    /// This matrix transforms points from world coordinates to clip space, with depth
    /// mapped to [0, 1].
    fn transformation(&self) -> Mat4;

    /// Returns the near and far clipping plane distances.
    fn clip_planes(&self) -> (f32, f32);
}
