use crate::camera::Camera3d;
use crate::context::Context;

/// Trait for implementing custom rendering logic.
///
/// A renderer is invoked once per frame, inside the render pass that the window
/// opened after clearing the color and depth buffers.
pub trait Renderer3d {
    /// Records the draw calls of this renderer.
    ///
    /// # Arguments
    /// * `camera` - The camera being used for rendering
    /// * `context` - The GPU context, used to upload per-frame data
    /// * `render_pass` - The active wgpu render pass to draw into
    fn render(
        &mut self,
        camera: &dyn Camera3d,
        context: &Context,
        render_pass: &mut wgpu::RenderPass<'_>,
    );
}
