//! Structures responsible for drawing into the window.

pub use self::cube_renderer::CubeRenderer;
pub use self::renderer::Renderer3d;

pub mod cube_renderer;
mod renderer;
