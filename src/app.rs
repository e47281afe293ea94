//! The demo render loop.

use glamx::Mat4;

use crate::camera::{Camera3d, FixedFrustum3d};
use crate::config::DemoConfig;
use crate::controls::{ControlResponse, Controls};
use crate::event::WindowEvent;
use crate::renderer::CubeRenderer;
use crate::state::CubeState;
use crate::window::Window;

/// Something the demo loop can draw the cube into and read events from.
pub trait FrameTarget {
    /// Whether the loop should stop before the next frame.
    fn should_close(&self) -> bool;
    /// Requests the loop to stop.
    fn close(&mut self);
    /// Draws the cube placed by `model`. Returns `true` if a frame was presented.
    fn draw(&mut self, model: Mat4, camera: &dyn Camera3d) -> bool;
    /// Returns the events received since the last call.
    fn poll_events(&mut self) -> Vec<WindowEvent>;
}

/// A window paired with the renderer drawing the cube in it.
pub struct CubeWindow {
    window: Window,
    renderer: CubeRenderer,
}

impl CubeWindow {
    /// Wraps `window` and creates a cube renderer on its GPU context.
    pub fn new(window: Window) -> CubeWindow {
        let renderer = CubeRenderer::new(window.context());
        CubeWindow { window, renderer }
    }
}

impl FrameTarget for CubeWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn close(&mut self) {
        self.window.close()
    }

    fn draw(&mut self, model: Mat4, camera: &dyn Camera3d) -> bool {
        self.renderer.set_model(model);
        self.window.render_3d(&mut self.renderer, camera)
    }

    fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.window.poll_events()
    }
}

/// Runs frames on `target` until it is closed.
///
/// Each iteration draws the cube with the current state, then dispatches the
/// pending events to the camera and the controls, then advances the rotation.
/// The rotation only advances on frames that were presented, so a window that
/// cannot present (e.g. minimized) does not spin the cube at CPU speed.
pub fn run_frames<T: FrameTarget + ?Sized>(
    target: &mut T,
    camera: &mut dyn Camera3d,
    controls: &Controls,
    state: &mut CubeState,
) {
    while !target.should_close() {
        let presented = target.draw(state.model_transform(), camera);

        for event in target.poll_events() {
            camera.handle_event(&event);

            if controls.handle_event(state, &event) == ControlResponse::CloseRequested {
                log::info!("escape pressed, closing");
                target.close();
            }
        }

        if presented {
            state.advance_frame();
        }
    }
}

/// Opens the window and animates the cube until the window is closed.
///
/// # Errors
/// Fails if the window or the GPU cannot be initialized. Once the loop runs, it
/// only ends through the close flag.
pub async fn run(config: DemoConfig) -> anyhow::Result<()> {
    let mut window =
        Window::new_with_setup(&config.title, config.width, config.height, config.canvas).await?;
    window.set_background_color(config.background);

    let mut target = CubeWindow::new(window);
    let mut camera = FixedFrustum3d::with_fov(
        config.fov,
        config.width,
        config.height,
        config.znear,
        config.zfar,
    );
    let controls = Controls::new(config.move_step);
    let mut state = CubeState::from_config(&config);

    run_frames(&mut target, &mut camera, &controls, &mut state);

    log::info!("window closed after reaching {:.1}°", state.angle);
    Ok(())
}
