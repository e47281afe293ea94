use std::collections::VecDeque;

use spincube::app::{run_frames, FrameTarget};
use spincube::prelude::*;

fn key(key: Key, action: Action) -> WindowEvent {
    WindowEvent::Key(key, action, Modifiers::empty())
}

/// A headless frame target feeding one batch of events per frame.
struct ScriptedWindow {
    frames: VecDeque<Vec<WindowEvent>>,
    presenting: VecDeque<bool>,
    closed: bool,
    drawn: Vec<Mat4>,
}

impl ScriptedWindow {
    fn new(frames: Vec<Vec<WindowEvent>>) -> Self {
        ScriptedWindow {
            frames: frames.into(),
            presenting: VecDeque::new(),
            closed: false,
            drawn: Vec::new(),
        }
    }
}

impl FrameTarget for ScriptedWindow {
    fn should_close(&self) -> bool {
        self.closed
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn draw(&mut self, model: Mat4, camera: &dyn Camera3d) -> bool {
        self.drawn.push(camera.transformation() * model);
        self.presenting.pop_front().unwrap_or(true)
    }

    fn poll_events(&mut self) -> Vec<WindowEvent> {
        match self.frames.pop_front() {
            Some(events) => events,
            None => panic!("the loop kept running after the last scripted frame"),
        }
    }
}

fn replay(target: &mut ScriptedWindow) -> CubeState {
    let config = DemoConfig::default();
    let mut camera = FixedFrustum3d::with_fov(
        config.fov,
        config.width,
        config.height,
        config.znear,
        config.zfar,
    );
    let mut state = CubeState::from_config(&config);
    run_frames(target, &mut camera, &Controls::new(config.move_step), &mut state);
    state
}

#[test]
fn escape_after_moves_stops_the_loop() {
    let mut window = ScriptedWindow::new(vec![
        vec![key(Key::W, Action::Press), key(Key::W, Action::Release)],
        vec![key(Key::W, Action::Press)],
        vec![key(Key::W, Action::Release), key(Key::D, Action::Press)],
        vec![key(Key::Escape, Action::Press)],
        vec![key(Key::A, Action::Press)],
    ]);

    let state = replay(&mut window);

    assert!(window.closed);
    assert_eq!(window.drawn.len(), 4);
    assert_eq!(window.frames.len(), 1);
    assert!(state.position.abs_diff_eq(Vec3::new(0.1, 0.0, 0.2), 1.0e-6));
    assert!((state.angle - 0.7 * 4.0).abs() < 1.0e-4);
}

#[test]
fn held_key_repeats_accumulate() {
    let mut frames = vec![vec![key(Key::Q, Action::Press)]];
    for _ in 0..9 {
        frames.push(vec![key(Key::Q, Action::Repeat)]);
    }
    frames.push(vec![key(Key::Q, Action::Release)]);
    frames.push(vec![key(Key::Escape, Action::Press)]);
    let mut window = ScriptedWindow::new(frames);

    let state = replay(&mut window);

    assert!(window.closed);
    assert_eq!(window.drawn.len(), 12);
    assert!((state.position.y - 1.0).abs() < 1.0e-4);
    assert_eq!(state.position.x, 0.0);
    assert_eq!(state.position.z, 0.0);
}

#[test]
fn unpresented_frames_do_not_advance_the_rotation() {
    let mut window = ScriptedWindow::new(vec![
        vec![],
        vec![],
        vec![],
        vec![key(Key::Escape, Action::Press)],
    ]);
    window.presenting = VecDeque::from(vec![true, false, false, true]);

    let state = replay(&mut window);

    assert_eq!(window.drawn.len(), 4);
    assert!((state.angle - 0.7 * 2.0).abs() < 1.0e-4);
}

#[test]
fn each_frame_draws_the_current_state() {
    let mut window = ScriptedWindow::new(vec![
        vec![key(Key::D, Action::Press)],
        vec![key(Key::Escape, Action::Press)],
    ]);

    let _ = replay(&mut window);

    let config = DemoConfig::default();
    let camera = FixedFrustum3d::with_fov(
        config.fov,
        config.width,
        config.height,
        config.znear,
        config.zfar,
    );
    let mut expected = CubeState::from_config(&config);
    assert!(window.drawn[0].abs_diff_eq(camera.transformation() * expected.model_transform(), 1.0e-6));

    expected.translate(Vec3::new(0.1, 0.0, 0.0));
    expected.advance_frame();
    assert!(window.drawn[1].abs_diff_eq(camera.transformation() * expected.model_transform(), 1.0e-6));
}

#[test]
fn projected_cube_center_is_inside_the_view() {
    let config = DemoConfig::default();
    let camera = FixedFrustum3d::with_fov(
        config.fov,
        config.width,
        config.height,
        config.znear,
        config.zfar,
    );
    let state = CubeState::from_config(&config);

    let clip = camera
        .transformation()
        .project_point3(state.model_transform().transform_point3(Vec3::ZERO));

    assert!(clip.x.abs() < 1.0e-5);
    assert!(clip.y.abs() < 1.0e-5);
    assert!(clip.z > 0.0 && clip.z < 1.0);
}
