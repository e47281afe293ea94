//! Keyboard controls moving the cube.

use crate::event::{Key, WindowEvent};
use crate::state::CubeState;
use glamx::Vec3;

/// Direction moved by each bound key, scaled by the move step.
const KEY_DIRECTIONS: [(Key, Vec3); 6] = [
    (Key::W, Vec3::Z),
    (Key::S, Vec3::NEG_Z),
    (Key::A, Vec3::NEG_X),
    (Key::D, Vec3::X),
    (Key::Q, Vec3::Y),
    (Key::E, Vec3::NEG_Y),
];

/// What the controls did with an event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ControlResponse {
    /// The event is not bound to anything.
    Ignored,
    /// The cube was moved by the given delta.
    Moved(Vec3),
    /// The user asked to quit.
    CloseRequested,
}

/// Maps key presses to cube translations.
///
/// | Key | Effect |
/// |-----|--------|
/// | `W` / `S` | +z / -z |
/// | `A` / `D` | -x / +x |
/// | `Q` / `E` | +y / -y |
/// | `Escape` | close |
///
/// Only presses and auto-repeats are handled, releases are ignored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Controls {
    step: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Controls::new(0.1)
    }
}

impl Controls {
    /// Controls moving the cube by `step` units per press or repeat.
    pub fn new(step: f32) -> Controls {
        Controls { step }
    }

    /// The translation bound to `key`, if any.
    pub fn delta_for(&self, key: Key) -> Option<Vec3> {
        KEY_DIRECTIONS
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, dir)| *dir * self.step)
    }

    /// Applies `event` to `state`.
    pub fn handle_event(&self, state: &mut CubeState, event: &WindowEvent) -> ControlResponse {
        let WindowEvent::Key(key, action, _) = *event else {
            return ControlResponse::Ignored;
        };

        if !action.is_down() {
            return ControlResponse::Ignored;
        }

        if key == Key::Escape {
            return ControlResponse::CloseRequested;
        }

        match self.delta_for(key) {
            Some(delta) => {
                state.translate(delta);
                log::debug!("{:?} moved the cube to {:?}", key, state.position);
                ControlResponse::Moved(delta)
            }
            None => ControlResponse::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Action, Modifiers};

    fn press(key: Key) -> WindowEvent {
        WindowEvent::Key(key, Action::Press, Modifiers::empty())
    }

    fn apply(keys: &[Key]) -> CubeState {
        let controls = Controls::default();
        let mut state = CubeState::default();
        for key in keys {
            controls.handle_event(&mut state, &press(*key));
        }
        state
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1.0e-4,
            "{} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn forward_and_back_move_along_z() {
        let keys = [Key::W, Key::W, Key::S, Key::W, Key::W, Key::S, Key::W];
        let state = apply(&keys);

        assert_close(state.position.z, 0.1 * (5.0 - 2.0));
        assert_eq!(state.position.x, 0.0);
        assert_eq!(state.position.y, 0.0);
    }

    #[test]
    fn left_and_right_move_along_x() {
        let keys = [Key::A, Key::D, Key::D, Key::D, Key::A, Key::D];
        let state = apply(&keys);

        assert_close(state.position.x, 0.1 * (4.0 - 2.0));
    }

    #[test]
    fn up_and_down_move_along_y() {
        let keys = [Key::E, Key::E, Key::Q, Key::E];
        let state = apply(&keys);

        assert_close(state.position.y, 0.1 * (1.0 - 3.0));
    }

    #[test]
    fn long_sequences_accumulate() {
        let mut keys = vec![Key::W; 250];
        keys.extend(vec![Key::S; 40]);
        let state = apply(&keys);

        assert_close(state.position.z, 0.1 * 210.0);
    }

    #[test]
    fn repeats_move_and_releases_do_not() {
        let controls = Controls::default();
        let mut state = CubeState::default();

        let repeat = WindowEvent::Key(Key::D, Action::Repeat, Modifiers::empty());
        let release = WindowEvent::Key(Key::D, Action::Release, Modifiers::empty());

        assert_eq!(
            controls.handle_event(&mut state, &repeat),
            ControlResponse::Moved(Vec3::new(0.1, 0.0, 0.0))
        );
        assert_eq!(
            controls.handle_event(&mut state, &release),
            ControlResponse::Ignored
        );
        assert_close(state.position.x, 0.1);
    }

    #[test]
    fn only_escape_requests_close() {
        let controls = Controls::default();
        let mut state = CubeState::default();

        assert_eq!(
            controls.handle_event(&mut state, &press(Key::Escape)),
            ControlResponse::CloseRequested
        );

        for key in [
            Key::W,
            Key::A,
            Key::S,
            Key::D,
            Key::Q,
            Key::E,
            Key::Space,
            Key::Z,
            Key::Unknown,
        ] {
            assert_ne!(
                controls.handle_event(&mut state, &press(key)),
                ControlResponse::CloseRequested
            );
        }

        let release = WindowEvent::Key(Key::Escape, Action::Release, Modifiers::empty());
        assert_eq!(
            controls.handle_event(&mut state, &release),
            ControlResponse::Ignored
        );
    }

    #[test]
    fn unbound_keys_and_other_events_are_ignored() {
        let controls = Controls::default();
        let mut state = CubeState::default();

        assert_eq!(
            controls.handle_event(&mut state, &press(Key::X)),
            ControlResponse::Ignored
        );
        assert_eq!(
            controls.handle_event(&mut state, &WindowEvent::FramebufferSize(10, 10)),
            ControlResponse::Ignored
        );
        assert_eq!(state.position, Vec3::ZERO);
    }

    #[test]
    fn modifiers_do_not_change_the_step() {
        let controls = Controls::default();
        let mut state = CubeState::default();
        let shifted = WindowEvent::Key(Key::Q, Action::Press, Modifiers::Shift);

        controls.handle_event(&mut state, &shifted);
        assert_close(state.position.y, 0.1);
    }
}
