use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current keyboard state for the window.
///
/// Holds "is down" information; per-frame transitions are recorded into an
/// `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear the "down" set. Avoids stuck keys
                    // (and a runaway camera) when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => {
                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            repeat: false,
        }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Released,
            repeat: false,
        }
    }

    #[test]
    fn press_release_transitions() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::W));
        assert!(state.key_down(Key::W));
        assert!(frame.keys_pressed.contains(&Key::W));

        frame.clear();

        state.apply_event(&mut frame, release(Key::W));
        assert!(!state.key_down(Key::W));
        assert!(frame.keys_released.contains(&Key::W));
        assert!(frame.keys_pressed.is_empty());
    }

    #[test]
    fn repeat_press_is_not_a_new_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::Space));
        frame.clear();

        // OS key-repeat delivers another Pressed while the key is held.
        state.apply_event(&mut frame, press(Key::Space));
        assert!(state.key_down(Key::Space));
        assert!(frame.keys_pressed.is_empty());
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::W));
        state.apply_event(&mut frame, press(Key::D));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.focused);
        assert!(state.keys_down.is_empty());
    }
}
