use std::collections::HashSet;

use racer_core::player_inputs::{Control, InputEvent, InputState};
use winit::event::{ElementState, VirtualKeyCode};

// Input configuration
pub fn control_for_key(key: VirtualKeyCode) -> Option<Control> {
    match key {
        VirtualKeyCode::Up | VirtualKeyCode::W => Some(Control::Forward),
        VirtualKeyCode::Down | VirtualKeyCode::S => Some(Control::Backward),
        VirtualKeyCode::Left | VirtualKeyCode::A => Some(Control::Left),
        VirtualKeyCode::Right | VirtualKeyCode::D => Some(Control::Right),
        VirtualKeyCode::Space => Some(Control::Brake),
        _ => None,
    }
}

#[derive(Default)]
pub struct KeyboardControls {
    pressed_keys: HashSet<VirtualKeyCode>,
    state: InputState,
}

impl KeyboardControls {
    pub fn on_key(
        &mut self,
        key: VirtualKeyCode,
        element_state: ElementState,
    ) -> Option<InputEvent> {
        let control = control_for_key(key)?;

        let event = match element_state {
            ElementState::Pressed => {
                // winit sends duplicate keydown events while a key is held
                if !self.pressed_keys.insert(key) {
                    return None;
                }
                InputEvent::Pressed(control)
            }
            ElementState::Released => {
                self.pressed_keys.remove(&key);
                // W and Up both drive forward; only let go once neither is down
                if self
                    .pressed_keys
                    .iter()
                    .any(|other| control_for_key(*other) == Some(control))
                {
                    return None;
                }
                InputEvent::Released(control)
            }
        };

        self.state.apply(event);
        Some(event)
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn clear(&mut self) {
        self.pressed_keys.clear();
        self.state.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_arrows_and_wasd() {
        assert_eq!(control_for_key(VirtualKeyCode::W), Some(Control::Forward));
        assert_eq!(control_for_key(VirtualKeyCode::Up), Some(Control::Forward));
        assert_eq!(control_for_key(VirtualKeyCode::S), Some(Control::Backward));
        assert_eq!(control_for_key(VirtualKeyCode::A), Some(Control::Left));
        assert_eq!(control_for_key(VirtualKeyCode::Right), Some(Control::Right));
        assert_eq!(control_for_key(VirtualKeyCode::Space), Some(Control::Brake));
        assert_eq!(control_for_key(VirtualKeyCode::Q), None);
    }

    #[test]
    fn key_repeat_is_ignored() {
        let mut keyboard = KeyboardControls::default();
        assert_eq!(
            keyboard.on_key(VirtualKeyCode::W, ElementState::Pressed),
            Some(InputEvent::Pressed(Control::Forward))
        );
        assert_eq!(keyboard.on_key(VirtualKeyCode::W, ElementState::Pressed), None);
        assert!(keyboard.state().forward);

        keyboard.on_key(VirtualKeyCode::W, ElementState::Released);
        assert!(!keyboard.state().forward);
    }

    #[test]
    fn aliased_keys_release_together() {
        let mut keyboard = KeyboardControls::default();
        keyboard.on_key(VirtualKeyCode::A, ElementState::Pressed);
        keyboard.on_key(VirtualKeyCode::Left, ElementState::Pressed);

        keyboard.on_key(VirtualKeyCode::A, ElementState::Released);
        assert!(keyboard.state().left);

        keyboard.on_key(VirtualKeyCode::Left, ElementState::Released);
        assert!(!keyboard.state().left);
    }
}
