use serde::{Deserialize, Serialize};

// The five driving intents, as sampled once per frame by whatever is capturing
// keyboard/touch/gamepad input
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub brake: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Forward,
    Backward,
    Left,
    Right,
    Brake,
}

// A single press/release of one control; the capture side turns raw device
// events into these
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Pressed(Control),
    Released(Control),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineStatus {
    Accelerating,
    Reversing,
    Neutral,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SteerStatus {
    TurningLeft,
    TurningRight,
    Straight,
}

impl InputState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_held(&self, control: Control) -> bool {
        match control {
            Control::Forward => self.forward,
            Control::Backward => self.backward,
            Control::Left => self.left,
            Control::Right => self.right,
            Control::Brake => self.brake,
        }
    }

    pub fn set(&mut self, control: Control, held: bool) {
        let slot = match control {
            Control::Forward => &mut self.forward,
            Control::Backward => &mut self.backward,
            Control::Left => &mut self.left,
            Control::Right => &mut self.right,
            Control::Brake => &mut self.brake,
        };
        *slot = held;
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pressed(control) => self.set(control, true),
            InputEvent::Released(control) => self.set(control, false),
        }
    }

    // an intent is held in the merged state if either source holds it
    pub fn merge(&self, other: &InputState) -> InputState {
        InputState {
            forward: self.forward || other.forward,
            backward: self.backward || other.backward,
            left: self.left || other.left,
            right: self.right || other.right,
            brake: self.brake || other.brake,
        }
    }

    /// Forward wins when forward and backward are both held.
    pub fn engine_status(&self) -> EngineStatus {
        if self.forward {
            EngineStatus::Accelerating
        } else if self.backward {
            EngineStatus::Reversing
        } else {
            EngineStatus::Neutral
        }
    }

    /// Left wins when left and right are both held.
    pub fn steer_status(&self) -> SteerStatus {
        if self.left {
            SteerStatus::TurningLeft
        } else if self.right {
            SteerStatus::TurningRight
        } else {
            SteerStatus::Straight
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_takes_precedence_over_backward() {
        let input = InputState {
            forward: true,
            backward: true,
            ..Default::default()
        };
        assert_eq!(input.engine_status(), EngineStatus::Accelerating);

        let input = InputState {
            backward: true,
            ..Default::default()
        };
        assert_eq!(input.engine_status(), EngineStatus::Reversing);
        assert_eq!(InputState::default().engine_status(), EngineStatus::Neutral);
    }

    #[test]
    fn left_takes_precedence_over_right() {
        let input = InputState {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.steer_status(), SteerStatus::TurningLeft);

        let input = InputState {
            right: true,
            ..Default::default()
        };
        assert_eq!(input.steer_status(), SteerStatus::TurningRight);
    }

    #[test]
    fn press_and_release_events() {
        let mut input = InputState::default();
        input.apply(InputEvent::Pressed(Control::Brake));
        input.apply(InputEvent::Pressed(Control::Left));
        assert!(input.brake && input.left);

        input.apply(InputEvent::Released(Control::Brake));
        assert!(!input.brake);
        assert!(input.is_held(Control::Left));

        input.clear();
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn merge_is_a_union_of_intents() {
        let keyboard = InputState {
            forward: true,
            ..Default::default()
        };
        let gamepad = InputState {
            right: true,
            ..Default::default()
        };
        let merged = keyboard.merge(&gamepad);
        assert!(merged.forward && merged.right);
        assert!(!merged.left && !merged.backward && !merged.brake);
    }

    #[test]
    fn missing_intents_deserialize_as_released() {
        let input: InputState = serde_yaml::from_str("forward: true\nleft: true\n").unwrap();
        assert_eq!(
            input,
            InputState {
                forward: true,
                left: true,
                ..Default::default()
            }
        );
    }
}
