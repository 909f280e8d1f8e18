use gilrs::{Axis, Button};
use racer_core::player_inputs::InputState;

// A gamepad change as (button, value in [0, 1]) or (axis, value in [-1, 1])
pub type GamepadInput = Result<(Button, f32), (Axis, f32)>;

pub struct GamepadControls {
    deadzone: f32,
    throttle: bool,
    reverse: bool,
    handbrake: bool,
    stick_x: f32,
    dpad_left: bool,
    dpad_right: bool,
}

impl GamepadControls {
    pub fn new(deadzone: f32) -> GamepadControls {
        GamepadControls {
            deadzone,
            throttle: false,
            reverse: false,
            handbrake: false,
            stick_x: 0.0,
            dpad_left: false,
            dpad_right: false,
        }
    }

    pub fn on_input(&mut self, input: GamepadInput) {
        match input {
            Ok((button, value)) => {
                let held = value > 0.0;
                match button {
                    Button::RightTrigger2 => self.throttle = held,
                    Button::LeftTrigger2 => self.reverse = held,
                    Button::South => self.handbrake = held,
                    Button::DPadLeft => self.dpad_left = held,
                    Button::DPadRight => self.dpad_right = held,
                    _ => {}
                }
            }
            Err((Axis::LeftStickX, value)) => self.stick_x = value,
            Err(_) => {}
        }
    }

    pub fn state(&self) -> InputState {
        InputState {
            forward: self.throttle,
            backward: self.reverse,
            left: self.dpad_left || self.stick_x < -self.deadzone,
            right: self.dpad_right || self.stick_x > self.deadzone,
            brake: self.handbrake,
        }
    }

    pub fn clear(&mut self) {
        *self = GamepadControls::new(self.deadzone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers_drive_and_reverse() {
        let mut pad = GamepadControls::new(0.2);
        pad.on_input(Ok((Button::RightTrigger2, 0.4)));
        pad.on_input(Ok((Button::South, 1.0)));
        let state = pad.state();
        assert!(state.forward && state.brake && !state.backward);

        pad.on_input(Ok((Button::RightTrigger2, 0.0)));
        pad.on_input(Ok((Button::LeftTrigger2, 1.0)));
        let state = pad.state();
        assert!(!state.forward && state.backward);
    }

    #[test]
    fn stick_steers_outside_deadzone() {
        let mut pad = GamepadControls::new(0.2);
        pad.on_input(Err((Axis::LeftStickX, 0.1)));
        assert!(!pad.state().left && !pad.state().right);

        pad.on_input(Err((Axis::LeftStickX, -0.6)));
        assert!(pad.state().left);

        pad.on_input(Err((Axis::LeftStickX, 0.9)));
        assert!(pad.state().right && !pad.state().left);

        // other axes are ignored
        pad.on_input(Err((Axis::LeftStickY, -1.0)));
        assert!(pad.state().right);
    }

    #[test]
    fn dpad_steers_too() {
        let mut pad = GamepadControls::new(0.2);
        pad.on_input(Ok((Button::DPadLeft, 1.0)));
        assert!(pad.state().left);

        pad.clear();
        assert_eq!(pad.state(), InputState::default());
    }
}
