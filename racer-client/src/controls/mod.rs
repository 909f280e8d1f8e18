use log::info;
use racer_core::player_inputs::InputState;
use winit::event::{ElementState, TouchPhase, VirtualKeyCode};

mod gamepad;
mod keyboard;
mod touch;

pub use gamepad::GamepadInput;

use gamepad::GamepadControls;
use keyboard::KeyboardControls;
use touch::TouchPad;

/// Collects driving intents from every input device into one InputState.
///
/// Events only count between `attach` and `detach`; detaching (or losing
/// window focus) releases everything so no key can stay stuck down.
pub struct Controls {
    attached: bool,
    keyboard: KeyboardControls,
    touch: TouchPad,
    gamepad: GamepadControls,
}

impl Controls {
    pub fn new(width: u32, height: u32, gamepad_deadzone: f32) -> Controls {
        Controls {
            attached: false,
            keyboard: KeyboardControls::default(),
            touch: TouchPad::new(width, height),
            gamepad: GamepadControls::new(gamepad_deadzone),
        }
    }

    pub fn attach(&mut self) {
        if !self.attached {
            info!("controls attached");
            self.attached = true;
        }
    }

    pub fn detach(&mut self) {
        if self.attached {
            info!("controls detached");
            self.attached = false;
        }
        self.release_all();
    }

    pub fn release_all(&mut self) {
        self.keyboard.clear();
        self.touch.clear();
        self.gamepad.clear();
    }

    pub fn on_key(&mut self, key: VirtualKeyCode, state: ElementState) {
        if self.attached {
            self.keyboard.on_key(key, state);
        }
    }

    pub fn on_touch(&mut self, id: u64, phase: TouchPhase, x: f64, y: f64) {
        if self.attached {
            if !self.touch.is_visible() {
                let layout: Vec<_> = self
                    .touch
                    .buttons()
                    .iter()
                    .map(|b| format!("{} at ({:.0}, {:.0})", b.label, b.center.0, b.center.1))
                    .collect();
                info!("touch input detected, showing touch controls: {}", layout.join(", "));
            }
            self.touch.on_touch(id, phase, x, y);
        }
    }

    pub fn on_gamepad(&mut self, input: GamepadInput) {
        if self.attached {
            self.gamepad.on_input(input);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.touch.resize(width, height);
    }

    // sampled once per frame, before the physics step
    pub fn sample(&self) -> InputState {
        self.keyboard
            .state()
            .merge(&self.touch.state())
            .merge(&self.gamepad.state())
    }
}

#[cfg(test)]
mod tests {
    use gilrs::Button;

    use super::*;

    #[test]
    fn ignores_events_until_attached() {
        let mut controls = Controls::new(800, 600, 0.2);
        controls.on_key(VirtualKeyCode::W, ElementState::Pressed);
        assert_eq!(controls.sample(), InputState::default());

        controls.attach();
        controls.on_key(VirtualKeyCode::W, ElementState::Pressed);
        assert!(controls.sample().forward);
    }

    #[test]
    fn detach_releases_everything() {
        let mut controls = Controls::new(800, 600, 0.2);
        controls.attach();
        controls.on_key(VirtualKeyCode::Space, ElementState::Pressed);
        controls.on_touch(3, TouchPhase::Started, 400.0, 480.0);
        controls.on_gamepad(Ok((Button::DPadRight, 1.0)));

        let held = controls.sample();
        assert!(held.brake && held.forward && held.right);

        controls.detach();
        assert_eq!(controls.sample(), InputState::default());

        // a key released after detaching must not resurrect anything
        controls.on_key(VirtualKeyCode::Space, ElementState::Released);
        assert_eq!(controls.sample(), InputState::default());
    }

    #[test]
    fn merges_devices() {
        let mut controls = Controls::new(800, 600, 0.2);
        controls.attach();
        controls.on_key(VirtualKeyCode::A, ElementState::Pressed);
        controls.on_gamepad(Ok((Button::RightTrigger2, 1.0)));

        let sampled = controls.sample();
        assert!(sampled.left && sampled.forward);
        assert!(!sampled.right && !sampled.backward && !sampled.brake);
    }
}
