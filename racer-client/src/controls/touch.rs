use std::collections::HashMap;

use racer_core::player_inputs::{Control, InputState};
use winit::event::TouchPhase;

const BUTTON_DIAMETER: f64 = 60.0;
const PAD_MARGIN_BOTTOM: f64 = 20.0;
const PAD_WIDTH: f64 = BUTTON_DIAMETER * 3.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchButton {
    pub control: Control,
    pub label: &'static str,
    pub center: (f64, f64),
}

impl TouchButton {
    fn contains(&self, x: f64, y: f64) -> bool {
        let (dx, dy) = (x - self.center.0, y - self.center.1);
        dx * dx + dy * dy <= (BUTTON_DIAMETER / 2.0).powi(2)
    }
}

// On-screen driving buttons for touch devices. The pad is a diamond of four
// round buttons centred along the bottom edge of the window; it stays hidden
// until the first touch tells us the device has a touch screen.
pub struct TouchPad {
    buttons: [TouchButton; 4],
    active_touches: HashMap<u64, Control>,
    visible: bool,
}

impl TouchPad {
    pub fn new(width: u32, height: u32) -> TouchPad {
        TouchPad {
            buttons: layout(width as f64, height as f64),
            active_touches: HashMap::new(),
            visible: false,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.buttons = layout(width as f64, height as f64);
    }

    pub fn buttons(&self) -> &[TouchButton] {
        &self.buttons
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn on_touch(&mut self, id: u64, phase: TouchPhase, x: f64, y: f64) {
        self.visible = true;

        match phase {
            TouchPhase::Started => {
                if let Some(button) = self.buttons.iter().find(|b| b.contains(x, y)) {
                    self.active_touches.insert(id, button.control);
                }
            }
            // buttons only react to a touch starting and ending, so sliding
            // off one keeps it held
            TouchPhase::Moved => {}
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.active_touches.remove(&id);
            }
        }
    }

    pub fn state(&self) -> InputState {
        let mut state = InputState::default();
        for control in self.active_touches.values() {
            state.set(*control, true);
        }
        state
    }

    pub fn clear(&mut self) {
        self.active_touches.clear();
    }
}

fn layout(width: f64, height: f64) -> [TouchButton; 4] {
    let radius = BUTTON_DIAMETER / 2.0;
    let pad_left = (width - PAD_WIDTH) / 2.0;
    let pad_bottom = height - PAD_MARGIN_BOTTOM;
    let middle = pad_left + PAD_WIDTH / 2.0;

    // offsets are from the pad's bottom edge to each button's bottom edge
    let row = |bottom_offset: f64| pad_bottom - bottom_offset - radius;

    [
        TouchButton {
            control: Control::Forward,
            label: "↑",
            center: (middle, row(70.0)),
        },
        // the lower button reverses; there is no on-screen handbrake
        TouchButton {
            control: Control::Backward,
            label: "↓",
            center: (middle, row(0.0)),
        },
        TouchButton {
            control: Control::Left,
            label: "←",
            center: (pad_left + radius, row(35.0)),
        },
        TouchButton {
            control: Control::Right,
            label: "→",
            center: (pad_left + PAD_WIDTH - radius, row(35.0)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_of(pad: &TouchPad, control: Control) -> (f64, f64) {
        pad.buttons()
            .iter()
            .find(|b| b.control == control)
            .unwrap()
            .center
    }

    #[test]
    fn layout_is_centred_on_bottom_edge() {
        let pad = TouchPad::new(800, 600);
        assert_eq!(center_of(&pad, Control::Forward), (400.0, 480.0));
        assert_eq!(center_of(&pad, Control::Backward), (400.0, 550.0));
        assert_eq!(center_of(&pad, Control::Left), (340.0, 515.0));
        assert_eq!(center_of(&pad, Control::Right), (460.0, 515.0));
    }

    #[test]
    fn touch_holds_button_until_released() {
        let mut pad = TouchPad::new(800, 600);
        assert!(!pad.is_visible());

        pad.on_touch(1, TouchPhase::Started, 400.0, 480.0);
        pad.on_touch(2, TouchPhase::Started, 345.0, 520.0);
        assert!(pad.is_visible());
        assert!(pad.state().forward && pad.state().left);

        // dragging away doesn't let go
        pad.on_touch(1, TouchPhase::Moved, 10.0, 10.0);
        assert!(pad.state().forward);

        pad.on_touch(1, TouchPhase::Ended, 10.0, 10.0);
        pad.on_touch(2, TouchPhase::Cancelled, 345.0, 520.0);
        assert_eq!(pad.state(), InputState::default());
    }

    #[test]
    fn touches_outside_buttons_do_nothing() {
        let mut pad = TouchPad::new(800, 600);
        pad.on_touch(7, TouchPhase::Started, 100.0, 100.0);
        assert_eq!(pad.state(), InputState::default());
        // the gap between the diamond's buttons
        pad.on_touch(8, TouchPhase::Started, 400.0, 515.0);
        assert_eq!(pad.state(), InputState::default());
    }

    #[test]
    fn follows_window_resizes() {
        let mut pad = TouchPad::new(800, 600);
        pad.resize(400, 300);
        assert_eq!(center_of(&pad, Control::Backward), (200.0, 250.0));
    }
}
