use std::time::{Duration, Instant};

use gilrs::{EventType, Gilrs};
use log::{info, warn};
use racer_core::error::MotionError;
use racer_core::session::{DriveSession, FrameOutput, LogPresenter, Presenter};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Touch, VirtualKeyCode};

use crate::controls::Controls;

pub struct Application {
    pub controls: Controls,
    gilrs: Option<Gilrs>,
    session: DriveSession,
    presenter: LogPresenter,
    latest_frame: Option<FrameOutput>,
    frame_duration: Duration,
    next_frame: Instant,
}

impl Application {
    pub fn new(
        controls: Controls,
        session: DriveSession,
        presenter: LogPresenter,
        frame_duration: Duration,
    ) -> Self {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => Some(gilrs),
            Err(e) => {
                warn!("gamepad support unavailable: {}", e);
                None
            }
        };

        Self {
            controls,
            gilrs,
            session,
            presenter,
            latest_frame: None,
            frame_duration,
            next_frame: Instant::now(),
        }
    }

    pub fn next_frame_at(&self) -> Instant {
        self.next_frame
    }

    pub fn on_key(&mut self, key: VirtualKeyCode, state: ElementState) {
        self.controls.on_key(key, state);
    }

    pub fn on_touch(&mut self, touch: Touch) {
        self.controls
            .on_touch(touch.id, touch.phase, touch.location.x, touch.location.y);
    }

    pub fn on_focus_changed(&mut self, focused: bool) {
        // we won't see key-up events for anything released while unfocused
        if !focused {
            self.controls.release_all();
        }
    }

    pub fn on_resize(&mut self, size: PhysicalSize<u32>) {
        info!("window resized to {}x{}", size.width, size.height);
        self.controls.resize(size.width, size.height);
        self.session.camera_mut().set_viewport(size.width, size.height);
    }

    fn poll_gamepads(&mut self) {
        let gilrs = match self.gilrs.as_mut() {
            Some(gilrs) => gilrs,
            None => return,
        };

        while let Some(event) = gilrs.next_event() {
            let input = match event.event {
                EventType::ButtonChanged(button, value, _) => Some(Ok((button, value))),
                EventType::AxisChanged(axis, value, _) => Some(Err((axis, value))),
                EventType::Connected => {
                    info!("connected new gamepad #{}", event.id);
                    None
                }
                EventType::Disconnected => {
                    info!("gamepad #{} disconnected", event.id);
                    None
                }
                _ => None,
            };

            if let Some(input) = input {
                self.controls.on_gamepad(input);
            }
        }
    }

    // Runs the simulation for however many frames are due. Returns true if a
    // new frame is ready to present.
    pub fn update(&mut self) -> Result<bool, MotionError> {
        self.poll_gamepads();

        let now = Instant::now();
        if now < self.next_frame {
            return Ok(false);
        }

        let inputs = self.controls.sample();
        self.latest_frame = Some(self.session.advance(&inputs)?);

        // don't try to catch up on frames missed while the window was stalled
        self.next_frame += self.frame_duration;
        if self.next_frame < now {
            self.next_frame = now + self.frame_duration;
        }
        Ok(true)
    }

    pub fn render(&mut self) {
        if let Some(frame) = &self.latest_frame {
            self.presenter.present(frame);
        }
    }
}
