use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};
use racer_core::error::MotionError;
use racer_core::session::{DriveSession, Presenter};
use racer_core::vehicle_state::VehicleState;

use crate::script::InputScript;

pub struct RunSummary {
    pub frames: u64,
    pub vehicle: VehicleState,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames, final position ({:.3}, {:.3}), heading {:.3}, speed {:.4}",
            self.frames,
            self.vehicle.position_x,
            self.vehicle.position_z,
            self.vehicle.heading_y,
            self.vehicle.speed
        )
    }
}

// Plays the part of the render loop without a window: one session step per
// tick, paced like a display refresh unless there is no tick to wait for
pub struct HeadlessRunner<P: Presenter> {
    session: DriveSession,
    presenter: P,
    tick: Option<Duration>,
}

impl<P: Presenter> HeadlessRunner<P> {
    pub fn new(session: DriveSession, presenter: P, tick: Option<Duration>) -> Self {
        HeadlessRunner {
            session,
            presenter,
            tick,
        }
    }

    pub fn run(&mut self, script: &InputScript) -> Result<RunSummary, MotionError> {
        info!("running {} scripted frames", script.total_frames());

        for inputs in script.inputs() {
            let start_time = Instant::now();

            let output = self.session.advance(&inputs)?;
            self.presenter.present(&output);

            // wait until the frame time has elapsed
            if let Some(tick) = self.tick {
                match tick.checked_sub(start_time.elapsed()) {
                    Some(remaining) => thread::sleep(remaining),
                    None => warn!("frame {} took longer than the frame interval", output.frame),
                }
            }
        }

        Ok(RunSummary {
            frames: self.session.frame(),
            vehicle: *self.session.vehicle(),
        })
    }
}
