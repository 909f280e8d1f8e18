use log::error;

use crate::error::MotionError;
use crate::player_inputs::{EngineStatus, InputState, SteerStatus};
use crate::vehicle_state::VehicleState;

pub mod tuning;
pub mod wheel_spin;


use tuning::VehicleTuning;

impl VehicleState {
    /* Given the current state and this frame's inputs, compute and return
     * what next frame's state will be. Pure: nothing outside the returned
     * value changes. */
    pub fn do_physics_step(&self, tuning: &VehicleTuning, inputs: &InputState) -> VehicleState {
        let acceleration = match inputs.engine_status() {
            EngineStatus::Accelerating => tuning.accel_rate,
            EngineStatus::Reversing => -tuning.accel_rate,
            EngineStatus::Neutral => 0.0,
        };

        // friction is the only thing bringing the car to rest, so it always applies
        let mut speed = (self.speed + acceleration) * tuning.friction;
        if inputs.brake {
            speed *= tuning.brake_factor;
        }
        speed = speed.clamp(-tuning.max_reverse_speed(), tuning.max_speed);

        let mut next = VehicleState { speed, ..*self };

        if speed.abs() <= tuning.movement_epsilon {
            // too slow to move or turn; let the wheels drift back to centre
            next.front_wheel_angle *= tuning.wheel_centering_decay;
            return next;
        }

        // heading 0 faces -z, so displacement is subtracted
        next.position_x -= self.heading_y.sin() * speed;
        next.position_z -= self.heading_y.cos() * speed;

        let turn = tuning.turn_rate * speed.abs();
        let target_wheel_angle = match inputs.steer_status() {
            SteerStatus::TurningLeft => {
                next.heading_y += turn;
                tuning.max_wheel_turn
            }
            SteerStatus::TurningRight => {
                next.heading_y -= turn;
                -tuning.max_wheel_turn
            }
            SteerStatus::Straight => 0.0,
        };

        next.front_wheel_angle +=
            (target_wheel_angle - next.front_wheel_angle) * tuning.wheel_steer_smoothing;

        next
    }
}

/// Owns one car's kinematic state and advances it one frame at a time.
pub struct MotionIntegrator {
    tuning: VehicleTuning,
    state: VehicleState,
}

impl MotionIntegrator {
    pub fn new(tuning: VehicleTuning, initial_heading: f64) -> Self {
        MotionIntegrator {
            tuning,
            state: VehicleState::new(initial_heading),
        }
    }

    // resume from an arbitrary state, e.g. a recorded one
    pub fn with_state(tuning: VehicleTuning, state: VehicleState) -> Self {
        MotionIntegrator { tuning, state }
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn tuning(&self) -> &VehicleTuning {
        &self.tuning
    }

    /// Advances the owned state by one frame. Fails without touching the
    /// state if it is (or would become) non-finite.
    pub fn step(&mut self, inputs: &InputState) -> Result<&VehicleState, MotionError> {
        self.state.check_finite().map_err(|e| {
            error!("refusing to step from a corrupt vehicle state: {}", e);
            e
        })?;

        let next = self.state.do_physics_step(&self.tuning, inputs);
        next.check_finite().map_err(|e| {
            error!("physics step produced a corrupt vehicle state: {}", e);
            e
        })?;

        self.state = next;
        Ok(&self.state)
    }
}

impl Default for MotionIntegrator {
    fn default() -> Self {
        MotionIntegrator::new(VehicleTuning::default(), 0.0)
    }
}
