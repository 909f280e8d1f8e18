use serde::Deserialize;

pub const ACCEL_RATE: f64 = 0.008;

// Friction decays speed every frame whether or not the driver is on the
// throttle; braking stacks another multiplicative decay on top
pub const FRICTION: f64 = 0.98;
pub const BRAKE_FACTOR: f64 = 0.9;

// reverse is capped at half of this
pub const MAX_SPEED: f64 = 0.5;

pub const TURN_RATE: f64 = 0.03;
pub const MAX_WHEEL_TURN: f64 = std::f64::consts::FRAC_PI_4;
pub const WHEEL_STEER_SMOOTHING: f64 = 0.2;
pub const WHEEL_CENTERING_DECAY: f64 = 0.9;

pub const MOVEMENT_EPSILON: f64 = 0.001;

pub const WHEEL_SPIN_RATE: f64 = 10.0;

/// Per-frame tuning of the motion model. All rates are per frame, not per
/// second; the model assumes a roughly constant frame rate.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct VehicleTuning {
    pub accel_rate: f64,
    pub friction: f64,
    pub brake_factor: f64,
    pub max_speed: f64,
    pub turn_rate: f64, // radians per frame at unit speed
    pub max_wheel_turn: f64,
    pub wheel_steer_smoothing: f64,
    pub wheel_centering_decay: f64,
    pub movement_epsilon: f64,
    pub wheel_spin_rate: f64,
}

impl VehicleTuning {
    pub fn max_reverse_speed(&self) -> f64 {
        self.max_speed * 0.5
    }
}

impl Default for VehicleTuning {
    fn default() -> Self {
        VehicleTuning {
            accel_rate: ACCEL_RATE,
            friction: FRICTION,
            brake_factor: BRAKE_FACTOR,
            max_speed: MAX_SPEED,
            turn_rate: TURN_RATE,
            max_wheel_turn: MAX_WHEEL_TURN,
            wheel_steer_smoothing: WHEEL_STEER_SMOOTHING,
            wheel_centering_decay: WHEEL_CENTERING_DECAY,
            movement_epsilon: MOVEMENT_EPSILON,
            wheel_spin_rate: WHEEL_SPIN_RATE,
        }
    }
}
