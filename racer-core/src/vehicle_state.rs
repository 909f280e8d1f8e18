use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::MotionError;

// Kinematic state of one car. The simulation is planar: the car always sits
// at y = 0 and only yaws.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    pub position_x: f64,
    pub position_z: f64,
    pub heading_y: f64, // radians, not wrapped
    pub speed: f64,     // signed, positive is forward
    pub front_wheel_angle: f64,
}

impl VehicleState {
    pub fn new(heading_y: f64) -> Self {
        VehicleState {
            position_x: 0.0,
            position_z: 0.0,
            heading_y,
            speed: 0.0,
            front_wheel_angle: 0.0,
        }
    }

    pub fn position(&self) -> DVec3 {
        DVec3::new(self.position_x, 0.0, self.position_z)
    }

    // world transform of the car body: translate to position, yaw by heading
    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_translation(self.position()) * DMat4::from_rotation_y(self.heading_y)
    }

    pub fn check_finite(&self) -> Result<(), MotionError> {
        let fields = [
            ("position_x", self.position_x),
            ("position_z", self.position_z),
            ("heading_y", self.heading_y),
            ("speed", self.speed),
            ("front_wheel_angle", self.front_wheel_angle),
        ];

        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some(&(field, value)) => Err(MotionError::NonFiniteState { field, value }),
            None => Ok(()),
        }
    }
}

impl Default for VehicleState {
    fn default() -> Self {
        VehicleState::new(0.0)
    }
}
