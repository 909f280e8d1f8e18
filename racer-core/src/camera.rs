use glam::{DMat4, DQuat, DVec3};
use serde::Deserialize;

use crate::vehicle_state::VehicleState;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraRig {
    pub offset: DVec3, // in the car's frame, before yawing by heading
    pub look_height: f64,
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for CameraRig {
    fn default() -> Self {
        CameraRig {
            offset: DVec3::new(0.0, 2.0, 6.0),
            look_height: 1.0,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: DVec3,
    pub target: DVec3,
}

impl CameraPose {
    pub fn view_mat4(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, DVec3::Y)
    }
}

// Chase camera: rigidly attached behind the car, recomputed from scratch
// every frame with no smoothing, so it holds no state between frames
#[derive(Copy, Clone, Debug)]
pub struct ChaseCamera {
    rig: CameraRig,
    aspect: f64,
}

impl ChaseCamera {
    pub fn new(rig: CameraRig, aspect: f64) -> Self {
        ChaseCamera { rig, aspect }
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn follow(&self, vehicle: &VehicleState) -> CameraPose {
        let car_position = vehicle.position();
        let yaw = DQuat::from_rotation_y(vehicle.heading_y);

        CameraPose {
            eye: car_position + yaw * self.rig.offset,
            target: car_position + DVec3::new(0.0, self.rig.look_height, 0.0),
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        // a minimised window reports a zero height; keep the last aspect
        if width > 0 && height > 0 {
            self.aspect = width as f64 / height as f64;
        }
    }

    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    pub fn projection_mat4(&self) -> DMat4 {
        DMat4::perspective_rh(
            self.rig.fov_degrees.to_radians(),
            self.aspect,
            self.rig.near,
            self.rig.far,
        )
    }
}
