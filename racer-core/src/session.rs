use glam::DMat4;
use log::{debug, info};

use crate::camera::{CameraPose, ChaseCamera};
use crate::car_model::{CarModel, WheelPose};
use crate::error::MotionError;
use crate::physics::tuning::VehicleTuning;
use crate::physics::wheel_spin::WheelSpin;
use crate::physics::MotionIntegrator;
use crate::player_inputs::InputState;
use crate::vehicle_state::VehicleState;
use crate::GLOBAL_CONFIG;

// What the presentation side needs to place the car, its wheels and the
// camera for one frame
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub frame: u64,
    pub vehicle: VehicleState,
    pub car_transform: DMat4,
    pub wheels: Vec<WheelPose>,
    pub wheel_spin: f64,
    pub camera: CameraPose,
}

pub trait Presenter {
    fn present(&mut self, output: &FrameOutput);
}

/// One car driven by one set of inputs, advanced once per frame.
pub struct DriveSession {
    integrator: MotionIntegrator,
    wheel_spin: WheelSpin,
    camera: ChaseCamera,
    car: CarModel,
    frame: u64,
}

impl DriveSession {
    pub fn new(
        tuning: VehicleTuning,
        initial_heading: f64,
        camera: ChaseCamera,
        car: CarModel,
    ) -> DriveSession {
        DriveSession {
            integrator: MotionIntegrator::new(tuning, initial_heading),
            wheel_spin: WheelSpin::new(),
            camera,
            car,
            frame: 0,
        }
    }

    pub fn from_config(car: CarModel) -> DriveSession {
        let aspect = GLOBAL_CONFIG.window_width as f64 / GLOBAL_CONFIG.window_height.max(1) as f64;
        info!(
            "starting drive session (heading {:.3}, {}ms frames)",
            GLOBAL_CONFIG.initial_heading, GLOBAL_CONFIG.frame_ms
        );

        DriveSession::new(
            GLOBAL_CONFIG.tuning,
            GLOBAL_CONFIG.initial_heading,
            ChaseCamera::new(GLOBAL_CONFIG.camera, aspect),
            car,
        )
    }

    pub fn vehicle(&self) -> &VehicleState {
        self.integrator.state()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn camera_mut(&mut self) -> &mut ChaseCamera {
        &mut self.camera
    }

    pub fn car(&self) -> &CarModel {
        &self.car
    }

    pub fn advance(&mut self, inputs: &InputState) -> Result<FrameOutput, MotionError> {
        let vehicle = *self.integrator.step(inputs)?;
        let spin_rate = self.integrator.tuning().wheel_spin_rate;
        let wheel_spin = self.wheel_spin.accumulate(vehicle.speed, spin_rate);
        self.frame += 1;

        Ok(FrameOutput {
            frame: self.frame,
            vehicle,
            car_transform: vehicle.to_mat4(),
            wheels: self.car.wheel_poses(vehicle.front_wheel_angle, wheel_spin),
            wheel_spin,
            camera: self.camera.follow(&vehicle),
        })
    }
}

// Stand-in presenter for running without a renderer: logs the pose every
// `every` frames
pub struct LogPresenter {
    every: u64,
}

impl LogPresenter {
    pub fn new(every: u64) -> LogPresenter {
        LogPresenter {
            every: every.max(1),
        }
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, output: &FrameOutput) {
        if output.frame % self.every != 0 {
            return;
        }

        let v = &output.vehicle;
        debug!(
            "frame {}: pos ({:.3}, {:.3}) heading {:.3} speed {:.4} wheel {:.3} camera ({:.2}, {:.2}, {:.2})",
            output.frame,
            v.position_x,
            v.position_z,
            v.heading_y,
            v.speed,
            v.front_wheel_angle,
            output.camera.eye.x,
            output.camera.eye.y,
            output.camera.eye.z
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::camera::CameraRig;
    use crate::color::Color;

    fn session() -> DriveSession {
        DriveSession::new(
            VehicleTuning::default(),
            0.0,
            ChaseCamera::new(CameraRig::default(), 1.0),
            CarModel::new(Color::from_u32(0xff0000)),
        )
    }

    struct Recorder(Vec<u64>);

    impl Presenter for Recorder {
        fn present(&mut self, output: &FrameOutput) {
            self.0.push(output.frame);
        }
    }

    #[test]
    fn frame_output_tracks_the_vehicle() {
        let mut session = session();
        let inputs = InputState {
            forward: true,
            left: true,
            ..Default::default()
        };

        let mut output = session.advance(&inputs).unwrap();
        for _ in 0..30 {
            output = session.advance(&inputs).unwrap();
        }

        assert_eq!(output.frame, 31);
        assert_eq!(output.vehicle, *session.vehicle());
        assert!(output.vehicle.heading_y > 0.0);
        assert_eq!(output.wheels.len(), 4);

        let origin = output.car_transform.transform_point3(DVec3::ZERO);
        assert!(origin.abs_diff_eq(output.vehicle.position(), 1e-12));

        // camera target hovers over the car
        let above = output.vehicle.position() + DVec3::Y;
        assert!(output.camera.target.abs_diff_eq(above, 1e-12));
    }

    #[test]
    fn wheels_spin_backwards_when_driving_forwards() {
        let mut session = session();
        let inputs = InputState {
            forward: true,
            ..Default::default()
        };

        let mut spin = 0.0;
        for _ in 0..10 {
            let output = session.advance(&inputs).unwrap();
            assert!(output.wheel_spin < spin);
            spin = output.wheel_spin;
        }
    }

    #[test]
    fn presenter_sees_every_frame() {
        let mut session = session();
        let mut recorder = Recorder(Vec::new());
        for _ in 0..3 {
            let output = session.advance(&InputState::default()).unwrap();
            recorder.present(&output);
        }
        assert_eq!(recorder.0, vec![1, 2, 3]);
    }
}
