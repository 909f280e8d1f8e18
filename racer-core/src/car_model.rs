use glam::{DQuat, DVec3};

use crate::color::Color;

const TYRE: Color = Color::from_u32(0x111111);
const RIM: Color = Color::from_u32(0x777777);
const COCKPIT: Color = Color::from_u32(0x111111);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PartKind {
    Body,
    Nose,
    Cockpit,
    Halo,
    SidePod,
    Wheel { front: bool },
    Rim,
    FrontWing,
    RearWing,
    DrsFlap,
    Endplate,
    Intake,
    TWing,
    Bargeboard,
}

// Every visible piece of the car is an axis-aligned box in the car's local frame
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxPart {
    pub kind: PartKind,
    pub size: DVec3,
    pub offset: DVec3,
    pub color: Color,
}

impl BoxPart {
    fn new(kind: PartKind, size: [f64; 3], offset: [f64; 3], color: Color) -> BoxPart {
        BoxPart {
            kind,
            size: DVec3::from(size),
            offset: DVec3::from(offset),
            color,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelPose {
    pub offset: DVec3,
    pub rotation: DQuat,
    pub front: bool,
}

/// Procedural open-wheel race car, built from boxes. Rims are listed right
/// after the wheel they belong to and share its pose.
pub struct CarModel {
    parts: Vec<BoxPart>,
}

impl CarModel {
    pub fn new(body: Color) -> CarModel {
        let mut parts = vec![
            BoxPart::new(PartKind::Body, [1.4, 0.4, 4.0], [0.0, 0.2, 0.0], body),
            BoxPart::new(PartKind::Nose, [0.8, 0.3, 1.2], [0.0, 0.15, 2.0], body),
            BoxPart::new(PartKind::Cockpit, [0.8, 0.3, 1.0], [0.0, 0.45, -0.2], COCKPIT),
            BoxPart::new(PartKind::Halo, [0.9, 0.1, 0.8], [0.0, 0.6, -0.2], COCKPIT),
        ];

        for x in [0.8, -0.8] {
            parts.push(BoxPart::new(PartKind::SidePod, [0.4, 0.3, 1.5], [x, 0.2, -0.5], body));
        }

        // front right, front left, back right, back left
        for (x, z) in [(0.75, 1.2), (-0.75, 1.2), (0.75, -1.2), (-0.75, -1.2)] {
            let front = z > 0.0;
            parts.push(BoxPart::new(PartKind::Wheel { front }, [0.4, 0.6, 0.6], [x, 0.0, z], TYRE));
            parts.push(BoxPart::new(PartKind::Rim, [0.42, 0.58, 0.58], [x, 0.0, z], RIM));
        }

        parts.push(BoxPart::new(PartKind::FrontWing, [2.2, 0.1, 0.4], [0.0, 0.0, 2.2], body));
        for x in [-1.1, 1.1] {
            parts.push(BoxPart::new(PartKind::Endplate, [0.1, 0.3, 0.6], [x, 0.1, 2.2], body));
        }

        parts.push(BoxPart::new(PartKind::RearWing, [2.0, 0.3, 0.4], [0.0, 0.8, -1.8], body));
        parts.push(BoxPart::new(PartKind::DrsFlap, [1.8, 0.1, 0.2], [0.0, 0.9, -1.8], body));
        for x in [-1.0, 1.0] {
            parts.push(BoxPart::new(PartKind::Endplate, [0.1, 0.6, 0.6], [x, 0.6, -1.8], body));
        }

        parts.push(BoxPart::new(PartKind::Intake, [0.3, 0.3, 0.6], [0.0, 0.6, -0.6], body));

        parts.push(BoxPart::new(PartKind::TWing, [1.0, 0.1, 0.2], [0.0, 0.7, -1.4], body));
        for x in [-0.7, 0.7] {
            parts.push(BoxPart::new(PartKind::Bargeboard, [0.1, 0.2, 0.8], [x, 0.1, 0.8], body));
        }

        CarModel { parts }
    }

    pub fn parts(&self) -> &[BoxPart] {
        &self.parts
    }

    pub fn wheels(&self) -> impl Iterator<Item = &BoxPart> {
        self.parts
            .iter()
            .filter(|part| matches!(part.kind, PartKind::Wheel { .. }))
    }

    // Front wheels yaw with the steering angle; every wheel rolls about its
    // axle by the shared spin angle
    pub fn wheel_poses(&self, front_wheel_angle: f64, spin_angle: f64) -> Vec<WheelPose> {
        let roll = DQuat::from_rotation_x(spin_angle);

        self.wheels()
            .map(|wheel| {
                let front = matches!(wheel.kind, PartKind::Wheel { front: true });
                let rotation = if front {
                    DQuat::from_rotation_y(front_wheel_angle) * roll
                } else {
                    roll
                };

                WheelPose {
                    offset: wheel.offset,
                    rotation,
                    front,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::from_u32(0xff0000);

    #[test]
    fn has_four_wheels_two_steering() {
        let car = CarModel::new(RED);
        assert_eq!(car.wheels().count(), 4);

        let fronts: Vec<_> = car
            .wheels()
            .filter(|w| w.kind == PartKind::Wheel { front: true })
            .collect();
        assert_eq!(fronts.len(), 2);
        assert!(fronts.iter().all(|w| w.offset.z > 0.0));
    }

    #[test]
    fn body_parts_take_the_car_color() {
        let blue = Color::from_u32(0x0000ff);
        let car = CarModel::new(blue);

        let body = car.parts().iter().find(|p| p.kind == PartKind::Body).unwrap();
        assert_eq!(body.color, blue);
        assert!(car
            .parts()
            .iter()
            .filter(|p| p.kind == PartKind::Rim)
            .all(|p| p.color == RIM));
        assert_eq!(car.parts().len(), 25);
    }

    #[test]
    fn only_front_wheels_steer() {
        let car = CarModel::new(RED);
        let angle = std::f64::consts::FRAC_PI_4;
        let poses = car.wheel_poses(angle, 0.0);

        for pose in &poses {
            // the axle is local x; steering turns it, rolling doesn't
            let axle = pose.rotation * DVec3::X;
            if pose.front {
                assert!(axle.abs_diff_eq(DVec3::new(angle.cos(), 0.0, -angle.sin()), 1e-9));
            } else {
                assert!(axle.abs_diff_eq(DVec3::X, 1e-9));
            }
        }
    }

    #[test]
    fn every_wheel_rolls_by_the_same_angle() {
        let car = CarModel::new(RED);
        let poses = car.wheel_poses(0.0, 1.0);

        let expected = DQuat::from_rotation_x(1.0);
        assert!(poses.iter().all(|p| p.rotation.abs_diff_eq(expected, 1e-12)));
    }
}
