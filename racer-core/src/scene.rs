use glam::{DVec2, DVec3};

use crate::car_model::CarModel;
use crate::color::Color;
use crate::track::Track;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ground {
    pub size: DVec2,
    pub height: f64,
    pub color: Color,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Light {
    Ambient { intensity: f64 },
    Directional { position: DVec3, intensity: f64 },
    Point { position: DVec3, intensity: f64 },
}

// Everything static a renderer needs to draw around the car: it only has to
// turn these descriptions into meshes once at startup
pub struct SceneLayout {
    pub ground: Ground,
    pub lights: Vec<Light>,
    pub car: CarModel,
    pub track: Track,
}

impl SceneLayout {
    pub fn new(car_color: Color) -> SceneLayout {
        SceneLayout {
            ground: Ground {
                size: DVec2::new(100.0, 100.0),
                height: -1.0,
                color: Color::from_u32(0x3a7c2f),
            },
            lights: vec![
                Light::Ambient { intensity: 0.7 },
                Light::Directional {
                    position: DVec3::new(5.0, 5.0, 5.0),
                    intensity: 1.0,
                },
                // front and back fill so the car's sides don't go flat
                Light::Point {
                    position: DVec3::new(0.0, 2.0, 5.0),
                    intensity: 0.5,
                },
                Light::Point {
                    position: DVec3::new(0.0, 2.0, -5.0),
                    intensity: 0.5,
                },
            ],
            car: CarModel::new(car_color),
            track: Track::new(),
        }
    }
}
