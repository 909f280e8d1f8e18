use config::{Config, ConfigError, File};
use lazy_static::lazy_static;
use serde::Deserialize;

use crate::camera::CameraRig;
use crate::color::Color;
use crate::error::ColorError;
use crate::physics::tuning::VehicleTuning;

#[derive(Deserialize)]
pub struct Settings {
    pub frame_ms: u64,
    pub window_width: u32,
    pub window_height: u32,
    pub car_color: String,
    pub initial_heading: f64,
    pub gamepad_deadzone: f32,
    pub log_every_frames: u64,

    #[serde(default)]
    pub tuning: VehicleTuning,
    #[serde(default)]
    pub camera: CameraRig,
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .set_default("frame_ms", 16)?
            .set_default("window_width", 1280)?
            .set_default("window_height", 720)?
            .set_default("car_color", "#ff0000")?
            .set_default("initial_heading", 0.0)?
            .set_default("gamepad_deadzone", 0.2)?
            .set_default("log_every_frames", 60)?
            .add_source(File::with_name("config.yaml").required(false))
            .build()?;

        config.try_deserialize()
    }

    pub fn car_color(&self) -> Result<Color, ColorError> {
        self.car_color.parse()
    }
}

lazy_static! {
    pub static ref GLOBAL_CONFIG: Settings = Settings::new().expect("failed to read config file");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_config_file() {
        let settings = Settings::new().unwrap();
        assert_eq!(settings.frame_ms, 16);
        assert_eq!(settings.car_color().unwrap(), Color::from_u32(0xff0000));
        assert_eq!(settings.log_every_frames, 60);
        assert_eq!(settings.tuning.max_speed, 0.5);
        assert_eq!(settings.camera.fov_degrees, 75.0);
    }
}
