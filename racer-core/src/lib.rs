pub mod camera;
pub mod car_model;
pub mod color;
pub mod error;
pub mod physics;
pub mod player_inputs;
pub mod scene;
pub mod session;
pub mod track;
pub mod vehicle_state;
mod settings;

pub use settings::{Settings, GLOBAL_CONFIG};
