use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use racer_core::player_inputs::InputState;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("could not read input script: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed input script: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

// Hold `input` steady for `frames` frames
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScriptSegment {
    pub frames: u64,
    #[serde(default)]
    pub input: InputState,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InputScript {
    pub frames: Vec<ScriptSegment>,
}

impl InputScript {
    pub fn load(path: &Path) -> Result<InputScript, ScriptError> {
        let text = fs::read_to_string(path)?;
        InputScript::parse(&text)
    }

    pub fn parse(text: &str) -> Result<InputScript, ScriptError> {
        Ok(serde_yaml::from_str(text)?)
    }

    // A driver mashing buttons: holds a random combination of intents for a
    // random stretch of frames, over and over. Same seed, same drive.
    pub fn random(seed: u64, total_frames: u64) -> InputScript {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut frames = Vec::new();
        let mut remaining = total_frames;

        while remaining > 0 {
            let length = rng.gen_range(10..=90).min(remaining);
            frames.push(ScriptSegment {
                frames: length,
                input: InputState {
                    forward: rng.gen_bool(0.7),
                    backward: rng.gen_bool(0.2),
                    left: rng.gen_bool(0.3),
                    right: rng.gen_bool(0.3),
                    brake: rng.gen_bool(0.1),
                },
            });
            remaining -= length;
        }

        InputScript { frames }
    }

    pub fn total_frames(&self) -> u64 {
        self.frames.iter().map(|segment| segment.frames).sum()
    }

    pub fn inputs(&self) -> impl Iterator<Item = InputState> + '_ {
        self.frames
            .iter()
            .flat_map(|segment| std::iter::repeat(segment.input).take(segment.frames as usize))
    }
}
