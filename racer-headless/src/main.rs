use std::path::PathBuf;
use std::process;
use std::time::Duration;

use log::{error, info};
use racer_core::car_model::CarModel;
use racer_core::session::{DriveSession, LogPresenter};
use racer_core::GLOBAL_CONFIG;

use runner::HeadlessRunner;
use script::InputScript;

mod runner;
mod script;

const USAGE: &str = "usage: racer-headless <script.yaml> [--fast]\n       racer-headless --random <seed> <frames> [--fast]";

#[derive(Debug, PartialEq)]
enum ScriptSource {
    File(PathBuf),
    Random { seed: u64, frames: u64 },
}

#[derive(Debug, PartialEq)]
struct Options {
    source: ScriptSource,
    fast: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let fast = args.iter().any(|arg| arg == "--fast");
    let positional: Vec<&String> = args.iter().filter(|arg| *arg != "--fast").collect();

    let source = match positional.as_slice() {
        [flag, seed, frames] if flag.as_str() == "--random" => ScriptSource::Random {
            seed: seed
                .parse()
                .map_err(|_| format!("seed must be an integer, got {:?}", seed))?,
            frames: frames
                .parse()
                .map_err(|_| format!("frame count must be an integer, got {:?}", frames))?,
        },
        [path] if !path.starts_with("--") => ScriptSource::File(PathBuf::from(path.as_str())),
        _ => return Err(USAGE.to_string()),
    };

    Ok(Options { source, fast })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args).unwrap_or_else(|message| {
        eprintln!("{}", message);
        process::exit(2);
    });

    let script = match &options.source {
        ScriptSource::File(path) => {
            info!("loading input script {}", path.display());
            InputScript::load(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            })
        }
        ScriptSource::Random { seed, frames } => {
            info!("generating random drive (seed {}, {} frames)", seed, frames);
            InputScript::random(*seed, *frames)
        }
    };

    let car_color = GLOBAL_CONFIG
        .car_color()
        .expect("invalid car_color in config");
    let session = DriveSession::from_config(CarModel::new(car_color));
    let tick = if options.fast {
        None
    } else {
        Some(Duration::from_millis(GLOBAL_CONFIG.frame_ms))
    };

    let mut runner = HeadlessRunner::new(
        session,
        LogPresenter::new(GLOBAL_CONFIG.log_every_frames),
        tick,
    );

    match runner.run(&script) {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            error!("simulation stopped: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_script_path() {
        let options = parse_args(&args(&["lap.yaml"])).unwrap();
        assert_eq!(options.source, ScriptSource::File(PathBuf::from("lap.yaml")));
        assert!(!options.fast);
    }

    #[test]
    fn parses_random_driver() {
        let options = parse_args(&args(&["--fast", "--random", "9", "600"])).unwrap();
        assert_eq!(
            options.source,
            ScriptSource::Random {
                seed: 9,
                frames: 600
            }
        );
        assert!(options.fast);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["--random", "x", "10"])).is_err());
        assert!(parse_args(&args(&["a.yaml", "b.yaml"])).is_err());
        assert!(parse_args(&args(&["--random"])).is_err());
    }
}
