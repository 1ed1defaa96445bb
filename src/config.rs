//! Run configuration and command-line parsing.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::metrics::PhysicalConstants;
use crate::ray::RayScenario;

/// Integration and bookkeeping constants for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Affine-parameter increment per RK4 step
    pub dlambda: f64,
    /// Rays beyond this radius (m) have escaped
    pub max_distance: f64,
    /// Frames between census log lines
    pub progress_interval: u64,
    /// Frames to run in headless mode
    pub frames: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dlambda: 1.0,
            max_distance: 2e11,
            progress_interval: 100,
            frames: 3000,
        }
    }
}

/// What the snapshot looks at and how big it is.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Half-width of the visible region (m)
    pub view_width: f64,
    /// Half-height of the visible region (m)
    pub view_height: f64,
    pub width: u32,
    pub height: u32,
    pub num_stars: usize,
    pub star_seed: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            view_width: 1e11,
            view_height: 7.5e10,
            width: 800,
            height: 600,
            num_stars: 200,
            star_seed: 0x5a_a7,
        }
    }
}

/// Start frames for each launch group.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleConfig {
    pub orbiting_start: u64,
    pub point_source_start: u64,
    pub parallel_start: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            orbiting_start: 0,
            point_source_start: 700,
            parallel_start: 1200,
        }
    }
}

impl ScheduleConfig {
    pub fn start_frame(&self, scenario: RayScenario) -> u64 {
        match scenario {
            RayScenario::Orbiting => self.orbiting_start,
            RayScenario::PointSource => self.point_source_start,
            RayScenario::Parallel => self.parallel_start,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub constants: PhysicalConstants,
    pub simulation: SimulationConfig,
    pub view: ViewConfig,
    pub schedule: ScheduleConfig,
    pub scenarios: Vec<RayScenario>,
    /// Snapshot destination; `None` disables rendering
    pub output: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            constants: PhysicalConstants::default(),
            simulation: SimulationConfig::default(),
            view: ViewConfig::default(),
            schedule: ScheduleConfig::default(),
            scenarios: RayScenario::ALL.to_vec(),
            output: Some(PathBuf::from("blackhole.png")),
        }
    }
}

pub const USAGE: &str = "\
usage: lightbend [options]
  --frames N           frames to simulate (default 3000)
  --step DL            affine step per frame (default 1.0)
  --max-distance M     escape radius in metres (default 2e11)
  --progress N         frames between progress lines (default 100)
  --scenario NAME      all | orbiting | point-source | parallel (repeatable)
  --width PX           snapshot width (default 800)
  --height PX          snapshot height (default 600)
  --stars N            background stars (default 200)
  --seed N             star field seed
  --output PATH        snapshot path (default blackhole.png)
  --no-render          skip the snapshot";

fn parse_scenario(name: &str) -> Result<Vec<RayScenario>, ConfigError> {
    match name {
        "all" => Ok(RayScenario::ALL.to_vec()),
        _ => RayScenario::ALL
            .iter()
            .copied()
            .find(|s| s.name() == name)
            .map(|s| vec![s])
            .ok_or_else(|| ConfigError::UnknownScenario(name.to_string())),
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

fn positive(flag: &str, value: f64) -> Result<f64, ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive {
            flag: flag.to_string(),
            value,
        })
    }
}

/// Parse command-line flags (without the program name).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_args<I, S>(args: I) -> Result<Option<RunConfig>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let mut config = RunConfig::default();
    let mut scenarios: Vec<RayScenario> = Vec::new();

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let flag = flag.as_str();
        match flag {
            "-h" | "--help" => return Ok(None),
            "--no-render" => {
                config.output = None;
                continue;
            }
            _ => {}
        }

        let value = iter
            .next()
            .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;

        match flag {
            "--frames" => config.simulation.frames = parse_value(flag, value)?,
            "--step" => {
                config.simulation.dlambda = positive(flag, parse_value(flag, value)?)?;
            }
            "--max-distance" => {
                config.simulation.max_distance = positive(flag, parse_value(flag, value)?)?;
            }
            "--progress" => {
                let interval: u64 = parse_value(flag, value)?;
                positive(flag, interval as f64)?;
                config.simulation.progress_interval = interval;
            }
            "--scenario" => {
                for s in parse_scenario(value)? {
                    if !scenarios.contains(&s) {
                        scenarios.push(s);
                    }
                }
            }
            "--width" => {
                let width: u32 = parse_value(flag, value)?;
                positive(flag, width as f64)?;
                config.view.width = width;
            }
            "--height" => {
                let height: u32 = parse_value(flag, value)?;
                positive(flag, height as f64)?;
                config.view.height = height;
            }
            "--stars" => config.view.num_stars = parse_value(flag, value)?,
            "--seed" => config.view.star_seed = parse_value(flag, value)?,
            "--output" => config.output = Some(PathBuf::from(value)),
            _ => return Err(ConfigError::UnknownFlag(flag.to_string())),
        }
    }

    if !scenarios.is_empty() {
        config.scenarios = scenarios;
    }

    Ok(Some(config))
}
