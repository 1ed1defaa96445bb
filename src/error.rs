//! Error types for lightbend.
//!
//! Launch errors come from building a ray out of bad initial conditions,
//! config errors from the command line, render errors from writing the
//! snapshot image.

use std::path::PathBuf;

/// Rejected ray initial conditions.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LaunchError {
    #[error("ray launched at the origin; polar angle is undefined")]
    AtOrigin,

    #[error("ray launch contains a non-finite value (pos = ({x}, {y}), vel = ({vx}, {vy}))")]
    NonFinite { x: f64, y: f64, vx: f64, vy: f64 },

    #[error("ray launched with zero velocity")]
    Stationary,
}

/// Invalid run configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown scenario '{0}' (options: all, orbiting, point-source, parallel)")]
    UnknownScenario(String),

    #[error("{flag} must be positive, got {value}")]
    NotPositive { flag: String, value: f64 },

    #[error("unknown flag '{0}'")]
    UnknownFlag(String),
}

/// Failure writing a snapshot.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("failed to write snapshot to {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
