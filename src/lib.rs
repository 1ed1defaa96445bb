//! lightbend - light rays around a Schwarzschild black hole.
//!
//! Rays are launched from Cartesian initial conditions, integrated along
//! planar null geodesics with fixed-step RK4, and classified each frame as
//! pending, in flight, captured or escaped.

pub mod config;
pub mod error;
pub mod geodesic;
pub mod metrics;
pub mod ray;
pub mod renderer;
pub mod scenarios;
pub mod simulation;

pub use error::{Error, Result};
pub use geodesic::GeodesicIntegrator;
pub use metrics::{PhysicalConstants, SchwarzschildParams};
pub use ray::{PolarState, RayPhase, RayScenario, RayState};
pub use simulation::{FrameCensus, SimulationClock};
