//! Shared fixtures for integration tests.

#![allow(dead_code)]

use glam::DVec2;
use lightbend::{GeodesicIntegrator, RayScenario, RayState, SchwarzschildParams};

/// Geometrised units: rs = 1, c = 1.
pub fn unit_metric() -> SchwarzschildParams {
    SchwarzschildParams::new(1.0)
}

pub fn launch(metric: &SchwarzschildParams, pos: DVec2, vel: DVec2) -> RayState {
    RayState::new(metric, pos, vel, RayScenario::Parallel, 0).unwrap()
}

/// Launch a unit-speed ray travelling +x from `x0` whose conserved L/E
/// equals `b`. The launch height is refined until the curvature at the
/// start point is accounted for.
pub fn launch_with_impact(metric: &SchwarzschildParams, b: f64, x0: f64) -> RayState {
    let mut y = b;
    for _ in 0..20 {
        let ray = launch(metric, DVec2::new(x0, y), DVec2::X);
        y *= b / ray.impact_parameter();
    }
    launch(metric, DVec2::new(x0, y), DVec2::X)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    Captured,
    Escaped,
    InFlight,
}

/// Step until the ray is captured, escapes or `max_steps` runs out,
/// calling `inspect` after every step.
pub fn integrate_until_done(
    integrator: &GeodesicIntegrator,
    ray: &mut RayState,
    max_distance: f64,
    max_steps: usize,
    mut inspect: impl FnMut(&RayState),
) -> Fate {
    for _ in 0..max_steps {
        if ray.is_captured() {
            return Fate::Captured;
        }
        if ray.has_escaped(max_distance) {
            return Fate::Escaped;
        }
        integrator.step(ray);
        inspect(ray);
    }
    Fate::InFlight
}

/// Change in direction of travel since launch, wrapped to (-π, π].
pub fn bending_angle(initial_velocity: DVec2, ray: &RayState) -> f64 {
    let v = ray.velocity();
    let mut d = v.y.atan2(v.x) - initial_velocity.y.atan2(initial_velocity.x);
    while d > std::f64::consts::PI {
        d -= std::f64::consts::TAU;
    }
    while d <= -std::f64::consts::PI {
        d += std::f64::consts::TAU;
    }
    d
}
