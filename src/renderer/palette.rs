//! Colour coding for ray trails.
//!
//! Trail colour depends on the launch group and, for the fanned and
//! parallel groups, on how far the ray has been bent.

use std::f64::consts::PI;

use crate::ray::RayScenario;

pub type Color = [f32; 3];

pub const BACKGROUND: Color = [0.02, 0.02, 0.05];
pub const PHOTON_SPHERE: Color = [0.0, 0.8, 0.8];
pub const EVENT_HORIZON: Color = [0.0, 0.0, 0.0];
pub const POINT_SOURCE_MARKER: Color = [0.5, 1.0, 0.0];

/// Deflection mapped onto [0, 1], saturating at π.
pub fn deflection_t(deflection: f64) -> f32 {
    (deflection / PI).clamp(0.0, 1.0) as f32
}

pub fn trail_color(scenario: RayScenario, deflection: f64) -> Color {
    let t = deflection_t(deflection);
    match scenario {
        // green → yellow
        RayScenario::PointSource => [0.5 + 0.5 * t, 1.0, 0.0],
        RayScenario::Orbiting => [1.0, 0.2, 1.0],
        // blue → red
        RayScenario::Parallel => [t, 0.5 * (1.0 - t), 1.0 - t],
    }
}

/// Colour of the dot marking a ray's current position.
pub fn head_color(scenario: RayScenario) -> Color {
    match scenario {
        RayScenario::PointSource => [0.5, 1.0, 0.0],
        RayScenario::Orbiting => [1.0, 0.2, 1.0],
        RayScenario::Parallel => [1.0, 1.0, 0.0],
    }
}

/// Opacity of trail vertex `index` out of `len`: 0.2 at the oldest point,
/// 1.0 at the newest.
pub fn trail_alpha(index: usize, len: usize) -> f32 {
    if len < 2 {
        return 1.0;
    }
    0.2 + 0.8 * index as f32 / (len - 1) as f32
}
