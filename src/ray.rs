//! Per-ray state in Schwarzschild coordinates.
//!
//! A ray is launched from a Cartesian position and velocity, converted to
//! polar form, and carries its conserved energy and angular momentum for
//! the rest of its life. Only the geodesic integrator moves it.

use std::f64::consts::{PI, TAU};
use std::ops::{Add, Mul};

use glam::DVec2;

use crate::error::LaunchError;
use crate::metrics::SchwarzschildParams;

/// Which launch group a ray belongs to. Only used for colour coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RayScenario {
    /// Parallel rays from the left side
    Parallel,
    /// Fan of rays from a single point
    PointSource,
    /// Single ray skimming the photon sphere
    Orbiting,
}

impl RayScenario {
    pub const ALL: [RayScenario; 3] = [
        RayScenario::Orbiting,
        RayScenario::PointSource,
        RayScenario::Parallel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RayScenario::Parallel => "parallel",
            RayScenario::PointSource => "point-source",
            RayScenario::Orbiting => "orbiting",
        }
    }
}

/// Where a ray sits in its lifecycle for a given frame.
///
/// `Captured` and `Escaped` are absorbing: the integrator never moves a ray
/// out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayPhase {
    Pending,
    Active,
    Captured,
    Escaped,
}

/// Point in the planar phase space (r, φ, dr/dλ, dφ/dλ).
///
/// Also used for derivatives: the RHS of the geodesic equations has the
/// same four components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarState {
    pub r: f64,
    pub phi: f64,
    pub dr: f64,
    pub dphi: f64,
}

impl PolarState {
    pub fn new(r: f64, phi: f64, dr: f64, dphi: f64) -> Self {
        Self { r, phi, dr, dphi }
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.r * self.phi.cos(), self.r * self.phi.sin())
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.phi.is_finite() && self.dr.is_finite() && self.dphi.is_finite()
    }
}

impl Add for PolarState {
    type Output = PolarState;

    fn add(self, rhs: PolarState) -> PolarState {
        PolarState {
            r: self.r + rhs.r,
            phi: self.phi + rhs.phi,
            dr: self.dr + rhs.dr,
            dphi: self.dphi + rhs.dphi,
        }
    }
}

impl Mul<f64> for PolarState {
    type Output = PolarState;

    fn mul(self, k: f64) -> PolarState {
        PolarState {
            r: self.r * k,
            phi: self.phi * k,
            dr: self.dr * k,
            dphi: self.dphi * k,
        }
    }
}

/// Net angular change folded into [0, π].
///
/// Multiple windings are reduced modulo 2π first, so a ray that has gone
/// round the hole once reads the same as one that never turned.
pub fn wrap_deflection(phi: f64, initial_phi: f64) -> f64 {
    let d = (phi - initial_phi).abs().rem_euclid(TAU);
    if d > PI {
        TAU - d
    } else {
        d
    }
}

/// A single light ray.
#[derive(Debug, Clone)]
pub struct RayState {
    state: PolarState,
    energy: f64,
    angular_momentum: f64,
    trail: Vec<DVec2>,
    initial_phi: f64,
    deflection: f64,
    scenario: RayScenario,
    start_frame: u64,
    metric: SchwarzschildParams,
    /// Set when a step could not be taken because the ray reached the horizon
    swallowed: bool,
}

impl RayState {
    /// Launch a ray from a Cartesian position (m) and velocity (m/s).
    ///
    /// Launching at or inside the horizon is allowed but makes the
    /// conserved energy meaningless; it is logged, not rejected.
    pub fn new(
        metric: &SchwarzschildParams,
        position: DVec2,
        velocity: DVec2,
        scenario: RayScenario,
        start_frame: u64,
    ) -> Result<Self, LaunchError> {
        if !position.is_finite() || !velocity.is_finite() {
            return Err(LaunchError::NonFinite {
                x: position.x,
                y: position.y,
                vx: velocity.x,
                vy: velocity.y,
            });
        }
        if position == DVec2::ZERO {
            return Err(LaunchError::AtOrigin);
        }
        if velocity == DVec2::ZERO {
            return Err(LaunchError::Stationary);
        }

        let r = position.length();
        let phi = position.y.atan2(position.x);
        let (sin_phi, cos_phi) = phi.sin_cos();

        let dr = velocity.x * cos_phi + velocity.y * sin_phi;
        let dphi = (-velocity.x * sin_phi + velocity.y * cos_phi) / r;

        if r <= metric.rs {
            log::warn!(
                "{} ray launched at r = {:.4e} m, inside rs = {:.4e} m",
                scenario.name(),
                r,
                metric.rs
            );
        }

        let state = PolarState::new(r, phi, dr, dphi);
        let angular_momentum = r * r * dphi;
        let energy = null_energy(metric, &state);

        Ok(Self {
            state,
            energy,
            angular_momentum,
            trail: vec![position],
            initial_phi: phi,
            deflection: 0.0,
            scenario,
            start_frame,
            metric: *metric,
            swallowed: false,
        })
    }

    pub fn r(&self) -> f64 {
        self.state.r
    }

    pub fn phi(&self) -> f64 {
        self.state.phi
    }

    pub fn dr(&self) -> f64 {
        self.state.dr
    }

    pub fn dphi(&self) -> f64 {
        self.state.dphi
    }

    pub fn polar(&self) -> PolarState {
        self.state
    }

    /// Conserved energy per unit mass, fixed at launch.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Conserved angular momentum per unit mass, fixed at launch.
    pub fn angular_momentum(&self) -> f64 {
        self.angular_momentum
    }

    pub fn trail(&self) -> &[DVec2] {
        &self.trail
    }

    pub fn initial_phi(&self) -> f64 {
        self.initial_phi
    }

    /// Net angle swept since launch, folded into [0, π].
    pub fn deflection(&self) -> f64 {
        self.deflection
    }

    /// Signed, unwrapped angle swept since launch. Grows past 2π for rays
    /// that wind around the photon sphere.
    pub fn winding(&self) -> f64 {
        self.state.phi - self.initial_phi
    }

    pub fn scenario(&self) -> RayScenario {
        self.scenario
    }

    pub fn start_frame(&self) -> u64 {
        self.start_frame
    }

    /// Current Cartesian position.
    pub fn position(&self) -> DVec2 {
        self.state.position()
    }

    /// Current Cartesian velocity (d/dλ).
    pub fn velocity(&self) -> DVec2 {
        let PolarState { r, phi, dr, dphi } = self.state;
        let (sin_phi, cos_phi) = phi.sin_cos();
        DVec2::new(
            dr * cos_phi - r * dphi * sin_phi,
            dr * sin_phi + r * dphi * cos_phi,
        )
    }

    /// b = |L| / E
    pub fn impact_parameter(&self) -> f64 {
        self.angular_momentum.abs() / self.energy
    }

    /// Energy recomputed from the current state. Compare against
    /// [`RayState::energy`] to measure integrator drift.
    pub fn current_energy(&self) -> f64 {
        null_energy(&self.metric, &self.state)
    }

    /// Angular momentum recomputed from the current state.
    pub fn current_angular_momentum(&self) -> f64 {
        self.state.r * self.state.r * self.state.dphi
    }

    pub fn is_active(&self, frame: u64) -> bool {
        frame >= self.start_frame
    }

    pub fn is_captured(&self) -> bool {
        self.swallowed || self.state.r <= self.metric.capture_radius()
    }

    pub fn has_escaped(&self, max_distance: f64) -> bool {
        self.state.r > max_distance
    }

    pub fn phase(&self, frame: u64, max_distance: f64) -> RayPhase {
        if !self.is_active(frame) {
            RayPhase::Pending
        } else if self.is_captured() {
            RayPhase::Captured
        } else if self.has_escaped(max_distance) {
            RayPhase::Escaped
        } else {
            RayPhase::Active
        }
    }

    /// Move to `next`, record the new position and refresh the deflection.
    pub(crate) fn advance(&mut self, next: PolarState) {
        self.state = next;
        self.trail.push(next.position());
        self.update_deflection();
    }

    /// Mark the ray captured where it stands. Its state and trail are kept.
    pub(crate) fn swallow(&mut self) {
        self.swallowed = true;
    }

    fn update_deflection(&mut self) {
        self.deflection = wrap_deflection(self.state.phi, self.initial_phi);
    }
}

/// E = f · dt/dλ, with dt/dλ fixed by the null condition.
fn null_energy(metric: &SchwarzschildParams, state: &PolarState) -> f64 {
    let PolarState { r, dr, dphi, .. } = *state;
    let f = metric.lapse(r);
    let dt_dlambda = (dr * dr / (f * f) + r * r * dphi * dphi / f).sqrt();
    f * dt_dlambda
}
