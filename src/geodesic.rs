//! Null geodesic integration in the Schwarzschild equatorial plane.
//!
//! The state is (r, φ, ṙ, φ̇) with dots meaning d/dλ. Energy enters the
//! radial equation as a parameter through ṫ = E/f; it is never stepped.

use crate::metrics::SchwarzschildParams;
use crate::ray::{PolarState, RayState};

/// Fixed-step RK4 integrator for light rays around one black hole.
#[derive(Debug, Clone, Copy)]
pub struct GeodesicIntegrator {
    metric: SchwarzschildParams,
    dlambda: f64,
}

impl GeodesicIntegrator {
    pub fn new(metric: SchwarzschildParams, dlambda: f64) -> Self {
        Self { metric, dlambda }
    }

    pub fn metric(&self) -> &SchwarzschildParams {
        &self.metric
    }

    /// Geodesic right-hand side [ṙ, φ̇, r̈, φ̈] for the given state and energy.
    ///
    /// Singular at r = rs. Callers keep r above the capture radius.
    pub fn rhs(&self, state: &PolarState, energy: f64) -> PolarState {
        let rs = self.metric.rs;
        let PolarState { r, dr, dphi, .. } = *state;
        let f = self.metric.lapse(r);
        let dt_dlambda = energy / f;

        let ddr = -(rs / (2.0 * r * r)) * f * (dt_dlambda * dt_dlambda)
            + (rs / (2.0 * r * r * f)) * (dr * dr)
            + (r - rs) * (dphi * dphi);
        let ddphi = -2.0 * dr * dphi / r;

        PolarState::new(dr, dphi, ddr, ddphi)
    }

    /// One classical RK4 step of size dλ, without touching any ray.
    pub fn rk4(&self, y0: PolarState, energy: f64) -> PolarState {
        let h = self.dlambda;

        // k1 = f(y0)
        let k1 = self.rhs(&y0, energy);
        // k2 = f(y0 + k1*h/2)
        let k2 = self.rhs(&(y0 + k1 * (h / 2.0)), energy);
        // k3 = f(y0 + k2*h/2)
        let k3 = self.rhs(&(y0 + k2 * (h / 2.0)), energy);
        // k4 = f(y0 + k3*h)
        let k4 = self.rhs(&(y0 + k3 * h), energy);

        y0 + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0)
    }

    /// Advance `ray` by one step, appending to its trail and refreshing its
    /// deflection.
    ///
    /// A captured ray is left exactly as it is. Capture is judged against
    /// this integrator's metric, and a step that runs into the singularity
    /// captures the ray instead of moving it. Returns whether the ray moved.
    pub fn step(&self, ray: &mut RayState) -> bool {
        if ray.is_captured() {
            return false;
        }
        if ray.r() <= self.metric.capture_radius() {
            ray.swallow();
            return false;
        }

        let next = self.rk4(ray.polar(), ray.energy());
        if !next.is_finite() {
            log::debug!(
                "{} ray hit the singularity mid-step from r = {:.4e}; captured",
                ray.scenario().name(),
                ray.r()
            );
            ray.swallow();
            return false;
        }

        ray.advance(next);
        true
    }
}
