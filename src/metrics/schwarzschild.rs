/// Physical constants the black hole is built from (SI units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Speed of light (m/s)
    pub c: f64,
    /// Gravitational constant (m³·kg⁻¹·s⁻²)
    pub g: f64,
    /// Black hole mass (kg)
    pub mass: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            c: 299_792_458.0,
            g: 6.67430e-11,
            // Sagittarius A*
            mass: 8.54e36,
        }
    }
}

/// Ratio of the capture threshold to rs. Stepping any closer makes the
/// RHS blow up through the 1/f terms.
pub const CAPTURE_FACTOR: f64 = 1.01;

/// Parameters for the Schwarzschild metric.
///
/// ds² = -(1 - rs/r)dt² + (1 - rs/r)⁻¹dr² + r²(dθ² + sin²θ dφ²)
///
/// Computed once at startup and handed out by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchwarzschildParams {
    /// Schwarzschild radius rs = 2GM/c² (natural units: rs = 1)
    pub rs: f64,
}

impl Default for SchwarzschildParams {
    fn default() -> Self {
        Self { rs: 1.0 }
    }
}

impl SchwarzschildParams {
    pub fn new(rs: f64) -> Self {
        Self { rs }
    }

    pub fn from_constants(constants: &PhysicalConstants) -> Self {
        Self {
            rs: 2.0 * constants.g * constants.mass / (constants.c * constants.c),
        }
    }

    /// Metric factor f = 1 - rs/r.
    #[inline]
    pub fn lapse(&self, r: f64) -> f64 {
        1.0 - self.rs / r
    }

    /// Critical impact parameter for the photon sphere: b_crit = 3√3/2 * rs
    pub fn critical_impact_parameter(&self) -> f64 {
        3.0 * 3.0_f64.sqrt() / 2.0 * self.rs
    }

    /// Photon sphere radius: r = 3/2 * rs
    pub fn photon_sphere_radius(&self) -> f64 {
        1.5 * self.rs
    }

    /// Radius at or below which a ray counts as captured.
    pub fn capture_radius(&self) -> f64 {
        CAPTURE_FACTOR * self.rs
    }
}
