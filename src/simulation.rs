//! Frame-by-frame orchestration of a ray population.
//!
//! Which rays move on a given frame is decided from each ray's phase as of
//! that frame.

use crate::config::SimulationConfig;
use crate::geodesic::GeodesicIntegrator;
use crate::ray::{RayPhase, RayState};

/// Head count of the population at one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCensus {
    pub frame: u64,
    pub pending: usize,
    /// Rays whose start frame has been reached, whatever their fate
    pub activated: usize,
    pub in_flight: usize,
    pub captured: usize,
    pub escaped: usize,
}

/// Drives the ray population one frame at a time.
///
/// Rays are visited in insertion order every frame. A ray gets one RK4 step
/// per frame while it is active and neither captured nor escaped.
pub struct SimulationClock {
    rays: Vec<RayState>,
    integrator: GeodesicIntegrator,
    max_distance: f64,
    frame: u64,
}

impl SimulationClock {
    pub fn new(rays: Vec<RayState>, integrator: GeodesicIntegrator, max_distance: f64) -> Self {
        Self {
            rays,
            integrator,
            max_distance,
            frame: 0,
        }
    }

    pub fn from_config(
        rays: Vec<RayState>,
        integrator: GeodesicIntegrator,
        config: &SimulationConfig,
    ) -> Self {
        Self::new(rays, integrator, config.max_distance)
    }

    /// The frame the next `tick` will integrate.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn rays(&self) -> &[RayState] {
        &self.rays
    }

    /// Integrate the current frame and advance the counter.
    ///
    /// Returns how many rays were stepped.
    pub fn tick(&mut self) -> usize {
        let frame = self.frame;
        let mut stepped = 0;

        for ray in self.rays.iter_mut() {
            if ray.phase(frame, self.max_distance) != RayPhase::Active {
                continue;
            }
            if self.integrator.step(ray) {
                stepped += 1;
            }
        }

        self.frame += 1;
        stepped
    }

    /// Classify every ray as of `frame`.
    pub fn census(&self, frame: u64) -> FrameCensus {
        let mut census = FrameCensus {
            frame,
            ..Default::default()
        };

        for ray in &self.rays {
            match ray.phase(frame, self.max_distance) {
                RayPhase::Pending => census.pending += 1,
                RayPhase::Active => census.in_flight += 1,
                RayPhase::Captured => census.captured += 1,
                RayPhase::Escaped => census.escaped += 1,
            }
        }
        census.activated = census.in_flight + census.captured + census.escaped;
        census
    }

    /// Run `frames` ticks, logging a census every `progress_interval` frames.
    pub fn run(&mut self, frames: u64, progress_interval: u64) -> FrameCensus {
        for _ in 0..frames {
            let frame = self.frame;
            self.tick();

            if progress_interval > 0 && frame % progress_interval == 0 {
                let census = self.census(frame);
                log::info!(
                    "Frame {}: {} activated, {} in flight, {} captured, {} escaped",
                    frame,
                    census.activated,
                    census.in_flight,
                    census.captured,
                    census.escaped
                );
            }
        }

        self.census(self.frame)
    }
}
