//! Initial conditions for the three launch groups.
//!
//! All rays travel at c. Positions are in metres relative to the hole.

use std::f64::consts::PI;

use glam::DVec2;

use crate::config::{ScheduleConfig, ViewConfig};
use crate::error::LaunchError;
use crate::metrics::{PhysicalConstants, SchwarzschildParams};
use crate::ray::{RayScenario, RayState};

/// Launch height of the orbiting ray in units of rs. From its start point
/// the conserved L/E comes out within 1e-7 of b_crit, so it winds around
/// the photon sphere several times.
pub const ORBITING_IMPACT_RS: f64 = 2.577934;
pub const POINT_SOURCE_RAYS: usize = 25;
/// Full opening angle of the point-source fan
pub const POINT_SOURCE_SPREAD: f64 = PI / 3.0;
pub const PARALLEL_RAYS: usize = 70;
pub const PARALLEL_START_X: f64 = -1e11;

/// Builds launch groups against one black hole and one view.
pub struct ScenarioBuilder<'a> {
    metric: &'a SchwarzschildParams,
    constants: &'a PhysicalConstants,
    view: &'a ViewConfig,
    schedule: &'a ScheduleConfig,
}

impl<'a> ScenarioBuilder<'a> {
    pub fn new(
        metric: &'a SchwarzschildParams,
        constants: &'a PhysicalConstants,
        view: &'a ViewConfig,
        schedule: &'a ScheduleConfig,
    ) -> Self {
        Self {
            metric,
            constants,
            view,
            schedule,
        }
    }

    /// Where the point-source fan is emitted from.
    pub fn point_source_origin(&self) -> DVec2 {
        DVec2::new(-0.95 * self.view.view_width, 0.85 * self.view.view_height)
    }

    /// Build every requested group, in the order given.
    pub fn build(&self, scenarios: &[RayScenario]) -> Result<Vec<RayState>, LaunchError> {
        let mut rays = Vec::new();
        for &scenario in scenarios {
            let group = self.build_group(scenario)?;
            log::info!(
                "{} scenario: {} rays, starting at frame {}",
                scenario.name(),
                group.len(),
                self.schedule.start_frame(scenario)
            );
            rays.extend(group);
        }
        log::info!("Total: {} rays", rays.len());
        Ok(rays)
    }

    pub fn build_group(&self, scenario: RayScenario) -> Result<Vec<RayState>, LaunchError> {
        match scenario {
            RayScenario::Orbiting => self.orbiting().map(|ray| vec![ray]),
            RayScenario::PointSource => self.point_source(),
            RayScenario::Parallel => self.parallel(),
        }
    }

    fn launch(&self, pos: DVec2, vel: DVec2, scenario: RayScenario) -> Result<RayState, LaunchError> {
        RayState::new(
            self.metric,
            pos,
            vel,
            scenario,
            self.schedule.start_frame(scenario),
        )
    }

    fn orbiting(&self) -> Result<RayState, LaunchError> {
        let pos = DVec2::new(
            -0.9 * self.view.view_width,
            ORBITING_IMPACT_RS * self.metric.rs,
        );
        let vel = DVec2::new(self.constants.c, 0.0);
        log::debug!(
            "orbiting ray at x = {:.3} Gm, impact parameter = {} rs",
            pos.x / 1e9,
            ORBITING_IMPACT_RS
        );
        self.launch(pos, vel, RayScenario::Orbiting)
    }

    fn point_source(&self) -> Result<Vec<RayState>, LaunchError> {
        let source = self.point_source_origin();
        let to_hole = -source;
        let base_angle = to_hole.y.atan2(to_hole.x);
        log::debug!(
            "point source at ({:.3}, {:.3}) Gm, aiming {:.2}°",
            source.x / 1e9,
            source.y / 1e9,
            base_angle.to_degrees()
        );

        (0..POINT_SOURCE_RAYS)
            .map(|i| {
                let t = i as f64 / (POINT_SOURCE_RAYS - 1) as f64;
                let angle = base_angle - POINT_SOURCE_SPREAD / 2.0 + POINT_SOURCE_SPREAD * t;
                let vel = DVec2::from_angle(angle) * self.constants.c;
                self.launch(source, vel, RayScenario::PointSource)
            })
            .collect()
    }

    fn parallel(&self) -> Result<Vec<RayState>, LaunchError> {
        let vel = DVec2::new(self.constants.c, 0.0);
        let h = self.view.view_height;

        (0..PARALLEL_RAYS)
            .map(|i| {
                let t = i as f64 / (PARALLEL_RAYS - 1) as f64;
                let y = -h + t * 2.0 * h;
                if i % 10 == 0 {
                    log::debug!(
                        "parallel ray {}: y = {:.3} Gm, impact = {:.2} rs",
                        i,
                        y / 1e9,
                        y.abs() / self.metric.rs
                    );
                }
                self.launch(DVec2::new(PARALLEL_START_X, y), vel, RayScenario::Parallel)
            })
            .collect()
    }
}
