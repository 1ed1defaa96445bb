//! Full-population runs through the simulation clock.

mod common;

use lightbend::config::RunConfig;
use lightbend::scenarios::ScenarioBuilder;
use lightbend::{GeodesicIntegrator, RayPhase, SchwarzschildParams, SimulationClock};

fn default_clock() -> (RunConfig, SimulationClock) {
    let config = RunConfig::default();
    let metric = SchwarzschildParams::from_constants(&config.constants);
    let rays = ScenarioBuilder::new(&metric, &config.constants, &config.view, &config.schedule)
        .build(&config.scenarios)
        .unwrap();
    let integrator = GeodesicIntegrator::new(metric, config.simulation.dlambda);
    let clock = SimulationClock::from_config(rays, integrator, &config.simulation);
    (config, clock)
}

#[test]
fn test_lifecycle_is_monotonic_over_default_run() {
    let (config, mut clock) = default_clock();
    let max_distance = config.simulation.max_distance;
    let n = clock.rays().len();

    let mut phases = vec![RayPhase::Pending; n];
    let mut trail_lens: Vec<usize> = clock.rays().iter().map(|r| r.trail().len()).collect();

    for _ in 0..2_000 {
        let frame = clock.frame();
        clock.tick();

        for (i, ray) in clock.rays().iter().enumerate() {
            let phase = ray.phase(frame, max_distance);
            let len = ray.trail().len();

            match phases[i] {
                RayPhase::Captured => {
                    assert_eq!(phase, RayPhase::Captured, "ray {} left capture", i);
                    assert_eq!(len, trail_lens[i], "captured ray {} grew", i);
                }
                RayPhase::Escaped => {
                    assert_eq!(phase, RayPhase::Escaped, "ray {} came back", i);
                    assert_eq!(len, trail_lens[i], "escaped ray {} grew", i);
                }
                RayPhase::Active => assert_ne!(phase, RayPhase::Pending),
                RayPhase::Pending => {}
            }

            if frame < ray.start_frame() {
                assert_eq!(phase, RayPhase::Pending);
                assert_eq!(len, 1, "ray {} moved before activation", i);
            }

            phases[i] = phase;
            trail_lens[i] = len;
        }
    }
}

#[test]
fn test_activation_follows_schedule() {
    let (config, mut clock) = default_clock();
    let schedule = &config.schedule;

    // Only the orbiting ray is live before the point source fires
    clock.run(schedule.point_source_start, 0);
    let census = clock.census(schedule.point_source_start - 1);
    assert_eq!(census.activated, 1);

    let census = clock.census(schedule.point_source_start);
    assert_eq!(census.activated, 1 + lightbend::scenarios::POINT_SOURCE_RAYS);

    let census = clock.census(schedule.parallel_start);
    assert_eq!(census.pending, 0);
    assert_eq!(census.activated, clock.rays().len());
}

#[test]
fn test_population_settles() {
    let (_, mut clock) = default_clock();
    let census = clock.run(3_000, 0);

    assert_eq!(census.pending, 0);
    assert_eq!(
        census.captured + census.escaped + census.in_flight,
        clock.rays().len()
    );
    // Rays aimed at the hole fall in; the wide parallel ones leave
    assert!(census.captured > 0);
    assert!(census.escaped > 0);
}
