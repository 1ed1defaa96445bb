use lightbend::config::{self, RunConfig};
use lightbend::renderer::{snapshot, Scene, StarField, Viewport};
use lightbend::scenarios::ScenarioBuilder;
use lightbend::{GeodesicIntegrator, RayScenario, SchwarzschildParams, SimulationClock};

fn run(config: &RunConfig) -> lightbend::Result<()> {
    let metric = SchwarzschildParams::from_constants(&config.constants);
    log::info!("Schwarzschild radius: {:.3} km", metric.rs / 1000.0);
    log::info!("Speed of light: {:.6} * 10^8 m/s", config.constants.c / 1e8);
    log::info!(
        "Photon sphere: {:.3} km, critical impact parameter: {:.3} km",
        metric.photon_sphere_radius() / 1000.0,
        metric.critical_impact_parameter() / 1000.0
    );

    let builder = ScenarioBuilder::new(
        &metric,
        &config.constants,
        &config.view,
        &config.schedule,
    );
    let rays = builder.build(&config.scenarios)?;

    let integrator = GeodesicIntegrator::new(metric, config.simulation.dlambda);
    let mut clock = SimulationClock::from_config(rays, integrator, &config.simulation);

    let census = clock.run(config.simulation.frames, config.simulation.progress_interval);
    log::info!(
        "Finished after {} frames: {} in flight, {} captured, {} escaped, {} pending",
        census.frame,
        census.in_flight,
        census.captured,
        census.escaped,
        census.pending
    );

    if let Some(output) = &config.output {
        let stars = StarField::from_config(&config.view);
        let point_source = config
            .scenarios
            .contains(&RayScenario::PointSource)
            .then(|| builder.point_source_origin());
        let scene = Scene {
            metric: &metric,
            viewport: Viewport::from_config(&config.view),
            stars: &stars,
            point_source,
        };
        // The last integrated frame, not the one about to run
        let frame = clock.frame().saturating_sub(1);
        let canvas = scene.render(clock.rays(), frame);
        snapshot::save(&canvas, output)?;
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match config::parse_args(std::env::args().skip(1)) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{}", config::USAGE);
            return;
        }
        Err(e) => {
            eprintln!("{}\n\n{}", e, config::USAGE);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
