use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rotorfield::{
    engine::{EngineBuilder, EngineSettings},
    rng::RngManager,
    scenario::ScenarioLoader,
    sources,
    systems::{DrifterSystem, FlightSystem, StormSystem},
    world::World,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Airspace traffic simulation runner")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/volga.yaml")]
    scenario: PathBuf,

    /// Override tick count (uses scenario default when omitted)
    #[arg(long)]
    ticks: Option<u64>,

    /// Override the scenario seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;
    let seed = cli.seed.unwrap_or(scenario.seed);
    let ticks = scenario.ticks(cli.ticks);

    let wind = sources::load_wind_records(&scenario.data.wind)?;
    let pads = sources::load_sites(&scenario.data.helipads)?;
    let cities = match &scenario.data.cities {
        Some(path) => sources::load_sites(path)?,
        None => Vec::new(),
    };

    let mut rng = RngManager::new(seed);
    let mut world = World::new(scenario.params.clone());
    let mut setup_rng = rng.stream("setup");
    world.populate(&wind, &pads, &cities, &mut setup_rng);
    drop(setup_rng);

    let settings = EngineSettings {
        scenario_name: scenario.name.clone(),
    };
    let mut engine = EngineBuilder::new(settings, rng)
        .with_system(DrifterSystem::new())
        .with_system(FlightSystem::new())
        .with_system(StormSystem::new())
        .build();

    engine.run(&mut world, ticks)?;
    println!(
        "Scenario '{}' completed for {} ticks. Drifters aloft: {}, flights airborne: {}.",
        scenario.name,
        ticks,
        world.drifter_count(),
        world.flight_count()
    );
    Ok(())
}
