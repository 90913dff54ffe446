use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::geo::Projected;

fn default_drifter_cap() -> usize {
    300
}

fn default_spawn_probability() -> f64 {
    0.3
}

fn default_lifetime_min() -> u32 {
    500
}

fn default_lifetime_max() -> u32 {
    700
}

fn default_seed_position() -> Projected {
    Projected::new(4_940_278.0, 6_233_593.0)
}

fn default_flight_target() -> usize {
    300
}

fn default_flight_speed() -> f64 {
    220.0
}

fn default_initial_flights() -> usize {
    50
}

fn default_storm_count() -> usize {
    20
}

fn default_storm_speed() -> f64 {
    10.0
}

fn default_placement_degrees() -> i64 {
    70
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub seed: u64,
    #[serde(default)]
    pub ticks: Option<u64>,
    pub data: DataFiles,
    #[serde(default)]
    pub params: Params,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataFiles {
    pub wind: PathBuf,
    pub helipads: PathBuf,
    #[serde(default)]
    pub cities: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Params {
    #[serde(default)]
    pub drifters: DrifterParams,
    #[serde(default)]
    pub flights: FlightParams,
    #[serde(default)]
    pub storms: StormParams,
    #[serde(default)]
    pub bounds: Bounds,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DrifterParams {
    #[serde(default = "default_drifter_cap")]
    pub cap: usize,
    #[serde(default = "default_spawn_probability")]
    pub spawn_probability: f64,
    #[serde(default = "default_lifetime_min")]
    pub lifetime_min: u32,
    #[serde(default = "default_lifetime_max")]
    pub lifetime_max: u32,
    /// Position of the single drifter seeded at initialization.
    #[serde(default = "default_seed_position")]
    pub seed_position: Projected,
}

impl Default for DrifterParams {
    fn default() -> Self {
        Self {
            cap: default_drifter_cap(),
            spawn_probability: default_spawn_probability(),
            lifetime_min: default_lifetime_min(),
            lifetime_max: default_lifetime_max(),
            seed_position: default_seed_position(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlightParams {
    /// Roster size the replenishment step tops up toward.
    #[serde(default = "default_flight_target")]
    pub target: usize,
    #[serde(default = "default_flight_speed")]
    pub speed: f64,
    #[serde(default = "default_initial_flights")]
    pub initial: usize,
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            target: default_flight_target(),
            speed: default_flight_speed(),
            initial: default_initial_flights(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StormParams {
    #[serde(default = "default_storm_count")]
    pub count: usize,
    #[serde(default = "default_storm_speed")]
    pub speed: f64,
    /// Storms are placed at integer degrees in [-placement, placement) on
    /// both axes.
    #[serde(default = "default_placement_degrees")]
    pub placement_degrees: i64,
}

impl Default for StormParams {
    fn default() -> Self {
        Self {
            count: default_storm_count(),
            speed: default_storm_speed(),
            placement_degrees: default_placement_degrees(),
        }
    }
}

/// Projected bounding box drifters spawn into.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Bounds {
    pub left: i64,
    pub right: i64,
    pub down: i64,
    pub up: i64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            left: 0,
            right: 37_257_242,
            down: -15_000_000,
            up: 15_000_000,
        }
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(scenario)
    }
}

impl Scenario {
    pub fn ticks(&self, override_ticks: Option<u64>) -> u64 {
        override_ticks.or(self.ticks).unwrap_or(600)
    }
}
