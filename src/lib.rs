pub mod engine;
pub mod entities;
pub mod error;
pub mod geo;
pub mod registry;
pub mod rng;
pub mod scenario;
pub mod sources;
pub mod systems;
pub mod wind;
pub mod world;

pub use engine::{Engine, EngineBuilder, EngineSettings, System, SystemContext};
pub use error::SimError;
pub use rng::RngManager;
pub use scenario::{Scenario, ScenarioLoader};
pub use world::World;
