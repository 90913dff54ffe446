//! Tick driver.
//!
//! Systems run in registration order inside every tick; the order is fixed
//! and total, so all of one system's work completes before the next begins.
//! The simulation advances only when the caller issues ticks; stopping the
//! driver is the only way to stop.

use anyhow::Result;

use crate::rng::{RngManager, SystemRng};
use crate::world::World;

pub struct EngineSettings {
    pub scenario_name: String,
}

pub struct EngineBuilder {
    settings: EngineSettings,
    rng: RngManager,
    systems: Vec<Box<dyn System>>,
}

impl EngineBuilder {
    /// The manager is handed in rather than built from a seed so setup code
    /// can draw from the same seed path before the first tick.
    pub fn new(settings: EngineSettings, rng: RngManager) -> Self {
        Self {
            settings,
            rng,
            systems: Vec::new(),
        }
    }

    pub fn with_system(mut self, system: impl System + 'static) -> Self {
        self.systems.push(Box::new(system));
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            rng: self.rng,
            systems: self.systems,
            settings: self.settings,
        }
    }
}

pub struct Engine {
    rng: RngManager,
    systems: Vec<Box<dyn System>>,
    settings: EngineSettings,
}

impl Engine {
    pub fn run(&mut self, world: &mut World, ticks: u64) -> Result<()> {
        for _ in 0..ticks {
            let current_tick = world.tick();
            for system in &mut self.systems {
                let mut rng_stream = self.rng.stream(system.name());
                let ctx = SystemContext {
                    tick: current_tick,
                    scenario_name: &self.settings.scenario_name,
                };
                system.run(&ctx, world, &mut rng_stream)?;
            }
            world.advance_time();
        }
        Ok(())
    }
}

pub struct SystemContext<'a> {
    pub tick: u64,
    pub scenario_name: &'a str,
}

pub trait System {
    fn name(&self) -> &str;
    fn run(&mut self, ctx: &SystemContext, world: &mut World, rng: &mut SystemRng<'_>)
        -> Result<()>;
}
