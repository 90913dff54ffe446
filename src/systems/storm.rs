use anyhow::Result;

use crate::{
    engine::{System, SystemContext},
    entities::Storm,
    rng::SystemRng,
    world::World,
};

/// Step 6 of the tick: every storm drifts along its axis.
pub struct StormSystem;

impl StormSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StormSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for StormSystem {
    fn name(&self) -> &str {
        "storm"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        world: &mut World,
        _rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        for (_, storm) in world.registry.iter_mut::<Storm>() {
            storm.advance();
        }
        Ok(())
    }
}
