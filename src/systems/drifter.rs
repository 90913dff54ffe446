use anyhow::Result;
use tracing::debug;

use crate::{
    engine::{System, SystemContext},
    entities::Drifter,
    rng::{SampleExt, SystemRng},
    world::World,
};

/// Steps 1 and 2 of the tick: advance every drifter on the wind, then either
/// spawn one drifter or sweep out the declining ones.
pub struct DrifterSystem;

impl DrifterSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DrifterSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for DrifterSystem {
    fn name(&self) -> &str {
        "drifter"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        world: &mut World,
        rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        // Drift advance. A drifter over an un-ingested wind cell holds its
        // position for this tick; the error never escapes the loop.
        let wind = &world.wind;
        for (entity, drifter) in world.registry.iter_mut::<Drifter>() {
            if let Err(err) = drifter.advance(wind) {
                debug!(entity = entity.raw(), %err, "drift skipped");
            }
        }

        // Spawn and retirement are mutually exclusive within a tick: the coin
        // flip is drawn every tick, and a losing flip (or a full population)
        // runs the retirement sweep instead.
        let drifters = &world.params.drifters;
        if rng.chance(drifters.spawn_probability) && world.drifter_count() < drifters.cap {
            let position = rng.point_in(&world.params.bounds);
            world.spawn_drifter(position, rng);
        } else {
            for entity in world.registry.ids::<Drifter>() {
                let declining = world
                    .registry
                    .get::<Drifter>(entity)
                    .map(|drifter| drifter.declining())
                    .unwrap_or(false);
                if !declining {
                    continue;
                }
                match world.registry.remove::<Drifter>(entity) {
                    Ok(drifter) => {
                        debug!(
                            x = drifter.position.x,
                            y = drifter.position.y,
                            "drifter landed"
                        );
                    }
                    Err(err) => debug!(%err, "drifter already removed"),
                }
            }
        }

        Ok(())
    }
}
