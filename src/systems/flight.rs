use anyhow::Result;
use tracing::debug;

use crate::{
    engine::{System, SystemContext},
    entities::{Flight, Storm},
    registry::Entity,
    rng::SystemRng,
    world::World,
};

/// Steps 3 through 5 of the tick: top the roster up by one flight, retire
/// arrivals, then advance the survivors.
pub struct FlightSystem;

impl FlightSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FlightSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for FlightSystem {
    fn name(&self) -> &str {
        "flight"
    }

    fn run(
        &mut self,
        ctx: &SystemContext,
        world: &mut World,
        rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        // Replenishment dispatches at most one flight per tick.
        if world.flight_count() < world.params.flights.target {
            world.dispatch_flight(rng);
        }

        // Arrival: within one speed-step of the destination on either axis.
        // A roster entry missing from the registry is dropped as a no-op.
        let arrived: Vec<Entity> = world
            .roster
            .iter()
            .copied()
            .filter(|entity| {
                world
                    .registry
                    .get::<Flight>(*entity)
                    .map(|flight| flight.arrived())
                    .unwrap_or(false)
            })
            .collect();
        for entity in arrived {
            world.roster.retain(|other| *other != entity);
            match world.registry.remove::<Flight>(entity) {
                Ok(flight) => {
                    debug!(
                        x = flight.position.x,
                        y = flight.position.y,
                        "flight arrived"
                    );
                }
                Err(err) => debug!(%err, "arrived flight already removed"),
            }
        }

        debug!(tick = ctx.tick, airborne = world.flight_count(), "flights airborne");

        // Advance the remaining roster, handing each flight the current storm
        // snapshot as its hazard reference.
        let hazards: Vec<Storm> = world
            .storms
            .iter()
            .filter_map(|entity| world.registry.get::<Storm>(*entity))
            .copied()
            .collect();
        for entity in world.roster.clone() {
            if let Some(flight) = world.registry.get_mut::<Flight>(entity) {
                flight.advance(&hazards);
            }
        }

        Ok(())
    }
}
