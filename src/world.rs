//! World state owned by the simulation.
//!
//! The world holds the entity registry, the shared wind field, the helipad
//! coordinate list, the ordered flight roster and the storm list. The roster
//! is the authoritative record of active flights; the registry is the derived
//! view and the two are mutated together.

use rand::Rng;
use tracing::debug;

use crate::entities::{Drifter, Flight, Helipad, Storm};
use crate::geo::{Geographic, Projected};
use crate::registry::{Entity, Registry};
use crate::rng::SampleExt;
use crate::scenario::Params;
use crate::sources::{SiteRecord, WindRecord};
use crate::wind::WindField;

pub struct World {
    pub registry: Registry,
    pub wind: WindField,
    pub helipads: Vec<Geographic>,
    /// Active flights in dispatch order.
    pub roster: Vec<Entity>,
    pub storms: Vec<Entity>,
    pub params: Params,
    tick: u64,
}

impl World {
    pub fn new(params: Params) -> Self {
        Self {
            registry: Registry::new(),
            wind: WindField::new(),
            helipads: Vec::new(),
            roster: Vec::new(),
            storms: Vec::new(),
            params,
            tick: 0,
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn advance_time(&mut self) {
        self.tick += 1;
    }

    pub fn drifter_count(&self) -> usize {
        self.registry.count::<Drifter>()
    }

    pub fn flight_count(&self) -> usize {
        self.roster.len()
    }

    /// Build the initial population from ingested data: wind cells, helipads,
    /// one seeded drifter, the storm belt, and the opening flight roster.
    /// City sites are ingested and logged but drive no behavior yet.
    pub fn populate(
        &mut self,
        wind: &[WindRecord],
        pads: &[SiteRecord],
        cities: &[SiteRecord],
        rng: &mut impl Rng,
    ) {
        for record in wind {
            self.wind
                .insert(record.lon as i32, record.lat as i32, record.u, record.v);
        }

        for city in cities {
            debug!(lat = city.lat, lon = city.lon, "city site ingested");
        }

        for pad in pads {
            let position = Geographic::new(pad.lat, pad.lon).to_projected();
            self.helipads.push(Geographic::new(pad.lat, pad.lon));
            self.registry.add(Helipad::new(position));
        }

        let seed_position = self.params.drifters.seed_position;
        self.spawn_drifter(seed_position, rng);

        for _ in 0..self.params.storms.count {
            self.spawn_storm(rng);
        }

        for _ in 0..self.params.flights.initial {
            self.dispatch_flight(rng);
        }

        debug!(
            wind_cells = self.wind.len(),
            helipads = self.helipads.len(),
            storms = self.storms.len(),
            flights = self.roster.len(),
            "world populated"
        );
    }

    /// Launch one drifter with a lifetime sampled from the configured range.
    pub fn spawn_drifter(&mut self, position: Projected, rng: &mut impl Rng) -> Entity {
        let lifetime = rng.in_range(
            self.params.drifters.lifetime_min as i64,
            self.params.drifters.lifetime_max as i64,
        ) as u32;
        let entity = self.registry.add(Drifter::new(position, lifetime));
        debug!(x = position.x, y = position.y, lifetime, "drifter launched");
        entity
    }

    /// Place one storm at integer degrees within the placement range.
    pub fn spawn_storm(&mut self, rng: &mut impl Rng) -> Entity {
        let range = self.params.storms.placement_degrees;
        let lat = rng.gen_range(-range..range) as f64;
        let lon = rng.gen_range(-range..range) as f64;
        let position = Geographic::new(lat, lon).to_projected();
        let entity = self
            .registry
            .add(Storm::new(position, self.params.storms.speed));
        self.storms.push(entity);
        entity
    }

    /// Dispatch one flight between two distinct helipads, resampling the
    /// destination until it differs from the origin. Returns `None` when
    /// fewer than two helipads exist, so a degenerate data file cannot hang
    /// the resampling loop.
    pub fn dispatch_flight(&mut self, rng: &mut impl Rng) -> Option<Entity> {
        if self.helipads.len() < 2 {
            debug!("flight dispatch skipped: fewer than two helipads");
            return None;
        }

        let origin = self.helipads[rng.index(self.helipads.len())];
        let mut destination = self.helipads[rng.index(self.helipads.len())];
        while destination == origin {
            destination = self.helipads[rng.index(self.helipads.len())];
        }

        let position = origin.to_projected();
        let flight = Flight::new(position, self.params.flights.speed, destination.to_projected());
        let entity = self.registry.add(flight);
        self.roster.push(entity);
        debug!(x = position.x, y = position.y, "flight departed");
        Some(entity)
    }
}
