//! Entity kinds and their per-tick motion policies.

use crate::error::SimError;
use crate::geo::Projected;
use crate::registry::Kind;
use crate::wind::WindField;

/// Fixed ground station. Created once at initialization, never removed.
#[derive(Debug, Clone, Copy)]
pub struct Helipad {
    pub position: Projected,
}

impl Helipad {
    pub fn new(position: Projected) -> Self {
        Self { position }
    }
}

impl Kind for Helipad {
    fn label() -> &'static str {
        "helipad"
    }
}

/// Wind-driven multirotor with a bounded lifetime.
#[derive(Debug, Clone, Copy)]
pub struct Drifter {
    pub position: Projected,
    pub lifetime: u32,
}

impl Drifter {
    pub fn new(position: Projected, lifetime: u32) -> Self {
        Self { position, lifetime }
    }

    /// One tick of wind drift: the lifetime counter always decrements (floored
    /// at zero); displacement applies the raw vector components, so the vector
    /// magnitude is the per-tick displacement. A failed lookup leaves the
    /// position untouched for this tick and surfaces the error to the caller.
    pub fn advance(&mut self, wind: &WindField) -> Result<(), SimError> {
        self.lifetime = self.lifetime.saturating_sub(1);
        let vector = wind.lookup(self.position)?;
        self.position.translate(vector.u as f64, vector.v as f64);
        Ok(())
    }

    pub fn declining(&self) -> bool {
        self.lifetime == 0
    }
}

impl Kind for Drifter {
    fn label() -> &'static str {
        "drifter"
    }
}

/// An active helicopter trip toward a helipad.
#[derive(Debug, Clone, Copy)]
pub struct Flight {
    pub position: Projected,
    pub speed: f64,
    pub destination: Projected,
}

impl Flight {
    pub fn new(position: Projected, speed: f64, destination: Projected) -> Self {
        Self {
            position,
            speed,
            destination,
        }
    }

    /// Axis-independent approach: each coordinate moves a full speed-step
    /// toward the destination unless it is already within one speed-step.
    /// Both axes converge to within one step but may oscillate when the speed
    /// does not divide the distance; the arrival threshold tolerates that.
    ///
    /// `_hazards` is the current storm snapshot, read but not yet acted on;
    /// the parameter is reserved for avoidance logic and stays a no-op.
    pub fn advance(&mut self, _hazards: &[Storm]) {
        self.position.x = axis_toward(self.position.x, self.destination.x, self.speed);
        self.position.y = axis_toward(self.position.y, self.destination.y, self.speed);
    }

    /// Arrival threshold: within one speed-step of the destination on either
    /// axis (OR, not AND: converging on a single axis retires the trip).
    pub fn arrived(&self) -> bool {
        (self.position.x - self.destination.x).abs() < self.speed
            || (self.position.y - self.destination.y).abs() < self.speed
    }
}

impl Kind for Flight {
    fn label() -> &'static str {
        "flight"
    }
}

/// Slow-moving hazard zone drifting along the X axis, unbounded.
#[derive(Debug, Clone, Copy)]
pub struct Storm {
    pub position: Projected,
    pub speed: f64,
}

impl Storm {
    pub fn new(position: Projected, speed: f64) -> Self {
        Self { position, speed }
    }

    pub fn advance(&mut self) {
        self.position.x -= self.speed;
    }
}

impl Kind for Storm {
    fn label() -> &'static str {
        "storm"
    }
}

fn axis_toward(current: f64, destination: f64, speed: f64) -> f64 {
    let delta = destination - current;
    if delta.abs() < speed {
        current
    } else {
        current + speed * delta.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Geographic;

    fn stocked_field() -> WindField {
        let mut field = WindField::new();
        // Cell covering the projected origin.
        field.insert(0, 0, 0.5, -0.25);
        field
    }

    #[test]
    fn drifter_lifetime_reaches_zero_exactly() {
        let field = stocked_field();
        let mut drifter = Drifter::new(Projected::new(0.0, 0.0), 3);

        for _ in 0..2 {
            drifter.advance(&field).unwrap();
            assert!(!drifter.declining());
        }
        drifter.advance(&field).unwrap();
        assert!(drifter.declining());
        assert_eq!(drifter.lifetime, 0);

        // Further steps floor at zero.
        drifter.advance(&field).unwrap();
        assert_eq!(drifter.lifetime, 0);
    }

    #[test]
    fn drifter_moves_by_raw_vector() {
        let field = stocked_field();
        let mut drifter = Drifter::new(Projected::new(0.0, 0.0), 10);
        drifter.advance(&field).unwrap();
        assert_eq!(drifter.position, Projected::new(50.0, -25.0));
    }

    #[test]
    fn drifter_skips_displacement_without_wind_data() {
        let field = WindField::new();
        let start = Geographic::new(20.0, 10.0).to_projected();
        let mut drifter = Drifter::new(start, 5);

        assert!(drifter.advance(&field).is_err());
        assert_eq!(drifter.position, start);
        // The lifetime still ticked down.
        assert_eq!(drifter.lifetime, 4);
    }

    #[test]
    fn flight_steps_each_axis_independently() {
        let mut flight = Flight::new(
            Projected::new(100.0, 100.0),
            220.0,
            Projected::new(500.0, 900.0),
        );
        flight.advance(&[]);
        assert_eq!(flight.position, Projected::new(320.0, 320.0));
    }

    #[test]
    fn flight_holds_an_axis_within_one_step() {
        let mut flight = Flight::new(
            Projected::new(100.0, 100.0),
            220.0,
            Projected::new(150.0, 900.0),
        );
        flight.advance(&[]);
        // X was already within one speed-step and must not move.
        assert_eq!(flight.position, Projected::new(100.0, 320.0));
    }

    #[test]
    fn arrival_triggers_on_either_axis() {
        // X within one step, Y far away: still arrived.
        let flight = Flight::new(
            Projected::new(100.0, 100.0),
            220.0,
            Projected::new(250.0, 9_000.0),
        );
        assert!(flight.arrived());

        let distant = Flight::new(
            Projected::new(100.0, 100.0),
            220.0,
            Projected::new(500.0, 9_000.0),
        );
        assert!(!distant.arrived());
    }

    #[test]
    fn arrival_after_one_step_on_x() {
        let mut flight = Flight::new(
            Projected::new(100.0, 100.0),
            220.0,
            Projected::new(500.0, 9_000.0),
        );
        flight.advance(&[]);
        assert!((flight.position.x - 320.0).abs() < f64::EPSILON);
        assert!(flight.arrived(), "|500 - 320| < 220 should arrive via X alone");
    }

    #[test]
    fn storm_drifts_west_unbounded() {
        let mut storm = Storm::new(Projected::new(0.0, 0.0), 10.0);
        for _ in 0..5 {
            storm.advance();
        }
        assert_eq!(storm.position, Projected::new(-50.0, 0.0));
    }
}
