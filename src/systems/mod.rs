mod drifter;
mod flight;
mod storm;

pub use drifter::DrifterSystem;
pub use flight::FlightSystem;
pub use storm::StormSystem;
