pub mod config;
pub mod fuel;
pub mod itin;
pub mod itinerary;
pub mod maps;
pub mod store;
pub mod utils;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use fuel::{FuelEstimate, estimate_fuel};
pub use itin::Itin;
pub use itinerary::{Day, Event, EventPatch, ItineraryDocument, LegKind, TripLeg, TripLegPatch};
pub use maps::{MapProvider, directions_url, place_search_url};
pub use store::ItineraryStore;
