//! Domain types for the travel planner.
//!
//! This module contains the core domain model types: cities, the directed
//! connections between them, travel requests and planned itineraries. All
//! types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod category;
mod city;
mod edge;
mod error;
mod itinerary;
mod rating;
mod request;

pub use category::{Category, InvalidCategory};
pub(crate) use city::cost_from_i64;
pub use city::{City, Coordinates};
pub use edge::Edge;
pub use error::DomainError;
pub use itinerary::{Itinerary, ROUTE_SEPARATOR};
pub use rating::{InvalidRating, Rating};
pub use request::{RequestId, StoredRequest, TravelRequest};
