//! Directed travel connections between cities.

use serde::{Deserialize, Serialize};

/// A one-way connection from one city to another.
///
/// An edge from A to B says nothing about travel from B to A.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Departure city name.
    pub from: String,

    /// Arrival city name.
    pub to: String,

    /// Cost of making the trip.
    pub travel_cost: u32,
}

impl Edge {
    /// Create a new edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>, travel_cost: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            travel_cost,
        }
    }
}
