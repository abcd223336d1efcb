//! Planned itineraries.

use std::fmt;

use super::DomainError;

/// Separator between cities in the persisted result string.
pub const ROUTE_SEPARATOR: &str = " → ";

/// A planned sequence of cities and what it costs.
///
/// The first city is where the trip starts; each following city is one day
/// further along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    cities: Vec<String>,
    total_cost: u64,
}

impl Itinerary {
    /// Create an itinerary. At least one city is required.
    pub fn new(cities: Vec<String>, total_cost: u64) -> Result<Self, DomainError> {
        if cities.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }
        Ok(Self { cities, total_cost })
    }

    /// Cities in visiting order.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Total actual cost of the trip.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Number of moves between cities.
    pub fn days(&self) -> usize {
        self.cities.len() - 1
    }

    /// Where the trip starts.
    pub fn start(&self) -> &str {
        &self.cities[0]
    }

    /// Where the trip ends.
    pub fn end(&self) -> &str {
        &self.cities[self.cities.len() - 1]
    }

    /// Format as stored on the request record, e.g.
    /// `"Paris → Rome → Venice | $290"`.
    pub fn result_string(&self) -> String {
        format!(
            "{} | ${}",
            self.cities.join(ROUTE_SEPARATOR),
            self.total_cost
        )
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.result_string())
    }
}
