//! Day-by-day presentation of an itinerary.

use serde::Serialize;

use crate::domain::{Coordinates, Itinerary};
use crate::graph::CityGraph;

/// One stop of a planned trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayView {
    /// 1-based position in the trip; the start city is day 1.
    pub day: usize,
    pub city: String,
    /// Star rating, if the city is still known to the graph.
    pub rating: Option<u8>,
    pub coordinates: Option<Coordinates>,
}

impl DayView {
    /// Render as `Day 1: Paris ⭐ 5`.
    pub fn line(&self) -> String {
        match self.rating {
            Some(stars) => format!("Day {}: {} ⭐ {}", self.day, self.city, stars),
            None => format!("Day {}: {}", self.day, self.city),
        }
    }
}

/// A plan ready for display: one entry per stop, the total, and the route
/// the map animates through.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanView {
    pub days: Vec<DayView>,
    pub total_cost: u64,
    /// `[lat, lng]` pairs in visiting order. Stops without coordinates are
    /// left out.
    pub route: Vec<[f64; 2]>,
}

impl PlanView {
    /// Resolve each stop of `itinerary` against `graph`.
    pub fn build<G: CityGraph + ?Sized>(graph: &G, itinerary: &Itinerary) -> Self {
        let days: Vec<DayView> = itinerary
            .cities()
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let city = graph.lookup_city(name);
                DayView {
                    day: i + 1,
                    city: name.clone(),
                    rating: city.as_ref().map(|c| c.rating.stars()),
                    coordinates: city.as_ref().map(|c| c.coordinates),
                }
            })
            .collect();

        let route = days
            .iter()
            .filter_map(|d| d.coordinates.map(|c| c.as_pair()))
            .collect();

        Self {
            days,
            total_cost: itinerary.total_cost(),
            route,
        }
    }

    /// Total line shown under the stops.
    pub fn total_line(&self) -> String {
        format!("Total Estimated Cost: ${}", self.total_cost)
    }

    /// Every display line: one per stop, then the total.
    pub fn lines(&self) -> Vec<String> {
        self.days
            .iter()
            .map(DayView::line)
            .chain(std::iter::once(self.total_line()))
            .collect()
    }
}
