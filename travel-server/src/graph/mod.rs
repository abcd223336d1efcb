//! City graph access.
//!
//! The `CityGraph` trait is the read-only interface the planner uses to look
//! up cities and follow their outgoing edges. `MemoryGraph` keeps the whole
//! graph in memory and can be shared between searches; the SQLite store in
//! [`crate::store`] implements the same trait over the persisted tables.

mod memory;
pub mod seed;

use std::borrow::Cow;

use crate::domain::{City, Edge};

pub use memory::{MemoryGraph, MemoryGraphBuilder};

/// Read-only access to cities and directed travel edges.
///
/// Both lookups are by exact city name. A missing city is `None`, and a city
/// without outgoing edges yields an empty slice.
///
/// # Examples
///
/// ```
/// use travel_server::domain::{Category, City, Coordinates, Edge, Rating};
/// use travel_server::graph::{CityGraph, MemoryGraph};
///
/// let city = |name: &str| {
///     City::new(
///         name,
///         50,
///         Rating::new(4).unwrap(),
///         Category::Beach,
///         Coordinates::new(0.0, 0.0).unwrap(),
///     )
///     .unwrap()
/// };
///
/// let graph = MemoryGraph::builder()
///     .city(city("A"))
///     .city(city("B"))
///     .edge(Edge::new("A", "B", 30))
///     .build();
///
/// assert_eq!(graph.outgoing_edges("A").len(), 1);
/// assert!(graph.outgoing_edges("B").is_empty());
/// assert!(graph.lookup_city("C").is_none());
/// ```
pub trait CityGraph {
    /// Look up a city by name.
    fn lookup_city(&self, name: &str) -> Option<Cow<'_, City>>;

    /// Edges leaving the named city, in insertion order.
    fn outgoing_edges(&self, name: &str) -> Cow<'_, [Edge]>;
}

impl<G: CityGraph + ?Sized> CityGraph for &G {
    fn lookup_city(&self, name: &str) -> Option<Cow<'_, City>> {
        (**self).lookup_city(name)
    }

    fn outgoing_edges(&self, name: &str) -> Cow<'_, [Edge]> {
        (**self).outgoing_edges(name)
    }
}
