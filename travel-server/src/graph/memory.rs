//! In-memory city graph.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::domain::{City, Edge};
use crate::store::{SqliteStore, StoreError};

use super::CityGraph;

/// A city graph held entirely in memory.
///
/// Cities are keyed by name; adding a city with an existing name replaces
/// it. Edges are kept per source city in insertion order, duplicates
/// included.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    cities: HashMap<String, City>,
    edges: HashMap<String, Vec<Edge>>,
    edge_count: usize,
}

impl MemoryGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a graph.
    pub fn builder() -> MemoryGraphBuilder {
        MemoryGraphBuilder::default()
    }

    /// Build a graph from cities and edges.
    pub fn from_parts(
        cities: impl IntoIterator<Item = City>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Self {
        let mut graph = Self::new();
        for city in cities {
            graph.add_city(city);
        }
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Snapshot every city and edge held by a SQLite store.
    pub fn from_store(store: &SqliteStore) -> Result<Self, StoreError> {
        let cities = store.load_cities()?;
        let edges = store.load_edges()?;
        Ok(Self::from_parts(cities, edges))
    }

    /// Add a city, returning the one it replaced (if any).
    pub fn add_city(&mut self, city: City) -> Option<City> {
        self.cities.insert(city.name.clone(), city)
    }

    /// Add a directed edge.
    ///
    /// The endpoints are not required to exist; the planner skips edges to
    /// unknown cities.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.entry(edge.from.clone()).or_default().push(edge);
        self.edge_count += 1;
    }

    /// City names sorted alphabetically.
    pub fn city_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if the graph has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Number of directed edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl CityGraph for MemoryGraph {
    fn lookup_city(&self, name: &str) -> Option<Cow<'_, City>> {
        self.cities.get(name).map(Cow::Borrowed)
    }

    fn outgoing_edges(&self, name: &str) -> Cow<'_, [Edge]> {
        match self.edges.get(name) {
            Some(edges) => Cow::Borrowed(edges.as_slice()),
            None => Cow::Borrowed(&[]),
        }
    }
}

/// Builder for creating in-memory graphs.
///
/// Provides a fluent API for adding cities and edges.
#[derive(Debug, Default)]
pub struct MemoryGraphBuilder {
    inner: MemoryGraph,
}

impl MemoryGraphBuilder {
    /// Add a city.
    pub fn city(mut self, city: City) -> Self {
        self.inner.add_city(city);
        self
    }

    /// Add a directed edge.
    pub fn edge(mut self, edge: Edge) -> Self {
        self.inner.add_edge(edge);
        self
    }

    /// Build the graph.
    pub fn build(self) -> MemoryGraph {
        self.inner
    }
}
