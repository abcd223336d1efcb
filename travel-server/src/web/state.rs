//! Application state for the web layer.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::info;

use crate::cache::{CacheConfig, PlanCache};
use crate::config::{AppConfig, DatabaseLocation, SeedSource};
use crate::domain::DomainError;
use crate::graph::{MemoryGraph, seed};
use crate::planner::SearchConfig;
use crate::store::{SqliteStore, StoreError};

/// Failure while preparing the application state.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to build seed data: {0}")]
    Seed(#[from] DomainError),
}

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Read-only snapshot of the city graph, shared by every search
    pub graph: Arc<MemoryGraph>,

    /// Request records; the connection is only touched on blocking threads
    pub store: Arc<Mutex<SqliteStore>>,

    /// Planner configuration
    pub search: Arc<SearchConfig>,

    /// Recent search outcomes
    pub plans: PlanCache,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        graph: MemoryGraph,
        store: SqliteStore,
        search: SearchConfig,
        cache: &CacheConfig,
    ) -> Self {
        Self {
            graph: Arc::new(graph),
            store: Arc::new(Mutex::new(store)),
            search: Arc::new(search),
            plans: PlanCache::new(cache),
        }
    }

    /// Open the database, seed it if it is empty, and snapshot the graph.
    pub fn bootstrap(config: &AppConfig) -> Result<Self, StartupError> {
        let mut store = match &config.database {
            DatabaseLocation::File(path) => SqliteStore::open(path)?,
            DatabaseLocation::InMemory => SqliteStore::open_in_memory()?,
        };

        if store.is_empty()? {
            let dataset = match config.seed {
                SeedSource::World => Some(seed::world()?),
                SeedSource::Synthetic(n) => Some(seed::synthetic_chain(n)?),
                SeedSource::None => None,
            };
            if let Some(dataset) = dataset {
                store.insert_dataset(&dataset)?;
                info!(
                    cities = dataset.cities.len(),
                    edges = dataset.edges.len(),
                    "seeded empty database"
                );
            }
        }

        let graph = MemoryGraph::from_store(&store)?;
        info!(
            cities = graph.len(),
            edges = graph.edge_count(),
            "loaded city graph"
        );

        Ok(Self::new(graph, store, config.search.clone(), &config.cache))
    }
}
