//! SQLite-backed persistence for cities, edges and travel requests.
//!
//! The store owns a single `rusqlite` connection. Rows are validated into
//! domain types as they are read, so a malformed row surfaces as a
//! [`StoreError`] instead of leaking into the planner.

mod requests;
mod schema;

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, Row, params};
use thiserror::Error;
use tracing::warn;

use crate::domain::{
    Category, City, Coordinates, DomainError, Edge, Rating, RequestId, cost_from_i64,
};
use crate::graph::CityGraph;
use crate::graph::seed::Dataset;

/// Errors raised when reading or writing the travel database.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    Open {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },

    /// Creating the tables failed.
    #[error("failed to create schema: {source}")]
    CreateSchema {
        #[source]
        source: rusqlite::Error,
    },

    /// A stored row did not pass domain validation.
    #[error("invalid row in {table} ({key}): {source}")]
    InvalidRow {
        /// Table the row came from.
        table: &'static str,
        /// Identifying value of the row.
        key: String,
        #[source]
        source: DomainError,
    },

    /// A stored timestamp could not be parsed.
    #[error("invalid timestamp {value:?} on request {id}")]
    InvalidTimestamp { id: RequestId, value: String },

    /// No request has the given id.
    #[error("request {0} not found")]
    RequestNotFound(RequestId),

    /// Generic SQLite error.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Travel database backed by SQLite.
pub struct SqliteStore {
    conn: Connection,
}

impl fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteStore")
            .field("path", &self.conn.path())
            .finish_non_exhaustive()
    }
}

impl SqliteStore {
    /// Open (or create) a database file and make sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(schema::CREATE_TABLES)
            .map_err(|source| StoreError::CreateSchema { source })?;
        Ok(Self { conn })
    }

    /// Returns true if no cities have been stored yet.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        let count: i64 = self
            .conn
            .query_row(schema::COUNT_CITIES, [], |row| row.get(0))?;
        Ok(count == 0)
    }

    /// Insert a single city.
    pub fn insert_city(&self, city: &City) -> Result<(), StoreError> {
        self.conn.execute(
            schema::INSERT_CITY,
            params![
                city.name,
                city.daily_cost,
                city.rating.stars(),
                city.category.as_str(),
                city.coordinates.lat,
                city.coordinates.lng,
            ],
        )?;
        Ok(())
    }

    /// Insert a single directed edge.
    pub fn insert_edge(&self, edge: &Edge) -> Result<(), StoreError> {
        self.conn.execute(
            schema::INSERT_EDGE,
            params![edge.from, edge.to, edge.travel_cost],
        )?;
        Ok(())
    }

    /// Insert a whole dataset in one transaction.
    pub fn insert_dataset(&mut self, dataset: &Dataset) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        {
            let mut insert_city = tx.prepare(schema::INSERT_CITY)?;
            for city in &dataset.cities {
                insert_city.execute(params![
                    city.name,
                    city.daily_cost,
                    city.rating.stars(),
                    city.category.as_str(),
                    city.coordinates.lat,
                    city.coordinates.lng,
                ])?;
            }
            let mut insert_edge = tx.prepare(schema::INSERT_EDGE)?;
            for edge in &dataset.edges {
                insert_edge.execute(params![edge.from, edge.to, edge.travel_cost])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Look up a city by exact name.
    pub fn city(&self, name: &str) -> Result<Option<City>, StoreError> {
        let raw = self
            .conn
            .query_row(schema::SELECT_CITY, params![name], CityRow::read)
            .optional()?;
        raw.map(City::try_from).transpose()
    }

    /// Edges leaving the named city, in insertion order.
    pub fn edges_from(&self, name: &str) -> Result<Vec<Edge>, StoreError> {
        let mut statement = self.conn.prepare(schema::SELECT_EDGES_FROM)?;
        let rows = statement.query_map(params![name], EdgeRow::read)?;
        rows.map(|row| Edge::try_from(row?)).collect()
    }

    /// Every stored city, sorted by name.
    pub fn load_cities(&self) -> Result<Vec<City>, StoreError> {
        let mut statement = self.conn.prepare(schema::SELECT_ALL_CITIES)?;
        let rows = statement.query_map([], CityRow::read)?;
        rows.map(|row| City::try_from(row?)).collect()
    }

    /// Every stored edge, in insertion order.
    pub fn load_edges(&self) -> Result<Vec<Edge>, StoreError> {
        let mut statement = self.conn.prepare(schema::SELECT_ALL_EDGES)?;
        let rows = statement.query_map([], EdgeRow::read)?;
        rows.map(|row| Edge::try_from(row?)).collect()
    }
}

/// Lookups that fail at the database level are logged and treated as
/// missing data, which the planner already tolerates.
impl CityGraph for SqliteStore {
    fn lookup_city(&self, name: &str) -> Option<Cow<'_, City>> {
        match self.city(name) {
            Ok(city) => city.map(Cow::Owned),
            Err(e) => {
                warn!(city = name, error = %e, "city lookup failed");
                None
            }
        }
    }

    fn outgoing_edges(&self, name: &str) -> Cow<'_, [Edge]> {
        match self.edges_from(name) {
            Ok(edges) => Cow::Owned(edges),
            Err(e) => {
                warn!(city = name, error = %e, "edge lookup failed");
                Cow::Owned(Vec::new())
            }
        }
    }
}

/// Unvalidated `cities` row.
struct CityRow {
    name: String,
    daily_cost: i64,
    rating: i64,
    category: String,
    lat: f64,
    lng: f64,
}

impl CityRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get(0)?,
            daily_cost: row.get(1)?,
            rating: row.get(2)?,
            category: row.get(3)?,
            lat: row.get(4)?,
            lng: row.get(5)?,
        })
    }
}

impl TryFrom<CityRow> for City {
    type Error = StoreError;

    fn try_from(row: CityRow) -> Result<Self, Self::Error> {
        let validate = || -> Result<City, DomainError> {
            City::new(
                row.name.clone(),
                cost_from_i64("daily cost", row.daily_cost)?,
                Rating::new(row.rating)?,
                Category::parse(&row.category)?,
                Coordinates::new(row.lat, row.lng)?,
            )
        };
        validate().map_err(|source| StoreError::InvalidRow {
            table: "cities",
            key: row.name.clone(),
            source,
        })
    }
}

/// Unvalidated `distances` row.
struct EdgeRow {
    from: String,
    to: String,
    travel_cost: i64,
}

impl EdgeRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            from: row.get(0)?,
            to: row.get(1)?,
            travel_cost: row.get(2)?,
        })
    }
}

impl TryFrom<EdgeRow> for Edge {
    type Error = StoreError;

    fn try_from(row: EdgeRow) -> Result<Self, Self::Error> {
        let travel_cost = cost_from_i64("travel cost", row.travel_cost).map_err(|source| {
            StoreError::InvalidRow {
                table: "distances",
                key: format!("{} -> {}", row.from, row.to),
                source,
            }
        })?;
        Ok(Edge::new(row.from, row.to, travel_cost))
    }
}
