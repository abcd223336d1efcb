//! SQL schema for the travel planner database.

/// Creates every table the planner needs, leaving existing tables alone.
pub(super) const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS cities (
    name TEXT NOT NULL UNIQUE,
    daily_cost INTEGER NOT NULL,
    rating INTEGER NOT NULL,
    category TEXT NOT NULL,
    lat REAL NOT NULL,
    lng REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS distances (
    from_city TEXT NOT NULL,
    to_city TEXT NOT NULL,
    travel_cost INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS distances_from_city ON distances (from_city);

CREATE TABLE IF NOT EXISTS requests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    start_city TEXT NOT NULL,
    budget INTEGER NOT NULL,
    days INTEGER NOT NULL,
    preference TEXT NOT NULL,
    result TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL
);
";

pub(super) const SELECT_CITY: &str =
    "SELECT name, daily_cost, rating, category, lat, lng FROM cities WHERE name = ?1";

pub(super) const SELECT_ALL_CITIES: &str =
    "SELECT name, daily_cost, rating, category, lat, lng FROM cities ORDER BY name";

pub(super) const INSERT_CITY: &str = "INSERT INTO cities (name, daily_cost, rating, category, lat, lng) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

/// Edges keep insertion order so searches are reproducible.
pub(super) const SELECT_EDGES_FROM: &str =
    "SELECT from_city, to_city, travel_cost FROM distances WHERE from_city = ?1 ORDER BY rowid";

pub(super) const SELECT_ALL_EDGES: &str =
    "SELECT from_city, to_city, travel_cost FROM distances ORDER BY rowid";

pub(super) const INSERT_EDGE: &str =
    "INSERT INTO distances (from_city, to_city, travel_cost) VALUES (?1, ?2, ?3)";

pub(super) const COUNT_CITIES: &str = "SELECT COUNT(*) FROM cities";

pub(super) const INSERT_REQUEST: &str = "INSERT INTO requests (username, start_city, budget, days, preference, result, created_at) VALUES (?1, ?2, ?3, ?4, ?5, '', ?6)";

pub(super) const SELECT_REQUEST: &str = "SELECT id, username, start_city, budget, days, preference, result, created_at FROM requests WHERE id = ?1";

pub(super) const SELECT_ALL_REQUESTS: &str = "SELECT id, username, start_city, budget, days, preference, result, created_at FROM requests ORDER BY id";

pub(super) const DELETE_REQUEST: &str = "DELETE FROM requests WHERE id = ?1";

pub(super) const UPDATE_REQUEST_RESULT: &str = "UPDATE requests SET result = ?1 WHERE id = ?2";
