//! Built-in datasets for populating an empty store.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::{Category, City, Coordinates, DomainError, Edge, Rating};

/// A set of cities and the edges between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub cities: Vec<City>,
    pub edges: Vec<Edge>,
}

/// (name, daily cost, rating, category, lat, lng)
type CityRow = (&'static str, u32, i64, Category, f64, f64);

const WORLD_CITIES: [CityRow; 20] = [
    ("Paris", 120, 5, Category::Cultural, 48.8566, 2.3522),
    ("Rome", 100, 4, Category::Cultural, 41.9028, 12.4964),
    ("Barcelona", 90, 4, Category::Beach, 41.3851, 2.1734),
    ("Cairo", 60, 3, Category::Cultural, 30.0444, 31.2357),
    ("Dubai", 150, 5, Category::Luxury, 25.2048, 55.2708),
    ("Bali", 80, 5, Category::Adventure, -8.4095, 115.1889),
    ("Tokyo", 200, 5, Category::Cultural, 35.6895, 139.6917),
    ("Sydney", 180, 4, Category::Beach, -33.8688, 151.2093),
    ("New York", 220, 4, Category::Luxury, 40.7128, -74.0060),
    ("London", 130, 5, Category::Historical, 51.5074, -0.1278),
    ("Moscow", 120, 4, Category::Historical, 55.7558, 37.6173),
    ("Istanbul", 90, 4, Category::Cultural, 41.0082, 28.9784),
    ("Rio de Janeiro", 140, 5, Category::Beach, -22.9068, -43.1729),
    ("Cape Town", 100, 4, Category::Adventure, -33.9249, 18.4241),
    ("Bangkok", 90, 4, Category::Cultural, 13.7563, 100.5018),
    ("Singapore", 160, 5, Category::Luxury, 1.3521, 103.8198),
    ("Venice", 110, 5, Category::Cultural, 45.4408, 12.3155),
    ("Athens", 95, 4, Category::Historical, 37.9838, 23.7275),
    ("Prague", 85, 4, Category::Historical, 50.0755, 14.4378),
    ("Amsterdam", 120, 5, Category::Cultural, 52.3676, 4.9041),
];

const WORLD_EDGES: [(&str, &str, u32); 20] = [
    ("Paris", "Rome", 50),
    ("Paris", "Barcelona", 60),
    ("Rome", "Barcelona", 40),
    ("Rome", "Venice", 20),
    ("Venice", "Athens", 70),
    ("Athens", "Istanbul", 50),
    ("Istanbul", "Cairo", 60),
    ("Cairo", "Dubai", 70),
    ("Dubai", "Bali", 100),
    ("Bali", "Bangkok", 60),
    ("Bangkok", "Singapore", 30),
    ("Singapore", "Sydney", 120),
    ("Sydney", "Cape Town", 200),
    ("New York", "London", 100),
    ("London", "Amsterdam", 40),
    ("Amsterdam", "Prague", 30),
    ("Prague", "Moscow", 70),
    ("Rio de Janeiro", "Cape Town", 150),
    ("New York", "Rio de Janeiro", 130),
    ("Tokyo", "Singapore", 150),
];

/// Twenty well-known cities and the one-way connections between them.
pub fn world() -> Result<Dataset, DomainError> {
    let cities = WORLD_CITIES
        .iter()
        .map(|&(name, daily_cost, rating, category, lat, lng)| {
            City::new(
                name,
                daily_cost,
                Rating::new(rating)?,
                category,
                Coordinates::new(lat, lng)?,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let edges = WORLD_EDGES
        .iter()
        .map(|&(from, to, cost)| Edge::new(from, to, cost))
        .collect();

    Ok(Dataset { cities, edges })
}

/// Name of the `i`-th synthetic city.
pub fn synthetic_name(i: usize) -> String {
    format!("City_{i}")
}

/// Seed for the synthetic dataset generator.
pub const SYNTHETIC_SEED: u64 = 42;

/// A chain of `n` generated cities, `City_1 → City_2 → … → City_n`.
///
/// Attributes cycle with the index: daily cost `50 + (i mod 5) × 30`,
/// rating `3 + (i mod 3)`, category through [`Category::ALL`]. Coordinates
/// (latitude in `-50..50`, longitude in `-180..180`) and travel costs (in
/// `20..70`) are drawn from a [`ChaCha8Rng`] seeded with [`SYNTHETIC_SEED`],
/// so the same `n` always yields the same dataset, and a shorter chain is a
/// prefix of a longer one.
pub fn synthetic_chain(n: usize) -> Result<Dataset, DomainError> {
    let mut rng = ChaCha8Rng::seed_from_u64(SYNTHETIC_SEED);
    let mut cities = Vec::with_capacity(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));

    for i in 1..=n {
        let daily_cost = 50 + (i % 5) as u32 * 30;
        let rating = Rating::new(3 + (i % 3) as i64)?;
        let category = Category::ALL[i % Category::ALL.len()];
        let lat: f64 = rng.gen_range(-50.0..50.0);
        let lng: f64 = rng.gen_range(-180.0..180.0);
        cities.push(City::new(
            synthetic_name(i),
            daily_cost,
            rating,
            category,
            Coordinates::new(lat, lng)?,
        )?);

        if i < n {
            edges.push(Edge::new(
                synthetic_name(i),
                synthetic_name(i + 1),
                rng.gen_range(20..70),
            ));
        }
    }

    Ok(Dataset { cities, edges })
}
