//! Cities and their geographic position.

use serde::{Deserialize, Serialize};

use super::{Category, DomainError, Rating};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Validate a latitude/longitude pair.
    ///
    /// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if !valid {
            return Err(DomainError::InvalidCoordinates { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Returns `[lat, lng]`, the order map libraries expect.
    pub fn as_pair(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// A destination that can appear in an itinerary.
///
/// Cities are keyed by name and never change while a search runs.
///
/// # Examples
///
/// ```
/// use travel_server::domain::{Category, City, Coordinates, Rating};
///
/// let paris = City::new(
///     "Paris",
///     120,
///     Rating::new(5).unwrap(),
///     Category::Cultural,
///     Coordinates::new(48.8566, 2.3522).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(paris.name, "Paris");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Unique name.
    pub name: String,

    /// Cost of spending a day here.
    pub daily_cost: u32,

    /// Quality rating.
    pub rating: Rating,

    /// What the city is known for.
    pub category: Category,

    /// Where the city is.
    pub coordinates: Coordinates,
}

impl City {
    /// Validate and construct a city.
    ///
    /// Surrounding whitespace is trimmed from the name.
    pub fn new(
        name: impl Into<String>,
        daily_cost: u32,
        rating: Rating,
        category: Category,
        coordinates: Coordinates,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCityName);
        }
        Ok(Self {
            name: trimmed.to_string(),
            daily_cost,
            rating,
            category,
            coordinates,
        })
    }
}

/// Convert a raw cost column into a validated cost.
pub(crate) fn cost_from_i64(field: &'static str, value: i64) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| DomainError::InvalidCost { field, value })
}
