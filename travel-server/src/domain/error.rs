//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from storage and search errors.

use super::{InvalidCategory, InvalidRating};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// City name was empty or whitespace
    #[error("city name must not be empty")]
    EmptyCityName,

    /// Rating outside the 1-5 range
    #[error(transparent)]
    InvalidRating(#[from] InvalidRating),

    /// Category name not recognised
    #[error(transparent)]
    InvalidCategory(#[from] InvalidCategory),

    /// Latitude or longitude out of range (or not finite)
    #[error("invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates { lat: f64, lng: f64 },

    /// A cost column held a negative or oversized value
    #[error("invalid {field} {value}: must be a non-negative integer")]
    InvalidCost { field: &'static str, value: i64 },

    /// Request start city was empty
    #[error("start city must not be empty")]
    EmptyStartCity,

    /// Request budget was zero or negative
    #[error("budget must be positive, got {0}")]
    NonPositiveBudget(i64),

    /// Request trip length was zero or negative
    #[error("trip length must be a positive number of days, got {0}")]
    NonPositiveDays(i64),

    /// Request trip length does not fit the supported range
    #[error("trip length of {0} days is too long")]
    DaysOutOfRange(i64),

    /// Itinerary has no cities
    #[error("itinerary must contain at least one city")]
    EmptyItinerary,
}
