//! City quality ratings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a rating falls outside the 1-5 star range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid rating {value}: must be between 1 and 5")]
pub struct InvalidRating {
    value: i64,
}

/// A quality rating between 1 and 5 stars inclusive.
///
/// Any `Rating` value is in range by construction.
///
/// # Examples
///
/// ```
/// use travel_server::domain::Rating;
///
/// let five = Rating::new(5).unwrap();
/// assert_eq!(five.stars(), 5);
///
/// assert!(Rating::new(0).is_err());
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest allowed rating.
    pub const MIN: u8 = 1;

    /// Highest allowed rating.
    pub const MAX: u8 = 5;

    /// Validate a raw rating value.
    pub fn new(value: i64) -> Result<Self, InvalidRating> {
        match u8::try_from(value) {
            Ok(stars) if (Self::MIN..=Self::MAX).contains(&stars) => Ok(Rating(stars)),
            _ => Err(InvalidRating { value }),
        }
    }

    /// Number of stars.
    pub fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = InvalidRating;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Debug for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rating({})", self.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
