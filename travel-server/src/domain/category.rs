//! Activity categories for cities and traveler preferences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {name:?}")]
pub struct InvalidCategory {
    name: String,
}

/// The kind of activity a city is known for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Cultural,
    Beach,
    Adventure,
    Luxury,
    Historical,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Cultural,
        Category::Beach,
        Category::Adventure,
        Category::Luxury,
        Category::Historical,
    ];

    /// Parse a category from its exact display name (e.g. `"Beach"`).
    pub fn parse(s: &str) -> Result<Self, InvalidCategory> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| InvalidCategory { name: s.to_string() })
    }

    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cultural => "Cultural",
            Category::Beach => "Beach",
            Category::Adventure => "Adventure",
            Category::Luxury => "Luxury",
            Category::Historical => "Historical",
        }
    }
}

impl FromStr for Category {
    type Err = InvalidCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
