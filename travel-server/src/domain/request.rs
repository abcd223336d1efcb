//! Travel requests submitted by users.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, DomainError};

/// Identifier of a persisted travel request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub i64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a traveler asks the planner for.
///
/// Budget and trip length are positive by construction. Whether the start
/// city exists is checked by the planner against its graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelRequest {
    /// Set once the request has been stored.
    pub id: Option<RequestId>,

    /// Who asked.
    pub username: String,

    /// Where the trip begins.
    pub start_city: String,

    /// Most the traveler is willing to spend. Always in `1..=i64::MAX`.
    pub budget: u64,

    /// Number of days, i.e. the number of moves between cities.
    pub days: u32,

    /// Preferred activity category.
    pub preference: Category,
}

impl TravelRequest {
    /// Validate and construct a request.
    pub fn new(
        username: impl Into<String>,
        start_city: impl Into<String>,
        budget: i64,
        days: i64,
        preference: Category,
    ) -> Result<Self, DomainError> {
        let start_city = start_city.into().trim().to_string();
        if start_city.is_empty() {
            return Err(DomainError::EmptyStartCity);
        }
        if budget <= 0 {
            return Err(DomainError::NonPositiveBudget(budget));
        }
        if days <= 0 {
            return Err(DomainError::NonPositiveDays(days));
        }
        let days_u32 = u32::try_from(days).map_err(|_| DomainError::DaysOutOfRange(days))?;

        Ok(Self {
            id: None,
            username: username.into(),
            start_city,
            budget: budget.unsigned_abs(),
            days: days_u32,
            preference,
        })
    }

    /// Attach the identifier assigned by the store.
    pub fn with_id(mut self, id: RequestId) -> Self {
        self.id = Some(id);
        self
    }
}

/// A request as kept by the request store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRequest {
    /// The request itself (always carries an id).
    pub request: TravelRequest,

    /// The formatted itinerary, once a plan has been found.
    pub result: Option<String>,

    /// When the request was created.
    pub created_at: DateTime<Utc>,
}

impl StoredRequest {
    /// The stored request's identifier.
    pub fn id(&self) -> Option<RequestId> {
        self.request.id
    }
}
