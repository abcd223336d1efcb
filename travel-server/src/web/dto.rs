//! Data transfer objects for web requests and responses.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::domain::{Category, City, RequestId, StoredRequest};
use crate::planner::{SearchResult, SearchStats};
use crate::sink::PlanView;

/// Message shown when no itinerary fits the request.
pub const NO_PLAN_MESSAGE: &str = "No valid plan found for the given constraints.";

/// A city, as listed for the map and the start city dropdown.
#[derive(Debug, Serialize)]
pub struct CityResult {
    pub name: String,
    pub daily_cost: u32,
    pub rating: u8,
    pub category: Category,
    pub lat: f64,
    pub lng: f64,
}

impl CityResult {
    pub fn from_city(city: &City) -> Self {
        Self {
            name: city.name.clone(),
            daily_cost: city.daily_cost,
            rating: city.rating.stars(),
            category: city.category,
            lat: city.coordinates.lat,
            lng: city.coordinates.lng,
        }
    }
}

/// Response listing every city.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<CityResult>,
}

/// Body of a request to store a new travel request.
#[derive(Debug, Deserialize)]
pub struct NewRequestBody {
    pub username: String,
    pub start_city: String,
    pub budget: i64,
    pub days: i64,
    /// Category display name, e.g. `"Beach"`
    pub preference: String,
}

/// Body of an ad hoc planning request. Nothing is stored.
#[derive(Debug, Deserialize)]
pub struct PlanBody {
    pub start_city: String,
    pub budget: i64,
    pub days: i64,
    pub preference: String,
}

/// A stored travel request.
#[derive(Debug, Serialize)]
pub struct RequestResult {
    pub id: Option<RequestId>,
    pub username: String,
    pub start_city: String,
    pub budget: u64,
    pub days: u32,
    pub preference: Category,

    /// Formatted itinerary, once planned
    pub result: Option<String>,

    /// RFC 3339 creation time
    pub created_at: String,
}

impl RequestResult {
    pub fn from_stored(stored: &StoredRequest) -> Self {
        let request = &stored.request;
        Self {
            id: request.id,
            username: request.username.clone(),
            start_city: request.start_city.clone(),
            budget: request.budget,
            days: request.days,
            preference: request.preference,
            result: stored.result.clone(),
            created_at: stored
                .created_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Response listing stored requests.
#[derive(Debug, Serialize)]
pub struct RequestListResponse {
    pub requests: Vec<RequestResult>,
}

/// Search counters exposed over the API.
#[derive(Debug, Serialize)]
pub struct StatsResult {
    pub states_expanded: usize,
    pub states_pushed: usize,
    pub duplicates_skipped: usize,
    pub budget_pruned: usize,
    pub truncated: bool,
}

impl StatsResult {
    pub fn from_stats(stats: &SearchStats) -> Self {
        Self {
            states_expanded: stats.states_expanded,
            states_pushed: stats.states_pushed,
            duplicates_skipped: stats.duplicates_skipped,
            budget_pruned: stats.budget_pruned,
            truncated: stats.truncated,
        }
    }
}

/// Outcome of planning.
///
/// "No plan" is a normal outcome: `found` is false and the plan fields are
/// empty.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub found: bool,
    pub message: String,

    /// Set when the plan was for a stored request
    pub request_id: Option<RequestId>,

    /// The result string as stored on the request record
    pub result: Option<String>,

    pub total_cost: Option<u64>,
    pub plan: Option<PlanView>,
    pub stats: StatsResult,
}

impl PlanResponse {
    pub fn from_result(
        result: &SearchResult,
        plan: Option<PlanView>,
        request_id: Option<RequestId>,
    ) -> Self {
        let itinerary = result.itinerary.as_ref();
        Self {
            found: itinerary.is_some(),
            message: match itinerary {
                Some(_) => "Suggested travel plan".to_string(),
                None => NO_PLAN_MESSAGE.to_string(),
            },
            request_id,
            result: itinerary.map(|it| it.result_string()),
            total_cost: itinerary.map(|it| it.total_cost()),
            plan,
            stats: StatsResult::from_stats(&result.stats),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
