//! Search configuration for the itinerary planner.

/// Weights and limits used by the itinerary search.
///
/// The defaults reproduce the classic scoring: 25 points of reward per
/// rating star, a 40 point bonus for the preferred category, and an
/// estimate of 50 per remaining day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Reward subtracted from the score per rating star of the city being
    /// left.
    pub rating_weight: i64,

    /// Reward subtracted when the city being left matches the traveler's
    /// preferred category.
    pub preference_bonus: i64,

    /// Estimated cost of each day still to plan.
    pub remaining_day_estimate: i64,

    /// Maximum number of states to expand before giving up.
    /// Searches that hit this limit report no plan.
    pub max_expansions: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        rating_weight: i64,
        preference_bonus: i64,
        remaining_day_estimate: i64,
        max_expansions: usize,
    ) -> Self {
        Self {
            rating_weight,
            preference_bonus,
            remaining_day_estimate,
            max_expansions,
        }
    }

    /// Returns a copy with a different expansion limit.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            rating_weight: 25,
            preference_bonus: 40,
            remaining_day_estimate: 50,
            max_expansions: 100_000,
        }
    }
}
