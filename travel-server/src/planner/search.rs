//! Best-first itinerary search.
//!
//! Explores (city, day) states in ascending score order, pruning any move
//! that would exceed the budget, and stops at the first state that reaches
//! the requested number of days.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::{DomainError, Itinerary, TravelRequest};
use crate::graph::CityGraph;

use super::config::SearchConfig;
use super::frontier::Frontier;

/// Error from itinerary search.
///
/// Failing to find a plan is not an error; see [`SearchResult::itinerary`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// The request could not be turned into a search
    #[error("invalid travel request: {0}")]
    InvalidRequest(#[from] DomainError),

    /// The start city is not in the graph
    #[error("unknown start city: {0}")]
    UnknownStartCity(String),
}

/// Counters describing how a search went.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States taken off the frontier and processed.
    pub states_expanded: usize,

    /// States added to the frontier, the initial state included.
    pub states_pushed: usize,

    /// States discarded because their (city, day) was already processed.
    pub duplicates_skipped: usize,

    /// Moves discarded because they would exceed the budget.
    pub budget_pruned: usize,

    /// Lookups that referenced a city missing from the graph.
    pub missing_cities: usize,

    /// Largest frontier size seen.
    pub frontier_high_water: usize,

    /// Whether the search stopped at the expansion limit.
    pub truncated: bool,
}

/// Result of itinerary search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The plan found, or `None` when no plan fits the constraints.
    pub itinerary: Option<Itinerary>,

    /// How much work the search did.
    pub stats: SearchStats,
}

impl SearchResult {
    /// Whether a plan was found.
    pub fn found(&self) -> bool {
        self.itinerary.is_some()
    }
}

/// A partial itinerary waiting on the frontier.
#[derive(Debug, Clone)]
struct SearchState {
    /// Current city.
    city: String,

    /// Actual money spent so far.
    cost: u64,

    /// Moves made so far.
    day: u32,

    /// Index of the expanded state this one came from.
    parent: Option<usize>,
}

/// An expanded state, kept so the winning path can be walked back.
#[derive(Debug)]
struct Visit {
    city: String,
    parent: Option<usize>,
}

/// Itinerary planner over a city graph.
pub struct Planner<'a, G: CityGraph + ?Sized> {
    graph: &'a G,
    config: &'a SearchConfig,
}

impl<'a, G: CityGraph + ?Sized> Planner<'a, G> {
    /// Create a new planner.
    pub fn new(graph: &'a G, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Search for an itinerary satisfying the request.
    ///
    /// Returns an error only if the start city is unknown. Otherwise the
    /// result either carries the first itinerary reached in score order, or
    /// no itinerary if every branch dead-ends or runs over budget.
    pub fn search(&self, request: &TravelRequest) -> Result<SearchResult, PlanError> {
        if self.graph.lookup_city(&request.start_city).is_none() {
            return Err(PlanError::UnknownStartCity(request.start_city.clone()));
        }

        let mut stats = SearchStats::default();
        let mut frontier = Frontier::new();
        let mut visited: HashSet<(String, u32)> = HashSet::new();
        let mut visits: Vec<Visit> = Vec::new();

        frontier.push(
            0,
            SearchState {
                city: request.start_city.clone(),
                cost: 0,
                day: 0,
                parent: None,
            },
        );
        stats.states_pushed += 1;

        let mut itinerary = None;

        while let Some((score, state)) = frontier.pop() {
            if !visited.insert((state.city.clone(), state.day)) {
                stats.duplicates_skipped += 1;
                continue;
            }

            if stats.states_expanded >= self.config.max_expansions {
                stats.truncated = true;
                break;
            }
            stats.states_expanded += 1;

            visits.push(Visit {
                city: state.city.clone(),
                parent: state.parent,
            });
            let node = visits.len() - 1;

            if state.day == request.days {
                let path = walk_back(&visits, node);
                itinerary = Some(Itinerary::new(path, state.cost)?);
                break;
            }

            trace!(
                city = %state.city,
                day = state.day,
                cost = state.cost,
                score,
                "expanding state"
            );
            self.expand(request, &state, node, &mut frontier, &mut stats);
        }

        stats.frontier_high_water = frontier.high_water();

        debug!(
            start = %request.start_city,
            days = request.days,
            budget = request.budget,
            found = itinerary.is_some(),
            expanded = stats.states_expanded,
            pushed = stats.states_pushed,
            pruned = stats.budget_pruned,
            remaining = frontier.len(),
            truncated = stats.truncated,
            "itinerary search complete"
        );

        Ok(SearchResult { itinerary, stats })
    }

    /// Push every affordable move out of `state`'s city.
    fn expand(
        &self,
        request: &TravelRequest,
        state: &SearchState,
        node: usize,
        frontier: &mut Frontier<SearchState>,
        stats: &mut SearchStats,
    ) {
        let Some(city) = self.graph.lookup_city(&state.city) else {
            stats.missing_cities += 1;
            debug!(city = %state.city, "city missing from graph, skipping");
            return;
        };

        let edges = self.graph.outgoing_edges(&state.city);
        if edges.is_empty() {
            trace!(city = %state.city, day = state.day, "dead end");
            return;
        }

        let mut reward = i64::from(city.rating.stars()) * self.config.rating_weight;
        if city.category == request.preference {
            reward += self.config.preference_bonus;
        }
        let remaining_days = i64::from(request.days - state.day);
        let estimate = remaining_days * self.config.remaining_day_estimate;

        for edge in edges.iter() {
            let new_cost = state.cost + u64::from(edge.travel_cost) + u64::from(city.daily_cost);
            if new_cost > request.budget {
                stats.budget_pruned += 1;
                continue;
            }

            if self.graph.lookup_city(&edge.to).is_none() {
                stats.missing_cities += 1;
                debug!(from = %edge.from, to = %edge.to, "edge to unknown city, skipping");
                continue;
            }

            let g = i64::try_from(new_cost).unwrap_or(i64::MAX) - reward;
            frontier.push(
                g + estimate,
                SearchState {
                    city: edge.to.clone(),
                    cost: new_cost,
                    day: state.day + 1,
                    parent: Some(node),
                },
            );
            stats.states_pushed += 1;
        }
    }
}

/// Rebuild the city sequence ending at `node` by following parent links.
fn walk_back(visits: &[Visit], node: usize) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(node);
    while let Some(index) = current {
        let visit = &visits[index];
        path.push(visit.city.clone());
        current = visit.parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
