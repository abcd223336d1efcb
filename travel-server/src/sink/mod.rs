//! Where search outcomes go.
//!
//! A [`ResultSink`] receives exactly one outcome per search: an itinerary or
//! a "no plan found" signal. [`RequestResultSink`] writes the formatted
//! route onto a stored request, [`MemorySink`] keeps outcomes in memory.

mod view;

use std::convert::Infallible;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Itinerary, RequestId, TravelRequest};
use crate::graph::CityGraph;
use crate::planner::{PlanError, Planner, SearchResult};
use crate::store::{SqliteStore, StoreError};

pub use view::{DayView, PlanView};

/// Receives the outcome of a search.
pub trait ResultSink {
    /// Error raised while recording an outcome.
    type Error;

    /// A plan was found.
    fn on_success(&mut self, itinerary: &Itinerary) -> Result<(), Self::Error>;

    /// No plan fits the request.
    fn on_failure(&mut self) -> Result<(), Self::Error>;

    /// Dispatch a search result to `on_success` or `on_failure`.
    fn report(&mut self, result: &SearchResult) -> Result<(), Self::Error> {
        match &result.itinerary {
            Some(itinerary) => self.on_success(itinerary),
            None => self.on_failure(),
        }
    }
}

/// Error from [`plan_into`].
#[derive(Debug, Error)]
pub enum ReportError<E> {
    /// The search itself was rejected.
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// The sink failed to record the outcome.
    #[error("failed to record plan result: {0}")]
    Sink(#[source] E),
}

/// Run a search and hand its outcome to `sink`.
///
/// Returns the search result so callers can also render it.
pub fn plan_into<G, S>(
    planner: &Planner<'_, G>,
    request: &TravelRequest,
    sink: &mut S,
) -> Result<SearchResult, ReportError<S::Error>>
where
    G: CityGraph + ?Sized,
    S: ResultSink + ?Sized,
{
    let result = planner.search(request)?;
    sink.report(&result).map_err(ReportError::Sink)?;
    Ok(result)
}

/// Writes successful plans onto a stored request's `result` column.
///
/// Failures leave the record untouched.
#[derive(Debug)]
pub struct RequestResultSink<'a> {
    store: &'a SqliteStore,
    id: RequestId,
}

impl<'a> RequestResultSink<'a> {
    pub fn new(store: &'a SqliteStore, id: RequestId) -> Self {
        Self { store, id }
    }
}

impl ResultSink for RequestResultSink<'_> {
    type Error = StoreError;

    fn on_success(&mut self, itinerary: &Itinerary) -> Result<(), StoreError> {
        let result = itinerary.result_string();
        self.store.set_result(self.id, &result)?;
        info!(
            request = %self.id,
            from = itinerary.start(),
            to = itinerary.end(),
            %result,
            "stored plan"
        );
        Ok(())
    }

    fn on_failure(&mut self) -> Result<(), StoreError> {
        debug!(request = %self.id, "no plan found, leaving request untouched");
        Ok(())
    }
}

/// Collects outcomes in memory, in the order they were reported.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemorySink {
    outcomes: Vec<Option<Itinerary>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every outcome so far; `None` marks a failure.
    pub fn outcomes(&self) -> &[Option<Itinerary>] {
        &self.outcomes
    }

    /// The most recent outcome, if anything was reported.
    pub fn last(&self) -> Option<Option<&Itinerary>> {
        self.outcomes.last().map(Option::as_ref)
    }

    /// Number of failures reported.
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_none()).count()
    }
}

impl ResultSink for MemorySink {
    type Error = Infallible;

    fn on_success(&mut self, itinerary: &Itinerary) -> Result<(), Infallible> {
        self.outcomes.push(Some(itinerary.clone()));
        Ok(())
    }

    fn on_failure(&mut self) -> Result<(), Infallible> {
        self.outcomes.push(None);
        Ok(())
    }
}
