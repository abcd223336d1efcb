//! Itinerary planner using best-first search.
//!
//! This module implements the core planning algorithm that answers:
//! "Starting here, with this budget and this many days, where should I go?"
//!
//! The search explores (city, day) states in score order. A state's score
//! is its actual spend, less a reward for the rating and category of the
//! city being left, plus a flat estimate for the days still to plan.

mod config;
mod frontier;
mod search;

pub use config::SearchConfig;
pub use search::{PlanError, Planner, SearchResult, SearchStats};

pub use crate::sink::plan_into;
