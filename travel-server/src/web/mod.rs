//! Web layer for the travel planner.
//!
//! Provides HTTP endpoints for managing travel requests and planning
//! itineraries, plus the HTML front end.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, StartupError};
pub use templates::*;
