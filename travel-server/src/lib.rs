//! Travel itinerary planner server.
//!
//! A web application that answers: "Starting from this city, with this
//! budget and this many days, which cities should I visit?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod sink;
pub mod store;
pub mod web;
