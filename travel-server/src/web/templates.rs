//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Category, StoredRequest};
use crate::planner::SearchResult;
use crate::sink::PlanView;

use super::dto::NO_PLAN_MESSAGE;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page: request form, request list, map and plan output.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub cities: Vec<String>,
    pub categories: Vec<&'static str>,
    pub requests: Vec<RequestView>,
}

impl IndexTemplate {
    pub fn new(cities: Vec<String>, requests: Vec<RequestView>) -> Self {
        Self {
            cities,
            categories: Category::ALL.iter().map(Category::as_str).collect(),
            requests,
        }
    }
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Stored request table rows.
#[derive(Template)]
#[template(path = "request_list.html")]
pub struct RequestListTemplate {
    pub requests: Vec<RequestView>,
}

/// Plan output for one search.
#[derive(Template)]
#[template(path = "plan_result.html")]
pub struct PlanResultTemplate {
    pub found: bool,
    pub message: String,
    pub lines: Vec<String>,
    /// JSON array of `[lat, lng]` pairs for the map animation
    pub route_json: String,
}

impl PlanResultTemplate {
    pub fn new(result: &SearchResult, plan: Option<&PlanView>) -> Self {
        match plan {
            Some(plan) if result.found() => Self {
                found: true,
                message: "Suggested travel plan".to_string(),
                lines: plan.lines(),
                route_json: serde_json::to_string(&plan.route)
                    .unwrap_or_else(|_| "[]".to_string()),
            },
            _ => Self {
                found: false,
                message: NO_PLAN_MESSAGE.to_string(),
                lines: Vec::new(),
                route_json: "[]".to_string(),
            },
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Stored request view model for templates.
#[derive(Debug, Clone)]
pub struct RequestView {
    pub id: String,
    pub username: String,
    pub start_city: String,
    pub budget: u64,
    pub days: u32,
    pub preference: &'static str,
    pub result: String,
    pub created_at: String,
}

impl RequestView {
    pub fn from_stored(stored: &StoredRequest) -> Self {
        let request = &stored.request;
        Self {
            id: request.id.map(|id| id.to_string()).unwrap_or_default(),
            username: request.username.clone(),
            start_city: request.start_city.clone(),
            budget: request.budget,
            days: request.days,
            preference: request.preference.as_str(),
            result: stored.result.clone().unwrap_or_default(),
            created_at: stored.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }

    /// Whether the request has been planned.
    pub fn has_result(&self) -> bool {
        !self.result.is_empty()
    }
}
