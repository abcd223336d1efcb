//! HTTP route handlers.

use std::path::Path as FsPath;
use std::sync::Arc;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::cache::PlanKey;
use crate::domain::{Category, DomainError, RequestId, StoredRequest, TravelRequest};
use crate::graph::CityGraph;
use crate::planner::{PlanError, Planner, SearchResult};
use crate::sink::{PlanView, RequestResultSink, ResultSink};
use crate::store::{SqliteStore, StoreError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &FsPath) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/api/cities", get(list_cities))
        .route("/api/requests", get(list_requests).post(create_request))
        .route("/api/requests/:id", delete(delete_request))
        .route("/api/requests/:id/plan", post(plan_stored_request))
        .route("/api/plan", post(plan_ad_hoc))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with request form, request list and map.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let cities = state
        .graph
        .city_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let requests = with_store(&state, SqliteStore::list_requests).await?;
    let requests = requests.iter().map(RequestView::from_stored).collect();

    Ok(Html(
        IndexTemplate::new(cities, requests)
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    ))
}

/// About page.
async fn about_page() -> impl IntoResponse {
    Html(
        AboutTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Every city, sorted by name.
async fn list_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    let cities = state
        .graph
        .city_names()
        .into_iter()
        .filter_map(|name| state.graph.lookup_city(name))
        .map(|city| CityResult::from_city(&city))
        .collect();

    Json(CitiesResponse { cities })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn render_fragment(template: impl Template) -> Result<Response, AppError> {
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html).into_response())
}

/// Stored requests, oldest first.
async fn list_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let requests = with_store(&state, SqliteStore::list_requests).await?;

    if accepts_html(&headers) {
        render_fragment(RequestListTemplate {
            requests: requests.iter().map(RequestView::from_stored).collect(),
        })
    } else {
        let requests = requests.iter().map(RequestResult::from_stored).collect();
        Ok(Json(RequestListResponse { requests }).into_response())
    }
}

/// Store a new travel request.
async fn create_request(
    State(state): State<AppState>,
    payload: Result<Json<NewRequestBody>, JsonRejection>,
) -> Result<(StatusCode, Json<RequestResult>), AppError> {
    let Json(body) = payload?;
    let username = body.username.trim().to_string();
    if username.is_empty() {
        return Err(AppError::BadRequest {
            message: "username must not be empty".to_string(),
        });
    }
    let request = travel_request(
        &state,
        username,
        &body.start_city,
        body.budget,
        body.days,
        &body.preference,
    )?;

    let stored = with_store(&state, move |store| {
        let id = store.create_request(&request)?;
        store.request(id)?.ok_or(StoreError::RequestNotFound(id))
    })
    .await?;

    info!(
        id = ?stored.id(),
        user = %stored.request.username,
        start = %stored.request.start_city,
        "created travel request"
    );
    Ok((StatusCode::CREATED, Json(RequestResult::from_stored(&stored))))
}

/// Delete a stored request.
async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let id = RequestId(id);
    let deleted = with_store(&state, move |store| store.delete_request(id)).await?;
    if !deleted {
        return Err(AppError::NotFound {
            message: format!("request {id} not found"),
        });
    }
    info!(%id, "deleted travel request");
    Ok(StatusCode::NO_CONTENT)
}

/// Plan a stored request and write the result onto it.
async fn plan_stored_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let id = RequestId(id);
    let stored: StoredRequest = with_store(&state, move |store| {
        store.request(id)?.ok_or(StoreError::RequestNotFound(id))
    })
    .await?;

    let result = run_search(&state, stored.request).await?;

    let recorded = result.clone();
    with_store(&state, move |store| {
        RequestResultSink::new(store, id).report(&recorded)
    })
    .await?;

    plan_response(&state, &headers, &result, Some(id))
}

/// Plan a request without storing anything.
async fn plan_ad_hoc(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<PlanBody>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(body) = payload?;
    let request = travel_request(
        &state,
        String::new(),
        &body.start_city,
        body.budget,
        body.days,
        &body.preference,
    )?;
    let result = run_search(&state, request).await?;
    plan_response(&state, &headers, &result, None)
}

fn plan_response(
    state: &AppState,
    headers: &HeaderMap,
    result: &SearchResult,
    request_id: Option<RequestId>,
) -> Result<Response, AppError> {
    let plan = result
        .itinerary
        .as_ref()
        .map(|itinerary| PlanView::build(&*state.graph, itinerary));

    if accepts_html(headers) {
        render_fragment(PlanResultTemplate::new(result, plan.as_ref()))
    } else {
        Ok(Json(PlanResponse::from_result(result, plan, request_id)).into_response())
    }
}

/// Validate form input into a request against the current graph.
fn travel_request(
    state: &AppState,
    username: String,
    start_city: &str,
    budget: i64,
    days: i64,
    preference: &str,
) -> Result<TravelRequest, AppError> {
    let preference = Category::parse(preference).map_err(DomainError::from)?;
    let request = TravelRequest::new(username, start_city, budget, days, preference)?;
    if state.graph.lookup_city(&request.start_city).is_none() {
        return Err(PlanError::UnknownStartCity(request.start_city).into());
    }
    Ok(request)
}

/// Run a search on the blocking pool, reusing a cached outcome when the same
/// request has been planned recently.
async fn run_search(
    state: &AppState,
    request: TravelRequest,
) -> Result<Arc<SearchResult>, AppError> {
    let key = PlanKey::from(&request);
    if let Some(cached) = state.plans.get(&key).await {
        debug!(start = %key.start_city, days = key.days, "plan cache hit");
        return Ok(cached);
    }

    let graph = Arc::clone(&state.graph);
    let config = Arc::clone(&state.search);
    let result = tokio::task::spawn_blocking(move || {
        Planner::new(&*graph, &*config).search(&request)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("search task failed: {e}"),
    })??;

    info!(
        start = %key.start_city,
        days = key.days,
        budget = key.budget,
        found = result.found(),
        expanded = result.stats.states_expanded,
        "planned itinerary"
    );

    let result = Arc::new(result);
    state.plans.insert(key, Arc::clone(&result)).await;
    debug!(cached = state.plans.entry_count(), "plan cached");
    Ok(result)
}

/// Run `f` against the request store on the blocking pool.
async fn with_store<T, F>(state: &AppState, f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&SqliteStore) -> Result<T, StoreError> + Send + 'static,
{
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || {
        let guard = store.lock().map_err(|_| AppError::Internal {
            message: "request store lock poisoned".to_string(),
        })?;
        f(&*guard).map_err(AppError::from)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("store task failed: {e}"),
    })?
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::RequestNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
