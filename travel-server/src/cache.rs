//! Caching layer for search outcomes.
//!
//! The city graph never changes after startup, so the outcome of a search is
//! a pure function of the request tuple. Caching it lets repeated identical
//! requests skip the search. The TTL only bounds memory use.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Category, TravelRequest};
use crate::planner::SearchResult;

/// Everything about a request that can change its plan.
///
/// The username and request id are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlanKey {
    pub start_city: String,
    pub budget: u64,
    pub days: u32,
    pub preference: Category,
}

impl From<&TravelRequest> for PlanKey {
    fn from(request: &TravelRequest) -> Self {
        Self {
            start_city: request.start_city.clone(),
            budget: request.budget,
            days: request.days,
            preference: request.preference,
        }
    }
}

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 1000,
        }
    }
}

/// Cache of search results keyed by request.
#[derive(Clone)]
pub struct PlanCache {
    plans: MokaCache<PlanKey, Arc<SearchResult>>,
}

impl PlanCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let plans = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { plans }
    }

    /// Get a cached result.
    pub async fn get(&self, key: &PlanKey) -> Option<Arc<SearchResult>> {
        self.plans.get(key).await
    }

    /// Insert a result into the cache.
    pub async fn insert(&self, key: PlanKey, result: Arc<SearchResult>) {
        self.plans.insert(key, result).await;
    }

    /// Approximate number of cached plans. Lags behind recent inserts until
    /// moka runs its pending maintenance.
    pub fn entry_count(&self) -> u64 {
        self.plans.entry_count()
    }
}
