//! API Handlers
//!
//! HTTP request handlers for each catalog server endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::catalog::{
    paginate, parse_page_param, search, Item, ItemStore, StatsCache, StatsSnapshot,
    DEFAULT_LIMIT, DEFAULT_PAGE,
};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{HealthResponse, ItemPage, ListQuery, NewItem};

/// Application state shared across all handlers.
///
/// The store is stateless over its file path; the stats cache is the one
/// piece of shared mutable state and lives behind Arc<RwLock<>>.
#[derive(Clone)]
pub struct AppState {
    /// File-backed item store
    pub store: ItemStore,
    /// Single-slot statistics cache
    pub stats: Arc<RwLock<StatsCache>>,
}

impl AppState {
    /// Creates a new AppState over the given store with the given stats TTL.
    pub fn new(store: ItemStore, stats_ttl: Duration) -> Self {
        Self {
            store,
            stats: Arc::new(RwLock::new(StatsCache::new(stats_ttl))),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ItemStore::new(config.data_path.clone()),
            Duration::from_secs(config.stats_ttl),
        )
    }
}

/// Handler for GET /items
///
/// Loads the full collection, applies the optional name filter, then slices
/// out one page. Pagination metadata reflects the filtered count.
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ItemPage>> {
    let items = state.store.load_all().await?;
    let filtered = search(items, query.q.as_deref());

    let page = parse_page_param(query.page.as_deref(), DEFAULT_PAGE);
    let limit = parse_page_param(query.limit.as_deref(), DEFAULT_LIMIT);
    let (page_items, meta) = paginate(filtered, page, limit);

    Ok(Json(ItemPage::new(page_items, meta)))
}

/// Handler for GET /items/:id
///
/// The id arrives as a raw path segment; anything that does not parse as an
/// integer cannot match an item and maps to the same 404.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>> {
    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::NotFound("Item not found".to_string()))?;

    let item = state.store.get(id).await?;
    Ok(Json(item))
}

/// Handler for POST /items
///
/// Accepts any item-shaped payload without validation, appends it with a
/// freshly assigned id, and invalidates the stats cache before responding,
/// so a stale snapshot can never be observed after the write commits.
pub async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<NewItem>,
) -> Result<(StatusCode, Json<Item>)> {
    let item = state.store.append(body.into_draft()).await?;

    state.stats.write().await.invalidate();
    debug!(id = item.id, "stats cache invalidated after creation");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Handler for GET /stats
///
/// Serves the cached snapshot while it is fresh; otherwise recomputes from
/// the full collection and refills the cache. Two concurrent recomputations
/// may race, which only wastes work since computation is read-only.
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsSnapshot>> {
    if let Some(snapshot) = state.stats.read().await.fresh() {
        debug!("serving stats from cache");
        return Ok(Json(snapshot));
    }

    info!("recalculating statistics");
    let items = state.store.load_all().await?;
    let snapshot = StatsSnapshot::compute(&items);

    state.stats.write().await.fill(snapshot.clone());
    Ok(Json(snapshot))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback handler for unmatched routes.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route Not Found".to_string())
}
