use anyhow::Result;
use axum::extract::{Path, Query, State};
use axum::http::HeaderValue;
use axum::{routing::get, Json, Router};
use lse_core::{KeywordIndex, Occurrence, TOP_N};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub kw1: String,
    #[serde(default)]
    pub kw2: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}
fn default_limit() -> usize { TOP_N }

#[derive(Serialize)]
pub struct SearchResponse {
    pub kw1: String,
    pub kw2: String,
    pub took_s: f64,
    /// false when neither keyword is in the index
    pub matched: bool,
    pub results: Vec<String>,
}

#[derive(Serialize)]
pub struct KeywordResponse {
    pub keyword: String,
    pub occurrences: Vec<Occurrence>,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub documents: usize,
    pub keywords: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<KeywordIndex>,
}

/// Build the index from a document list and noise-word file, then the router.
pub fn build_app(docs: &str, noise: &str) -> Result<Router> {
    let index = KeywordIndex::make_index(docs, noise)?;
    tracing::info!(
        documents = index.document_count(),
        keywords = index.keyword_count(),
        "index loaded"
    );
    Ok(router(index))
}

pub fn router(index: KeywordIndex) -> Router {
    let app_state = AppState { index: Arc::new(index) };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/keyword/:keyword", get(keyword_handler))
        .route("/stats", get(stats_handler))
        .with_state(app_state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Origins from CORS_ALLOW_ORIGIN (comma-separated); any origin when unset or empty.
fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = std::env::var("CORS_ALLOW_ORIGIN")
        .map(|val| val.split(',').filter_map(|s| s.trim().parse().ok()).collect())
        .unwrap_or_default();
    let allow_origin =
        if origins.is_empty() { AllowOrigin::from(Any) } else { AllowOrigin::list(origins) };
    CorsLayer::new().allow_origin(allow_origin).allow_methods(Any).allow_headers(Any)
}

fn query_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let kw1 = query_term(&params.kw1);
    let kw2 = query_term(&params.kw2);
    let found = state.index.top_search(&kw1, &kw2, params.limit);
    let elapsed = start.elapsed();
    tracing::debug!(%kw1, %kw2, matched = found.is_some(), "search");
    Json(SearchResponse {
        kw1,
        kw2,
        took_s: elapsed.as_secs_f64(),
        matched: found.is_some(),
        results: found.unwrap_or_default(),
    })
}

pub async fn keyword_handler(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Json<KeywordResponse> {
    let keyword = query_term(&keyword);
    let occurrences = state.index.occurrences(&keyword).to_vec();
    Json(KeywordResponse { keyword, occurrences })
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        documents: state.index.document_count(),
        keywords: state.index.keyword_count(),
    })
}
