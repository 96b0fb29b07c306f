// handlers/public/search.rs - GET /api/search?q=

use axum::extract::State;
use serde::Deserialize;

use crate::middleware::{ApiResponse, ApiResult, QueryParams};
use crate::services::{search, SearchHit};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

pub async fn get(State(state): State<AppState>, QueryParams(query): QueryParams<SearchQuery>) -> ApiResult<Vec<SearchHit>> {
    let hits = search(state.gateway(), query.q.as_deref().unwrap_or_default()).await?;
    Ok(ApiResponse::success(hits))
}
