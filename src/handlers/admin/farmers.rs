// handlers/admin/farmers.rs - GET /api/admin/farmers

use axum::extract::State;
use serde::Deserialize;

use crate::database::models::farmer;
use crate::database::{Repository, Row};
use crate::middleware::{ApiResponse, ApiResult, QueryParams};
use crate::state::AppState;

const LIST_LIMIT: u32 = 100;

#[derive(Debug, Default, Deserialize)]
pub struct FarmerQuery {
    pub search: Option<String>,
}

/// Registered farmers without their stored credential
pub async fn list(State(state): State<AppState>, QueryParams(query): QueryParams<FarmerQuery>) -> ApiResult<Vec<Row>> {
    let repo = Repository::new(farmer::TABLE, state.gateway());
    let select = repo
        .select()
        .columns(farmer::PUBLIC_COLUMNS)
        .filter_search(&["name", "location"], query.search.as_deref())
        .order_by("created_at DESC, id DESC")
        .limit(LIST_LIMIT);
    Ok(ApiResponse::success(repo.select_any(select).await?))
}
