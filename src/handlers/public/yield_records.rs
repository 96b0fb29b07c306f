// handlers/public/yield_records.rs - /api/yield-records

use axum::extract::{Path, State};
use serde::Deserialize;
use serde_json::Value;

use crate::database::models::{yield_record, YieldRecordInput};
use crate::database::{present, Repository, Row};
use crate::middleware::{ApiResponse, ApiResult, JsonBody, QueryParams, RecordId};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldQuery {
    pub crop_type: Option<String>,
}

/// GET /api/yield-records
pub async fn list(State(state): State<AppState>, QueryParams(query): QueryParams<YieldQuery>) -> ApiResult<Vec<Row>> {
    list_by_crop(&state, present(query.crop_type.as_deref())).await
}

/// GET /api/yield-records/crop/:cropType
pub async fn list_for_crop(State(state): State<AppState>, Path(crop_type): Path<String>) -> ApiResult<Vec<Row>> {
    list_by_crop(&state, Some(crop_type.as_str())).await
}

async fn list_by_crop(state: &AppState, crop_type: Option<&str>) -> ApiResult<Vec<Row>> {
    let repo = Repository::new(yield_record::TABLE, state.gateway());
    let select = repo
        .select()
        .filter_eq("crop_type", crop_type)
        .order_by("harvest_date DESC, id DESC")
        .limit(yield_record::LIST_LIMIT);
    Ok(ApiResponse::success(repo.select_any(select).await?))
}

/// GET /api/yield-records/:id
pub async fn get(State(state): State<AppState>, RecordId(id): RecordId) -> ApiResult<Row> {
    let repo = Repository::new(yield_record::TABLE, state.gateway());
    Ok(ApiResponse::success(repo.select_404(id, &["*"]).await?))
}

/// POST /api/yield-records
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<YieldRecordInput>,
) -> ApiResult<Value> {
    let assignments = body.into_assignments()?;
    let id = Repository::new(yield_record::TABLE, state.gateway())
        .insert(assignments)
        .await?;
    Ok(ApiResponse::created_id("Yield record created", id))
}

/// DELETE /api/yield-records/:id
pub async fn delete(State(state): State<AppState>, RecordId(id): RecordId) -> ApiResult<Value> {
    let affected = Repository::new(yield_record::TABLE, state.gateway()).delete(id).await?;
    Ok(ApiResponse::ack("Yield record deleted", affected))
}
