// handlers/admin/crop_calendar.rs - /api/admin/crop-calendar

use axum::{extract::State, Extension};
use serde_json::Value;

use crate::auth::AdminGrant;
use crate::database::models::{crop_calendar, CropCalendarInput};
use crate::database::{Repository, Row};
use crate::handlers::public::crop_calendar::{self as public_calendar, CalendarQuery};
use crate::middleware::{ApiResponse, ApiResult, JsonBody, QueryParams, RecordId};
use crate::state::AppState;

/// Same filters and cap as the public list
pub async fn list(state: State<AppState>, query: QueryParams<CalendarQuery>) -> ApiResult<Vec<Row>> {
    public_calendar::list(state, query).await
}

pub async fn get(state: State<AppState>, id: RecordId) -> ApiResult<Row> {
    public_calendar::get(state, id).await
}

pub async fn create(
    State(state): State<AppState>,
    Extension(grant): Extension<AdminGrant>,
    JsonBody(body): JsonBody<CropCalendarInput>,
) -> ApiResult<Value> {
    let id = Repository::new(crop_calendar::TABLE, state.gateway())
        .insert(body.into_assignments()?)
        .await?;
    tracing::info!(id, policy = grant.policy, "crop calendar entry created");
    Ok(ApiResponse::created_id("Crop calendar entry created", id))
}

pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(body): JsonBody<CropCalendarInput>,
) -> ApiResult<Value> {
    let affected = Repository::new(crop_calendar::TABLE, state.gateway())
        .update(id, body.into_assignments()?, &[])
        .await?;
    Ok(ApiResponse::ack("Crop calendar entry updated", affected))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(grant): Extension<AdminGrant>,
    RecordId(id): RecordId,
) -> ApiResult<Value> {
    let affected = Repository::new(crop_calendar::TABLE, state.gateway()).delete(id).await?;
    tracing::info!(id, affected, policy = grant.policy, "crop calendar entry deleted");
    Ok(ApiResponse::ack("Crop calendar entry deleted", affected))
}
