// handlers/admin/alerts.rs - /api/admin/alerts

use axum::{extract::State, Extension};
use serde_json::Value;

use crate::auth::AdminGrant;
use crate::database::models::{alert, AlertInput};
use crate::database::{Repository, Row};
use crate::handlers::public::alerts::AlertQuery;
use crate::middleware::{ApiResponse, ApiResult, JsonBody, QueryParams, RecordId};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>, QueryParams(query): QueryParams<AlertQuery>) -> ApiResult<Vec<Row>> {
    let repo = Repository::new(alert::TABLE, state.gateway());
    let select = query.apply(repo.select()).limit(alert::ADMIN_LIMIT);
    Ok(ApiResponse::success(repo.select_any(select).await?))
}

pub async fn get(State(state): State<AppState>, RecordId(id): RecordId) -> ApiResult<Row> {
    let repo = Repository::new(alert::TABLE, state.gateway());
    Ok(ApiResponse::success(repo.select_404(id, &["*"]).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(grant): Extension<AdminGrant>,
    JsonBody(body): JsonBody<AlertInput>,
) -> ApiResult<Value> {
    let id = Repository::new(alert::TABLE, state.gateway())
        .insert(body.into_assignments()?)
        .await?;
    tracing::info!(id, policy = grant.policy, "alert created");
    Ok(ApiResponse::created_id("Alert created", id))
}

pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(body): JsonBody<AlertInput>,
) -> ApiResult<Value> {
    let affected = Repository::new(alert::TABLE, state.gateway())
        .update(id, body.into_assignments()?, &[])
        .await?;
    Ok(ApiResponse::ack("Alert updated", affected))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(grant): Extension<AdminGrant>,
    RecordId(id): RecordId,
) -> ApiResult<Value> {
    let affected = Repository::new(alert::TABLE, state.gateway()).delete(id).await?;
    tracing::info!(id, affected, policy = grant.policy, "alert deleted");
    Ok(ApiResponse::ack("Alert deleted", affected))
}
