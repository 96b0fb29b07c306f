// handlers/admin/settings.rs - /api/admin/settings

use axum::{extract::State, Extension};
use serde::Deserialize;
use serde_json::Value;

use crate::auth::AdminGrant;
use crate::database::models::{setting, SettingInput};
use crate::database::{present, Repository, Row};
use crate::middleware::{ApiResponse, ApiResult, JsonBody, QueryParams, RecordId};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SettingQuery {
    pub category: Option<String>,
}

pub async fn list(State(state): State<AppState>, QueryParams(query): QueryParams<SettingQuery>) -> ApiResult<Vec<Row>> {
    let repo = Repository::new(setting::TABLE, state.gateway());
    let select = repo
        .select()
        .filter_eq("category", present(query.category.as_deref()))
        .order_by("category ASC, setting_key ASC")
        .limit(setting::LIST_LIMIT);
    Ok(ApiResponse::success(repo.select_any(select).await?))
}

pub async fn get(State(state): State<AppState>, RecordId(id): RecordId) -> ApiResult<Row> {
    let repo = Repository::new(setting::TABLE, state.gateway());
    Ok(ApiResponse::success(repo.select_404(id, &["*"]).await?))
}

/// A duplicate key surfaces as a conflict
pub async fn create(
    State(state): State<AppState>,
    Extension(grant): Extension<AdminGrant>,
    JsonBody(body): JsonBody<SettingInput>,
) -> ApiResult<Value> {
    let id = Repository::new(setting::TABLE, state.gateway())
        .insert(body.into_assignments()?)
        .await?;
    tracing::info!(id, policy = grant.policy, "setting created");
    Ok(ApiResponse::created_id("Setting created", id))
}

/// A key already used by another row surfaces as a conflict
pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(body): JsonBody<SettingInput>,
) -> ApiResult<Value> {
    let affected = Repository::new(setting::TABLE, state.gateway())
        .update(id, body.into_assignments()?, &["updated_at"])
        .await?;
    Ok(ApiResponse::ack("Setting updated", affected))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(grant): Extension<AdminGrant>,
    RecordId(id): RecordId,
) -> ApiResult<Value> {
    let affected = Repository::new(setting::TABLE, state.gateway()).delete(id).await?;
    tracing::info!(id, affected, policy = grant.policy, "setting deleted");
    Ok(ApiResponse::ack("Setting deleted", affected))
}
