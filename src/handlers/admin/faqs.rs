// handlers/admin/faqs.rs - /api/admin/faqs

use axum::{extract::State, Extension};
use serde::Deserialize;
use serde_json::Value;

use crate::auth::AdminGrant;
use crate::database::models::{faq, FaqInput};
use crate::database::{present, Repository, Row};
use crate::middleware::{ApiResponse, ApiResult, JsonBody, QueryParams, RecordId};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AdminFaqQuery {
    pub category: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}

/// GET /api/admin/faqs - every status, newest first
pub async fn list(State(state): State<AppState>, QueryParams(query): QueryParams<AdminFaqQuery>) -> ApiResult<Vec<Row>> {
    let repo = Repository::new(faq::TABLE, state.gateway());
    let select = repo
        .select()
        .filter_eq("category", present(query.category.as_deref()))
        .filter_eq("status", present(query.status.as_deref()))
        .filter_search(&["question", "answer"], query.search.as_deref())
        .order_by("created_at DESC, id DESC")
        .limit(faq::ADMIN_LIMIT);
    Ok(ApiResponse::success(repo.select_any(select).await?))
}

pub async fn get(State(state): State<AppState>, RecordId(id): RecordId) -> ApiResult<Row> {
    let repo = Repository::new(faq::TABLE, state.gateway());
    Ok(ApiResponse::success(repo.select_404(id, &["*"]).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(grant): Extension<AdminGrant>,
    JsonBody(body): JsonBody<FaqInput>,
) -> ApiResult<Value> {
    let id = Repository::new(faq::TABLE, state.gateway())
        .insert(body.into_assignments()?)
        .await?;
    tracing::info!(id, policy = grant.policy, "faq created");
    Ok(ApiResponse::created_id("FAQ created", id))
}

pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(body): JsonBody<FaqInput>,
) -> ApiResult<Value> {
    let affected = Repository::new(faq::TABLE, state.gateway())
        .update(id, body.into_assignments()?, &[])
        .await?;
    Ok(ApiResponse::ack("FAQ updated", affected))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(grant): Extension<AdminGrant>,
    RecordId(id): RecordId,
) -> ApiResult<Value> {
    let affected = Repository::new(faq::TABLE, state.gateway()).delete(id).await?;
    tracing::info!(id, affected, policy = grant.policy, "faq deleted");
    Ok(ApiResponse::ack("FAQ deleted", affected))
}
