// handlers/admin/knowledge_base.rs - /api/admin/knowledge-base

use axum::{extract::State, Extension};
use serde_json::Value;

use crate::auth::AdminGrant;
use crate::database::models::{knowledge_base, ArticleInput};
use crate::database::{present, Repository, Row};
use crate::handlers::public::knowledge_base::ArticleQuery;
use crate::middleware::{ApiResponse, ApiResult, JsonBody, QueryParams, RecordId};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>, QueryParams(query): QueryParams<ArticleQuery>) -> ApiResult<Vec<Row>> {
    let category = present(query.category.as_deref()).filter(|c| !c.eq_ignore_ascii_case("all"));
    let repo = Repository::new(knowledge_base::TABLE, state.gateway());
    let select = repo
        .select()
        .filter_eq("category", category)
        .filter_search(&["title", "content", "tags"], query.search.as_deref())
        .order_by("created_at DESC, id DESC")
        .limit(knowledge_base::LIST_LIMIT);
    Ok(ApiResponse::success(repo.select_any(select).await?))
}

/// Admin reads do not count as views
pub async fn get(State(state): State<AppState>, RecordId(id): RecordId) -> ApiResult<Row> {
    let repo = Repository::new(knowledge_base::TABLE, state.gateway());
    Ok(ApiResponse::success(repo.select_404(id, &["*"]).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(grant): Extension<AdminGrant>,
    JsonBody(body): JsonBody<ArticleInput>,
) -> ApiResult<Value> {
    let id = Repository::new(knowledge_base::TABLE, state.gateway())
        .insert(body.into_assignments()?)
        .await?;
    tracing::info!(id, policy = grant.policy, "article created");
    Ok(ApiResponse::created_id("Article created", id))
}

pub async fn update(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(body): JsonBody<ArticleInput>,
) -> ApiResult<Value> {
    let affected = Repository::new(knowledge_base::TABLE, state.gateway())
        .update(id, body.into_assignments()?, &["updated_at"])
        .await?;
    Ok(ApiResponse::ack("Article updated", affected))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(grant): Extension<AdminGrant>,
    RecordId(id): RecordId,
) -> ApiResult<Value> {
    let affected = Repository::new(knowledge_base::TABLE, state.gateway()).delete(id).await?;
    tracing::info!(id, affected, policy = grant.policy, "article deleted");
    Ok(ApiResponse::ack("Article deleted", affected))
}
