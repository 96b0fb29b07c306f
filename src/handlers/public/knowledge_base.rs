// handlers/public/knowledge_base.rs - GET /api/knowledge-base[/categories|/:id]

use axum::extract::State;
use serde::Deserialize;
use serde_json::Value;

use crate::database::models::knowledge_base;
use crate::database::{present, Repository, Row, Statement};
use crate::middleware::{ApiResponse, ApiResult, QueryParams, RecordId};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// GET /api/knowledge-base - `category=all` is the same as no category
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

/// GET /api/knowledge-base/categories
pub async fn categories(State(state): State<AppState>) -> ApiResult<Vec<Value>> {
    let repo = Repository::new(knowledge_base::TABLE, state.gateway());
    Ok(ApiResponse::success(repo.distinct("category").await?))
}

/// GET /api/knowledge-base/:id - counts the view and reports the post-increment total.
/// The counter is best-effort: a failed increment is logged and the article is still returned.
pub async fn get(State(state): State<AppState>, RecordId(id): RecordId) -> ApiResult<Row> {
    let gateway = state.gateway();
    let mut article = Repository::new(knowledge_base::TABLE, gateway)
        .select_404(id, &["*"])
        .await?;

    let bump = Statement::new("UPDATE knowledge_base SET views = views + 1 WHERE id = $1").bind(id);
    match gateway.execute(&bump).await {
        Ok(outcome) if outcome.rows_affected > 0 => count_view(&mut article),
        Ok(_) => {}
        Err(e) => tracing::warn!(id, error = %e, "view counter update failed, returning article unchanged"),
    }

    Ok(ApiResponse::success(article))
}

fn count_view(article: &mut Row) {
    let views = article.get("views").and_then(Value::as_i64).unwrap_or(0);
    article.insert("views".to_string(), Value::from(views + 1));
}
