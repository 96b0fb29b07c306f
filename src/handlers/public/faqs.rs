// handlers/public/faqs.rs - GET /api/faqs[/:id]

use axum::extract::State;
use serde::Deserialize;

use crate::database::models::faq;
use crate::database::{present, Repository, Row};
use crate::middleware::{ApiResponse, ApiResult, QueryParams, RecordId};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FaqQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// GET /api/faqs - active FAQs only
pub async fn list(State(state): State<AppState>, QueryParams(query): QueryParams<FaqQuery>) -> ApiResult<Vec<Row>> {
    let repo = Repository::new(faq::TABLE, state.gateway());
    let select = repo
        .select()
        .filter_eq("status", Some("active"))
        .filter_eq("category", present(query.category.as_deref()))
        .filter_search(&["question", "answer"], query.search.as_deref())
        .order_by("category ASC, id ASC")
        .limit(faq::PUBLIC_LIMIT);
    Ok(ApiResponse::success(repo.select_any(select).await?))
}

/// GET /api/faqs/:id
pub async fn get(State(state): State<AppState>, RecordId(id): RecordId) -> ApiResult<Row> {
    let repo = Repository::new(faq::TABLE, state.gateway());
    Ok(ApiResponse::success(repo.select_404(id, &["*"]).await?))
}
