// handlers/public/alerts.rs - GET /api/alerts[/:id]

use axum::extract::State;
use serde::Deserialize;

use crate::database::models::alert;
use crate::database::{present, Repository, Row, SelectQuery};
use crate::middleware::{ApiResponse, ApiResult, QueryParams, RecordId};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AlertQuery {
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
    pub status: Option<String>,
}

impl AlertQuery {
    /// Shared by the public and admin lists, which differ only in cap
    pub fn apply(&self, select: SelectQuery) -> SelectQuery {
        select
            .filter_eq("type", present(self.alert_type.as_deref()))
            .filter_eq("status", present(self.status.as_deref()))
            .order_by("created_at DESC, id DESC")
    }
}

/// GET /api/alerts
pub async fn list(State(state): State<AppState>, QueryParams(query): QueryParams<AlertQuery>) -> ApiResult<Vec<Row>> {
    let repo = Repository::new(alert::TABLE, state.gateway());
    let select = query.apply(repo.select()).limit(alert::PUBLIC_LIMIT);
    Ok(ApiResponse::success(repo.select_any(select).await?))
}

/// GET /api/alerts/:id
pub async fn get(State(state): State<AppState>, RecordId(id): RecordId) -> ApiResult<Row> {
    let repo = Repository::new(alert::TABLE, state.gateway());
    Ok(ApiResponse::success(repo.select_404(id, &["*"]).await?))
}
