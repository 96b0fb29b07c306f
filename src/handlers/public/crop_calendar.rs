// handlers/public/crop_calendar.rs - GET /api/crop-calendar[/:id]

use axum::extract::State;
use serde::Deserialize;

use crate::database::models::crop_calendar;
use crate::database::{present, Repository, Row};
use crate::middleware::{ApiResponse, ApiResult, QueryParams, RecordId};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarQuery {
    pub season: Option<String>,
    pub region: Option<String>,
    pub soil_type: Option<String>,
}

/// GET /api/crop-calendar - `season` matches either the planting or harvesting season
pub async fn list(State(state): State<AppState>, QueryParams(query): QueryParams<CalendarQuery>) -> ApiResult<Vec<Row>> {
    let repo = Repository::new(crop_calendar::TABLE, state.gateway());
    let select = repo
        .select()
        .filter_any_eq(&["planting_season", "harvesting_season"], present(query.season.as_deref()))
        .filter_eq("region", present(query.region.as_deref()))
        .filter_eq("soil_type", present(query.soil_type.as_deref()))
        .order_by("crop_name ASC")
        .limit(crop_calendar::LIST_LIMIT);
    Ok(ApiResponse::success(repo.select_any(select).await?))
}

/// GET /api/crop-calendar/:id
pub async fn get(State(state): State<AppState>, RecordId(id): RecordId) -> ApiResult<Row> {
    let repo = Repository::new(crop_calendar::TABLE, state.gateway());
    Ok(ApiResponse::success(repo.select_404(id, &["*"]).await?))
}
