// handlers/public/recommendations.rs - crop and fertilizer lookups

use axum::extract::State;
use serde::Deserialize;
use serde_json::Value;

use crate::database::models::recommendation::{
    CROP_COLUMNS, CROP_LIMIT, CROP_TABLE, FERTILIZER_COLUMNS, FERTILIZER_LIMIT, FERTILIZER_TABLE,
};
use crate::database::{present, Repository, Row};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, QueryParams};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropQuery {
    pub soil_type: Option<String>,
    pub temperature: Option<String>,
    pub rainfall: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerQuery {
    pub soil_type: Option<String>,
    pub crop_type: Option<String>,
    pub nutrient_deficiency: Option<String>,
}

/// GET /api/crops - every filter is bound even when absent; NULL disables it
pub async fn crops(State(state): State<AppState>, QueryParams(query): QueryParams<CropQuery>) -> ApiResult<Vec<Row>> {
    let temperature = parse_number("temperature", query.temperature.as_deref())?;
    let rainfall = parse_number("rainfall", query.rainfall.as_deref())?;

    let repo = Repository::new(CROP_TABLE, state.gateway());
    let select = repo
        .select()
        .columns(CROP_COLUMNS)
        .filter_nullable("soil_type", "=", "text", present(query.soil_type.as_deref()))
        .filter_nullable("temperature", "<=", "float8", temperature)
        .filter_nullable("rainfall", "<=", "float8", rainfall)
        .order_by("temperature DESC, rainfall DESC")
        .limit(CROP_LIMIT);

    Ok(ApiResponse::success(repo.select_any(select).await?))
}

/// GET /api/fertilizers
pub async fn fertilizers(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<FertilizerQuery>,
) -> ApiResult<Vec<Row>> {
    let repo = Repository::new(FERTILIZER_TABLE, state.gateway());
    let select = repo
        .select()
        .columns(FERTILIZER_COLUMNS)
        .filter_eq("soil_type", present(query.soil_type.as_deref()))
        .filter_eq("crop_type", present(query.crop_type.as_deref()))
        .filter_eq("nutrient_deficiency", present(query.nutrient_deficiency.as_deref()))
        .order_by("effectiveness DESC")
        .limit(FERTILIZER_LIMIT);

    Ok(ApiResponse::success(repo.select_any(select).await?))
}

/// GET /api/soil-types
pub async fn soil_types(State(state): State<AppState>) -> ApiResult<Vec<Value>> {
    let repo = Repository::new(CROP_TABLE, state.gateway());
    Ok(ApiResponse::success(repo.distinct("soil_type").await?))
}

/// GET /api/crop-types
pub async fn crop_types(State(state): State<AppState>) -> ApiResult<Vec<Value>> {
    let repo = Repository::new(FERTILIZER_TABLE, state.gateway());
    Ok(ApiResponse::success(repo.distinct("crop_type").await?))
}

fn parse_number(field: &str, raw: Option<&str>) -> Result<Option<f64>, ApiError> {
    match present(raw) {
        None => Ok(None),
        Some(text) => text
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(|| ApiError::validation_error(format!("{} must be a number", field))),
    }
}
