// handlers/admin/analytics.rs - GET /api/admin/analytics

use axum::extract::State;

use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{analytics, Analytics};
use crate::state::AppState;

pub async fn get(State(state): State<AppState>) -> ApiResult<Analytics> {
    Ok(ApiResponse::success(analytics(state.gateway()).await))
}
