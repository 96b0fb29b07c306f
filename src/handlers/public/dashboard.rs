// handlers/public/dashboard.rs - GET /api/dashboard/stats

use axum::extract::State;

use crate::middleware::{ApiResponse, ApiResult};
use crate::services::{dashboard_stats, DashboardStats};
use crate::state::AppState;

/// Never fails; unavailable figures are reported as zero or empty
pub async fn stats(State(state): State<AppState>) -> ApiResult<DashboardStats> {
    Ok(ApiResponse::success(dashboard_stats(state.gateway()).await))
}
