// handlers/public/root.rs - GET / and GET /api/health

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - endpoint manifest
pub async fn root() -> Json<Value> {
    Json(json!({
        "success": true,
        "name": "Eco-Farm API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /api/health",
            "register": "POST /api/register",
            "recommendations": "GET /api/crops, /api/fertilizers, /api/soil-types, /api/crop-types",
            "yieldRecords": "GET, POST /api/yield-records; GET /api/yield-records/crop/:cropType; GET, DELETE /api/yield-records/:id",
            "faqs": "GET /api/faqs[/:id]",
            "alerts": "GET /api/alerts[/:id]",
            "cropCalendar": "GET /api/crop-calendar[/:id]",
            "knowledgeBase": "GET /api/knowledge-base[/categories|/:id]",
            "search": "GET /api/search?q=",
            "dashboard": "GET /api/dashboard/stats",
            "admin": "/api/admin/* (requires admin header)"
        }
    }))
}

/// GET /api/health - liveness plus a database round trip
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.gateway().ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok", "db": "connected" }))),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "db": "unavailable" })),
            )
        }
    }
}
