use std::any::Any;

use axum::{
    http::{HeaderValue, StatusCode},
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::error::ApiError;
use crate::handlers::{admin, public};
use crate::middleware::admin_gate;
use crate::state::AppState;

/// Full route table with permissive CORS
pub fn app(state: AppState) -> Router {
    router(state, &[])
}

/// Full route table; an empty origin list means permissive CORS
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        // Public
        .route("/", get(public::root))
        .route("/api/health", get(public::health))
        .merge(public_routes())
        // Admin, behind the header gate
        .nest("/api/admin", admin_routes(state.clone()))
        .fallback(not_found)
        // Global middleware
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use axum::routing::post;
    use public::{crop_calendar, dashboard, faqs, knowledge_base, search, yield_records};

    Router::new()
        .route("/api/register", post(public::register))
        // Recommendations and lookup lists
        .route("/api/crops", get(public::crops))
        .route("/api/fertilizers", get(public::fertilizers))
        .route("/api/soil-types", get(public::soil_types))
        .route("/api/crop-types", get(public::crop_types))
        // Yield records
        .route("/api/yield-records", get(yield_records::list).post(yield_records::create))
        .route("/api/yield-records/crop/:crop_type", get(yield_records::list_for_crop))
        .route(
            "/api/yield-records/:id",
            get(yield_records::get).delete(yield_records::delete),
        )
        // Reference content
        .route("/api/faqs", get(faqs::list))
        .route("/api/faqs/:id", get(faqs::get))
        .route("/api/alerts", get(public::alerts::list))
        .route("/api/alerts/:id", get(public::alerts::get))
        .route("/api/crop-calendar", get(crop_calendar::list))
        .route("/api/crop-calendar/:id", get(crop_calendar::get))
        .route("/api/knowledge-base", get(knowledge_base::list))
        .route("/api/knowledge-base/categories", get(knowledge_base::categories))
        .route("/api/knowledge-base/:id", get(knowledge_base::get))
        // Aggregates
        .route("/api/search", get(search::get))
        .route("/api/dashboard/stats", get(dashboard::stats))
}

fn admin_routes(state: AppState) -> Router<AppState> {
    use admin::{alerts, analytics, crop_calendar, farmers, faqs, knowledge_base, settings};

    Router::new()
        .route("/faqs", get(faqs::list).post(faqs::create))
        .route("/faqs/:id", get(faqs::get).put(faqs::update).delete(faqs::delete))
        .route("/alerts", get(alerts::list).post(alerts::create))
        .route("/alerts/:id", get(alerts::get).put(alerts::update).delete(alerts::delete))
        .route("/crop-calendar", get(crop_calendar::list).post(crop_calendar::create))
        .route(
            "/crop-calendar/:id",
            get(crop_calendar::get)
                .put(crop_calendar::update)
                .delete(crop_calendar::delete),
        )
        .route("/knowledge-base", get(knowledge_base::list).post(knowledge_base::create))
        .route(
            "/knowledge-base/:id",
            get(knowledge_base::get)
                .put(knowledge_base::update)
                .delete(knowledge_base::delete),
        )
        .route("/settings", get(settings::list).post(settings::create))
        .route(
            "/settings/:id",
            get(settings::get).put(settings::update).delete(settings::delete),
        )
        .route("/farmers", get(farmers::list))
        .route("/analytics", get(analytics::get))
        .route_layer(from_fn_with_state(state, admin_gate))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(cors::Any)
        .allow_headers(cors::Any)
}

async fn not_found() -> ApiError {
    ApiError::not_found("Endpoint not found")
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "error": "Internal server error",
            "code": "INTERNAL_SERVER_ERROR"
        })),
    )
        .into_response()
}
