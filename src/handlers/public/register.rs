// handlers/public/register.rs - POST /api/register

use axum::extract::State;
use serde_json::{json, Value};

use crate::database::models::{farmer, FarmerRegistration};
use crate::database::{DatabaseError, Repository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, JsonBody};
use crate::state::AppState;

/// POST /api/register - create a farmer account
///
/// The phone number is unique at the schema level, so concurrent registrations
/// of the same number resolve inside the database: exactly one INSERT wins and
/// every other caller receives the conflict below.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<FarmerRegistration>,
) -> ApiResult<Value> {
    let assignments = body.into_assignments()?;

    let repo = Repository::new(farmer::TABLE, state.gateway());
    let farmer_id = match repo.insert(assignments).await {
        Ok(id) => id,
        Err(DatabaseError::UniqueViolation(constraint)) if constraint == farmer::PHONE_CONSTRAINT => {
            return Err(ApiError::conflict("Phone number already registered"));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(farmer_id, "farmer registered");
    Ok(ApiResponse::success(json!({
        "success": true,
        "message": "Registration successful",
        "farmerId": farmer_id
    })))
}
