use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Admin gate: runs the injected authority before any admin handler.
/// On refusal the wrapped handler is never called.
pub async fn admin_gate(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    match state.admin.authorize(request.headers()) {
        Ok(grant) => {
            request.extensions_mut().insert(grant);
            next.run(request).await
        }
        Err(err) => {
            tracing::warn!(
                method = %request.method(),
                path = %request.uri().path(),
                "admin gate refused request"
            );
            err.into_response()
        }
    }
}
