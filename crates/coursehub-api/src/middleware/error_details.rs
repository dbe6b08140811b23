use crate::error::RedactedErrorBody;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Strips `details` and `error_type` from error bodies in production.
pub async fn error_details_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<RedactedErrorBody>() {
        Some(RedactedErrorBody(body)) if state.is_production => {
            (response.status(), Json(body)).into_response()
        }
        _ => response,
    }
}
