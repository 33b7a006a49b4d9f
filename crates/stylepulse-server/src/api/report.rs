use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use tower_http::request_id::RequestId;

use crate::{analyzer::analyze_trends, middleware::request_id_str};

use super::{ApiError, AppState};

/// `GET /generate_report`: the current trend report, or a generic 500.
pub(super) async fn generate_report(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    match analyze_trends(&state.pool).await {
        Some(report) => (StatusCode::OK, Json(report)).into_response(),
        None => {
            tracing::error!(
                request_id = request_id_str(Some(&req_id)),
                "report generation failed"
            );
            ApiError::internal("Failed to generate report").into_response()
        }
    }
}
