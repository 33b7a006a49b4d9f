mod report;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::PgPool;
use stylepulse_sentiment::SentimentModel;
use stylepulse_twitter::TwitterClient;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::middleware::{propagate_request_id, set_request_id, trace_layer, REQUEST_ID_HEADER};

/// Shared handles for the HTTP server and the scheduler.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub twitter: Arc<TwitterClient>,
    pub model: Arc<dyn SentimentModel>,
}

/// Error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    error: &'static str,
}

impl ApiError {
    #[must_use]
    pub fn internal(message: &'static str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    database: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/generate_report", get(report::generate_report))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id())
                .layer(trace_layer())
                .layer(propagate_request_id())
                .layer(build_cors()),
        )
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match stylepulse_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthData {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check: database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthData {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}
