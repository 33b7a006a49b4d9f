//! Request-id and tracing layers for the HTTP server.

use axum::{
    body::Body,
    http::{HeaderName, Request},
};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

type MakeRequestSpan = fn(&Request<Body>) -> Span;

/// Keeps an incoming `x-request-id` or assigns a `UUIDv4`, and stores it in
/// request extensions as [`RequestId`].
pub fn set_request_id() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), MakeRequestUuid)
}

/// Copies the request id onto the response.
pub fn propagate_request_id() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER))
}

/// Per-request span carrying method, URI and request id. Must sit inside
/// [`set_request_id`].
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeRequestSpan> {
    TraceLayer::new_for_http().make_span_with(request_span as MakeRequestSpan)
}

/// The request id as text; `-` if absent or not UTF-8.
pub fn request_id_str(id: Option<&RequestId>) -> &str {
    id.and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
}

fn request_span(req: &Request<Body>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %req.method(),
        uri = %req.uri(),
        request_id = request_id_str(req.extensions().get::<RequestId>()),
    )
}
