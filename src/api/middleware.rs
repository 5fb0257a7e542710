//! Request tracing middleware.

use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::Instrument;

/// Wraps each request in a span and logs its outcome.
pub async fn trace_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let route = request.uri().path().to_owned();
    let span = tracing::info_span!("http.request", method = %method, route = %route);

    let started = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    span.in_scope(|| {
        tracing::info!(status = response.status().as_u16(), elapsed_ms, "request completed");
    });
    response
}
