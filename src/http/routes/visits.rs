use crate::http::response::Response;
use crate::http::Server;
use axum::extract;
use axum::http::header::CACHE_CONTROL;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Json;
use hyper::http::StatusCode;
use lazy_static::lazy_static;
use prometheus::{register_int_counter, IntCounter};
use std::sync::Arc;
use tracing::error;

lazy_static! {
    static ref VISIT_REQUESTS: IntCounter = register_int_counter!(
        "visit_requests",
        "Number of visit count requests served"
    )
    .unwrap();
    static ref VISIT_FALLBACKS: IntCounter = register_int_counter!(
        "visit_fallbacks",
        "Number of requests served with the fallback count"
    )
    .unwrap();
}

pub async fn visits_handler(
    server: extract::Extension<Arc<Server>>,
) -> (StatusCode, HeaderMap, Json<Response>) {
    VISIT_REQUESTS.inc();

    match server.0.counter.hit().await {
        Ok(count) => {
            let mut headers = HeaderMap::new();
            headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));

            (StatusCode::OK, headers, Json(Response::count(count)))
        }
        Err(e) => {
            error!(error = %e, "Failed to hit the visit counter, serving fallback");
            VISIT_FALLBACKS.inc();

            (StatusCode::OK, HeaderMap::new(), Json(Response::count(0)))
        }
    }
}
