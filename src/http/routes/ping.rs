use crate::http::response::Response;
use axum::response::Json;

pub async fn ping_handler() -> Json<Response> {
    Json(Response::success())
}
