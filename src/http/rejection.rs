use crate::Error;
use axum::http::StatusCode;
use axum::response::IntoResponse;

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
