use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Handler error: logged in full, answered with a bare 500.
#[derive(Debug)]
pub struct AppError(api::Error);

impl<E> From<E> for AppError
where
    E: Into<api::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
