use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every failure surfaces as a bare 500. Store errors carry no
        // status-code distinction on the wire: table missing, throttled
        // and malformed records all look the same to the client.
        tracing::error!(error = %self.0, "request failed");

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
