use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use galleria_api_types::result::JsonError;
use thiserror::Error;
use tracing::error;

/// Errors from the JSON endpoints, answered as a [`JsonError`] body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Artist not found")]
    ArtistNotFound,
    #[error("Error communicating with Artsy {0}")]
    ArtsyError(#[from] artsy::Error),
}

impl ApiError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            ApiError::ArtistNotFound => StatusCode::NOT_FOUND,
            ApiError::ArtsyError(artsy::Error::UnexpectedStatus(_)) => StatusCode::BAD_GATEWAY,
            ApiError::ArtsyError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.as_status_code();
        if status.is_server_error() {
            error!("error {}", self);
        }
        let e = format!("{self}");

        (status, Json(JsonError { error_message: e })).into_response()
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Internal HTTP Error {0}")]
    AxumError(#[from] axum::http::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("Error returned {self:?}");
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{self}")).into_response()
    }
}
