use crate::table::TableError;
use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<TableError> for AppError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::UnknownRow(_) => Self::not_found(err.to_string()),
            TableError::UnknownField(_) => Self::bad_request(err.to_string()),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Failures of a save round trip. These are logged, never shown.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response from {url} is not a save acknowledgement: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
