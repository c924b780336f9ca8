use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

use crate::external::DatasetError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("company not found")]
    NotFound,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("dataset error: {0}")]
    Dataset(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Company not found").into_response(),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Dataset(msg) => (StatusCode::BAD_GATEWAY, msg).into_response(),
        }
    }
}

impl From<DatasetError> for AppError {
    fn from(value: DatasetError) -> Self {
        AppError::Dataset(value.to_string())
    }
}
