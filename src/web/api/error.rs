use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::groundtrack::GroundTrackError;

// Unified API error type. Dataset failures surface as 500 JSON bodies so
// the dashboard's fetch layer can show its error state instead of a
// broken page.
pub enum ApiError {
    Dataset(GroundTrackError),
}

impl From<GroundTrackError> for ApiError {
    fn from(e: GroundTrackError) -> Self {
        ApiError::Dataset(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Dataset(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_message("dataset_error", &e.to_string())),
            )
                .into_response(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
