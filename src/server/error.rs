use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::PipelineError;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Errors surfaced at the HTTP boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be read as a `BlogRequest`
    #[error("{}", .0.body_text())]
    BadRequest(#[from] JsonRejection),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(rejection) => rejection.status(),
            ApiError::Pipeline(PipelineError::UnknownLength { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StageName;

    #[test]
    fn test_status_mapping() {
        let bad_length = ApiError::from(PipelineError::UnknownLength {
            value: "tiny".to_string(),
        });
        assert_eq!(bad_length.status(), StatusCode::BAD_REQUEST);

        let stage = ApiError::from(PipelineError::Stage {
            stage: StageName::Review,
            message: "timeout".to_string(),
        });
        assert_eq!(stage.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(stage.to_string(), "review stage failed: timeout");
    }
}
