//! HTTP mapping for [`FeedbackError`]

use crate::error::FeedbackError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Error body returned by every endpoint
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// JSON body extractor whose rejections use [`ErrorBody`]
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(FeedbackError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for FeedbackError {
    fn from(rejection: JsonRejection) -> Self {
        FeedbackError::InvalidRequest(rejection.body_text())
    }
}

impl FeedbackError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            FeedbackError::InvalidFeedback(_)
            | FeedbackError::InvalidFeedbackType(_)
            | FeedbackError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            FeedbackError::StoreWrite { .. }
            | FeedbackError::Config(_)
            | FeedbackError::Io(_)
            | FeedbackError::Serialization(_)
            | FeedbackError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FeedbackError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = if self.is_client_error() {
            self.to_string()
        } else {
            error!("Request failed: {}", self);
            "Internal server error".to_string()
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::ValidationFailure;

    #[test]
    fn test_status_codes() {
        let invalid = FeedbackError::InvalidFeedback(ValidationFailure::MissingField("user_id"));
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            FeedbackError::InvalidFeedbackType("praise".into()).status_code(),
            StatusCode::BAD_REQUEST
        );

        let write = FeedbackError::StoreWrite {
            path: "feedback_data.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(write.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = FeedbackError::InvalidRequest("missing field `response`".into());
        assert!(body.is_client_error());
        assert_eq!(body.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            write.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
