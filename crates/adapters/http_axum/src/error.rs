//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hbnb_domain::error::HbnbError;

/// JSON error body returned by API endpoints. Every error carries `msg`;
/// conflicts also carry a numeric `code`.
#[derive(Serialize)]
struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<u32>,
    msg: String,
}

/// Maps [`HbnbError`] to an HTTP response with appropriate status code.
pub enum ApiError {
    /// An error raised by the application or domain layer.
    Domain(HbnbError),
    /// The request could not be read before reaching a handler.
    Rejected { status: StatusCode, msg: String },
}

impl ApiError {
    /// Reject a request whose parameters could not be extracted.
    pub(crate) fn rejected(status: StatusCode, msg: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            msg: msg.into(),
        }
    }
}

impl<E: Into<HbnbError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self::Domain(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            Self::Domain(err) => err,
            Self::Rejected { status, msg } => {
                tracing::debug!(%status, %msg, "request rejected");
                return (status, Json(ErrorBody { code: None, msg })).into_response();
            }
        };

        let (status, code, msg) = match &err {
            HbnbError::Validation(err) => (StatusCode::BAD_REQUEST, None, err.to_string()),
            HbnbError::NotFound(err) => (StatusCode::NOT_FOUND, None, err.to_string()),
            HbnbError::Conflict(err) => (StatusCode::CONFLICT, Some(err.code()), err.to_string()),
            HbnbError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    None,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { code, msg })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hbnb_domain::error::{ConflictError, NotFoundError, ValidationError};
    use http_body_util::BodyExt;

    async fn render(err: HbnbError) -> (StatusCode, serde_json::Value) {
        let response = ApiError::from(err).into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_render_rejection_with_msg_body() {
        let response = ApiError::rejected(StatusCode::UNSUPPORTED_MEDIA_TYPE, "bad body")
            .into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "msg": "bad body" }));
    }

    #[tokio::test]
    async fn should_map_conflict_to_409_with_code() {
        let (status, body) = render(
            ConflictError::DuplicateName {
                entity: "Amenity",
                name: "wifi".to_string(),
            }
            .into(),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], 10003);
        assert_eq!(body["msg"], "Name already exists");
    }

    #[tokio::test]
    async fn should_map_not_found_to_404_without_code() {
        let (status, body) = render(
            NotFoundError {
                entity: "Place",
                id: "3".to_string(),
            }
            .into(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["msg"], "Place does not exist.");
        assert!(body.get("code").is_none());
    }

    #[tokio::test]
    async fn should_map_validation_to_400() {
        let (status, body) = render(ValidationError::MissingField("name").into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "Missing name");
    }

    #[tokio::test]
    async fn should_hide_storage_details_behind_500() {
        let source: Box<dyn std::error::Error + Send + Sync> = "disk on fire".into();
        let (status, body) = render(HbnbError::Storage(source)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["msg"], "internal server error");
    }
}
