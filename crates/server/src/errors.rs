use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use service::dog::StoreError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const INVALID_ID_MESSAGE: &str = "id should be a number";
pub const NO_DATA: &str = "No data";

/// Error responses of the dog endpoints.
///
/// Each handler picks the variant for a failure itself; anything it passes
/// on with `?` becomes `Internal`.
#[derive(Debug)]
pub enum ApiError {
    /// 400 `{"message": "id should be a number"}`
    InvalidId,
    /// 400 `{"errors": [...]}`
    Invalid(Vec<String>),
    /// 400 `{"errors": {"code": ..., "message": ...}}` with the store error as-is.
    Rejected(StoreError),
    /// 400 `{"message": ...}` for a body that is not JSON.
    MalformedBody(String),
    /// 204 with a `No data` body.
    NoData,
    /// Bare status, empty body.
    Status(StatusCode),
    /// 500 `{"message": "Internal Server Error"}`; the detail is only logged.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidId => {
                let body = Json(json!({"message": INVALID_ID_MESSAGE}));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Invalid(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({"errors": errors}))).into_response()
            }
            ApiError::Rejected(e) => {
                (StatusCode::BAD_REQUEST, Json(json!({"errors": e}))).into_response()
            }
            ApiError::MalformedBody(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({"message": msg}))).into_response()
            }
            ApiError::NoData => (StatusCode::NO_CONTENT, NO_DATA).into_response(),
            ApiError::Status(status) => status.into_response(),
            ApiError::Internal(detail) => {
                error!(error = %detail, "unhandled error in request handler");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"message": "Internal Server Error"})),
                )
                    .into_response()
            }
        }
    }
}

// Backstop for service errors a handler did not map.
impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}
