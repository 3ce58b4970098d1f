use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde_json::Value;
use service::dog::Dog;
use service::errors::ServiceError;
use tracing::{error, info};

use crate::{errors::ApiError, routes::ServerState};

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// Parse an `application/json` request body.
///
/// Other content types, and an empty body, count as `{}`.
pub(crate) fn parse_body(headers: &HeaderMap, body: &Bytes) -> Result<Value, ApiError> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

#[utoipa::path(
    get, path = "/dogs", tag = "dogs",
    responses(
        (status = 200, description = "All dogs", body = [crate::openapi::DogDoc]),
        (status = 400, description = "Store error, empty body")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Dog>>, ApiError> {
    match state.dogs.list().await {
        Ok(dogs) => Ok(Json(dogs)),
        Err(e) => {
            error!(err = %e, "list dogs failed");
            Err(ApiError::Status(StatusCode::BAD_REQUEST))
        }
    }
}

#[utoipa::path(
    get, path = "/dogs/{id}", tag = "dogs",
    params(("id" = String, Path, description = "Dog id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::DogDoc),
        (status = 204, description = "No data (absent or store error)"),
        (status = 400, description = "id should be a number")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Dog>, ApiError> {
    match state.dogs.get(&id).await {
        Ok(Some(dog)) => Ok(Json(dog)),
        Ok(None) => Err(ApiError::NoData),
        Err(ServiceError::InvalidId) => Err(ApiError::InvalidId),
        Err(e) => {
            info!(%id, err = %e, "get dog failed; answering no data");
            Err(ApiError::NoData)
        }
    }
}

#[utoipa::path(
    post, path = "/dogs", tag = "dogs",
    request_body = crate::openapi::NewDogDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::DogDoc),
        (
            status = 400,
            description = "Validation errors",
            body = crate::openapi::ValidationErrorsDoc
        ),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Dog>), ApiError> {
    let input = parse_body(&headers, &body)?;
    let dog = match state.dogs.create(&input).await {
        Err(ServiceError::Validation(errors)) => return Err(ApiError::Invalid(errors)),
        // Store failures are not mapped here; they surface as 500.
        other => other?,
    };
    Ok((StatusCode::CREATED, Json(dog)))
}

#[utoipa::path(
    patch, path = "/dogs/{id}", tag = "dogs",
    params(("id" = String, Path, description = "Dog id")),
    request_body = crate::openapi::DogPatchDoc,
    responses(
        (status = 201, description = "Updated", body = crate::openapi::DogDoc),
        (status = 400, description = "Bad id, unknown keys, or store error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Dog>), ApiError> {
    let input = parse_body(&headers, &body)?;
    match state.dogs.update(&id, &input).await {
        Ok(dog) => Ok((StatusCode::CREATED, Json(dog))),
        Err(ServiceError::InvalidId) => Err(ApiError::InvalidId),
        Err(ServiceError::Validation(errors)) => Err(ApiError::Invalid(errors)),
        Err(ServiceError::Store(e)) => {
            info!(%id, err = %e, "update dog rejected by store");
            Err(ApiError::Rejected(e))
        }
    }
}

#[utoipa::path(
    delete, path = "/dogs/{id}", tag = "dogs",
    params(("id" = String, Path, description = "Dog id")),
    responses(
        (status = 200, description = "Deleted record", body = crate::openapi::DogDoc),
        (status = 204, description = "Store error (e.g. not found)"),
        (status = 400, description = "id should be a number")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Dog>, ApiError> {
    match state.dogs.delete(&id).await {
        Ok(dog) => Ok(Json(dog)),
        Err(ServiceError::InvalidId) => Err(ApiError::InvalidId),
        Err(e) => {
            info!(%id, err = %e, "delete dog failed");
            Err(ApiError::Status(StatusCode::NO_CONTENT))
        }
    }
}
