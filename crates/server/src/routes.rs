use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use common::types::{Health, Message};
use service::dog::DogService;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{errors::ApiError, openapi::ApiDoc};

pub mod dogs;

/// Shared handler state.
#[derive(Clone)]
pub struct ServerState {
    pub dogs: DogService,
}

impl ServerState {
    pub fn new(dogs: DogService) -> Self { Self { dogs } }
}

#[utoipa::path(
    get, path = "/", tag = "root",
    responses((status = 200, description = "Greeting", body = crate::openapi::MessageDoc))
)]
pub async fn hello() -> Json<Message> {
    Json(Message::new("Hello World!"))
}

#[utoipa::path(
    get, path = "/health", tag = "root",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

// Panicking handlers get the same generic 500 as unmapped errors.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(event = "handler_panic", %detail, "request handler panicked");
    ApiError::Internal(detail).into_response()
}

/// Build the application router: greeting, health, dog CRUD and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let dog_routes = Router::new()
        .route("/dogs", get(dogs::list).post(dogs::create))
        .route(
            "/dogs/:id",
            get(dogs::get).patch(dogs::update).delete(dogs::delete),
        );

    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .merge(dog_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
