use axum::{
    http::{header, HeaderName, Method},
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::EmployeeStore;

use crate::openapi::ApiDoc;

pub mod employees;

#[derive(Clone)]
pub struct ServerState {
    pub store: EmployeeStore,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Cross-origin policy of the public API: any origin, the CRUD verbs, and the
/// headers browser clients of the service send and read.
pub fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::DELETE, Method::POST, Method::PUT, Method::PATCH])
        .allow_headers([
            header::AUTHORIZATION,
            header::USER_AGENT,
            header::ACCESS_CONTROL_REQUEST_METHOD,
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            header::CONTENT_TYPE,
            header::CONTENT_LENGTH,
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("x-auth-token"),
            header::LOCATION,
        ])
        .expose_headers([header::LOCATION, header::CONTENT_TYPE, header::CONTENT_LENGTH, header::ETAG])
}

/// Build the full application router: employee API, health, docs, and static files
pub fn build_router(state: ServerState, cors: CorsLayer, web_root: &str) -> Router {
    // `/api/employee/:id` is the singular spelling older clients use for writes
    let api = Router::new()
        .route("/api/employees", get(employees::list).post(employees::create))
        .route(
            "/api/employees/:id",
            get(employees::get).put(employees::update).delete(employees::delete),
        )
        .route("/api/employee/:id", put(employees::update).delete(employees::delete))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new(web_root))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
