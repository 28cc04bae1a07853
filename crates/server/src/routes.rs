pub mod hello;
pub mod orders;
pub mod university;

use std::path::Path;

use axum::{response::IntoResponse, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{metrics::encode_metrics, types::Health};

use crate::openapi::{RestaurantApiDoc, UniversityApiDoc};
use crate::state::{RestaurantState, UniversityState};

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics() -> impl IntoResponse {
    encode_metrics()
}

/// Health, metrics, CORS and request tracing shared by every service.
fn with_common_layers(router: Router, cors: CorsLayer) -> Router {
    router
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

pub fn build_hello_router(cors: CorsLayer) -> Router {
    with_common_layers(hello::router(), cors)
}

pub fn build_university_router(state: UniversityState, cors: CorsLayer) -> Router {
    let api = university::router()
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", UniversityApiDoc::openapi()));
    with_common_layers(api, cors)
}

/// `assets_dir` holds `get.jpg` and `icon.ico` for the landing page.
pub fn build_restaurant_router(state: RestaurantState, assets_dir: &Path, cors: CorsLayer) -> Router {
    let api = orders::router(assets_dir)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", RestaurantApiDoc::openapi()));
    with_common_layers(api, cors)
}
