pub mod info;
pub mod people;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, Method};
use axum::middleware::from_fn;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::dto::HealthResponse;
use crate::middleware::security_headers::security_headers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/pessoas", get(people::search))
        .route("/pessoas/{id}", get(people::detail))
        .route(
            "/ocorrencias/{occurrence_id}/informacoes",
            get(info::feed).post(info::submit),
        )
}

/// The full service: `/api` routes plus the cross-cutting layers.
pub fn app(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .nest("/api", router())
        .layer(from_fn(security_headers))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        source: state.source.kind().as_str(),
    })
}
