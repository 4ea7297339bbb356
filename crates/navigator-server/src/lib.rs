//! navigator-server
//!
//! JSON HTTP API over the intake workflow. Each session holds one
//! `WorkflowState` in memory; stage steps run on the blocking pool because
//! the generator call is synchronous.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;

use crate::state::AppState;

/// Build the API router over `state`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/sessions", post(routes::sessions::create_session))
        .route(
            "/sessions/{id}",
            get(routes::sessions::get_session).delete(routes::sessions::delete_session),
        )
        .route(
            "/sessions/{id}/assessment",
            post(routes::sessions::submit_assessment),
        )
        .route(
            "/sessions/{id}/care-plan",
            post(routes::sessions::create_care_plan),
        )
        .route(
            "/sessions/{id}/analytics",
            get(routes::sessions::get_analytics),
        )
        .route("/sessions/{id}/report", get(routes::sessions::get_report))
        .route("/models/compare", post(routes::models::compare))
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::audit::audit_log)),
        )
        .with_state(state)
}
