//! Mock data service behind the MultiVacSIM dashboard.
//!
//! Every endpoint is stateless: each request draws fresh random numbers and
//! nothing is stored between calls.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Disease statistics
        .route("/api/data", get(handlers::disease::get_disease_data))
        .route("/disease-data", get(handlers::disease::get_disease_data))
        // Routes
        .route(
            "/api/routes",
            get(handlers::routes::list_routes).post(handlers::routes::plan_routes),
        )
        .route(
            "/routes",
            get(handlers::routes::list_routes).post(handlers::routes::plan_routes),
        )
        // Simulation
        .route(
            "/api/simulation",
            axum::routing::post(handlers::simulation::run_simulation),
        )
        .route(
            "/simulation",
            axum::routing::post(handlers::simulation::run_simulation),
        )
        // Map credential
        .route("/api/map-status", get(handlers::map_status::get_map_status))
        .route("/map-status", get(handlers::map_status::get_map_status))
        // Health
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal server error"
        })),
    )
        .into_response()
}
