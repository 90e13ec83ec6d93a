//! HTTP service for the creditsim simulation engine
//!
//! Each simulation variant is exposed as a `POST` route taking a flat JSON
//! profile. Simulations run on tokio's blocking pool.

pub mod api_conversion;
pub mod api_types;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod validation;

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use color_eyre::eyre::WrapErr;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::ServerArgs;
pub use handlers::{AppState, SharedState};
pub use logging::init_logging;

fn cors_layer(allowed_origins: &[String]) -> color_eyre::Result<CorsLayer> {
    if allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).wrap_err_with(|| format!("invalid origin {origin:?}"))
        })
        .collect::<color_eyre::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Build the application router
pub fn build_app(args: &ServerArgs) -> color_eyre::Result<Router> {
    let state: SharedState = Arc::new(AppState::from_args(args));

    Ok(Router::new()
        .route("/health", get(handlers::health))
        .merge(routes::simulation_routes())
        .with_state(state)
        .layer(cors_layer(&args.allowed_origins)?)
        .layer(TraceLayer::new_for_http()))
}
