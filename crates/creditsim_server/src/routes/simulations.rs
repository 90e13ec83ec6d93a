use axum::{Router, routing::post};

use crate::handlers::{self, SharedState};

pub fn simulation_routes() -> Router<SharedState> {
    Router::new()
        .route("/simulate", post(handlers::simulate_default_probability))
        .route(
            "/simulate_macroeconomic_factors",
            post(handlers::simulate_macroeconomic_factors),
        )
        .route(
            "/simulate_financial_behavior",
            post(handlers::simulate_financial_behavior),
        )
        .route(
            "/simulate_employment_status",
            post(handlers::simulate_employment_status),
        )
        .route(
            "/simulate_geographic_location",
            post(handlers::simulate_geographic_location),
        )
        .route(
            "/simulate_age_demographics",
            post(handlers::simulate_age_demographics),
        )
        .route(
            "/simulate_health_insurance",
            post(handlers::simulate_health_insurance),
        )
}
