use axum::{Json, extract::State, extract::rejection::JsonRejection};
use creditsim_core::config::Variant;
use creditsim_core::simulation;

use super::{SharedState, run_blocking};
use crate::api_types::*;
use crate::error::ApiResult;
use crate::validation;

type JsonBody = Result<Json<SimulationRequest>, JsonRejection>;

// ============================================================================
// Simulation Handlers
// ============================================================================

pub async fn simulate_default_probability(
    State(state): State<SharedState>,
    payload: JsonBody,
) -> ApiResult<Json<DefaultProbabilityResponse>> {
    let Json(req) = payload?;
    let config = validation::build_config(Variant::DefaultProbability, &req, &state)?;
    let seed = config.seed;

    let summary = run_blocking(move || {
        simulation::simulate_default_probability(&req.profile, &config)
    })
    .await?;

    Ok(Json(DefaultProbabilityResponse::from_summary(&summary, seed)))
}

pub async fn simulate_macroeconomic_factors(
    State(state): State<SharedState>,
    payload: JsonBody,
) -> ApiResult<Json<MacroeconomicResponse>> {
    let Json(req) = payload?;
    let config = validation::build_config(Variant::Macroeconomic, &req, &state)?;
    let seed = config.seed;

    let years =
        run_blocking(move || simulation::simulate_macroeconomic(&req.profile, &config)).await?;

    Ok(Json(MacroeconomicResponse::from_moments(&years, seed)))
}

pub async fn simulate_financial_behavior(
    State(state): State<SharedState>,
    payload: JsonBody,
) -> ApiResult<Json<FinancialBehaviorResponse>> {
    let Json(req) = payload?;
    let config = validation::build_config(Variant::FinancialBehavior, &req, &state)?;
    let seed = config.seed;

    let histogram = run_blocking(move || {
        simulation::simulate_financial_behavior(&req.profile, &config)
    })
    .await?;

    Ok(Json(FinancialBehaviorResponse::from_histogram(
        &histogram, seed,
    )))
}

pub async fn simulate_employment_status(
    State(state): State<SharedState>,
    payload: JsonBody,
) -> ApiResult<Json<EmploymentStatusResponse>> {
    let Json(req) = payload?;
    let config = validation::build_config(Variant::EmploymentStatus, &req, &state)?;
    let seed = config.seed;

    let points = run_blocking(move || {
        simulation::simulate_employment_status(&req.profile, &config)
    })
    .await?;

    Ok(Json(EmploymentStatusResponse::from_trajectory(&points, seed)))
}

pub async fn simulate_geographic_location(
    State(state): State<SharedState>,
    payload: JsonBody,
) -> ApiResult<Json<GeographicResponse>> {
    let Json(req) = payload?;
    let config = validation::build_config(Variant::Geographic, &req, &state)?;
    let seed = config.seed;

    let summary =
        run_blocking(move || simulation::simulate_geographic(&req.profile, &config)).await?;

    Ok(Json(GeographicResponse::from_summary(&summary, seed)?))
}

pub async fn simulate_age_demographics(
    State(state): State<SharedState>,
    payload: JsonBody,
) -> ApiResult<Json<AgeDemographicsResponse>> {
    let Json(req) = payload?;
    let config = validation::build_config(Variant::AgeDemographics, &req, &state)?;
    let seed = config.seed;

    // The category labels are echoed in the response
    let profile = req.profile.clone();
    let summary = run_blocking(move || {
        simulation::simulate_age_demographics(&req.profile, &config)
    })
    .await?;

    Ok(Json(AgeDemographicsResponse::from_summary(
        &summary, &profile, seed,
    )?))
}

pub async fn simulate_health_insurance(
    State(state): State<SharedState>,
    payload: JsonBody,
) -> ApiResult<Json<HealthInsuranceResponse>> {
    let Json(req) = payload?;
    let config = validation::build_config(Variant::HealthInsurance, &req, &state)?;
    let seed = config.seed;

    let summary = run_blocking(move || {
        simulation::simulate_health_insurance(&req.profile, &config)
    })
    .await?;

    Ok(Json(HealthInsuranceResponse::from_summary(&summary, seed)?))
}
