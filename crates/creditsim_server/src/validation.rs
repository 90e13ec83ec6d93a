use creditsim_core::config::{MAX_YEARS, SimulationConfig, Variant};

use crate::api_types::SimulationRequest;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;

/// Build the simulation config for `variant` from its defaults and the
/// request's overrides.
///
/// Only the server-side limits are checked here; the core validates the
/// remaining ranges before any trial runs. The seed is taken from the
/// request, then the server, then drawn at random.
pub fn build_config(
    variant: Variant,
    req: &SimulationRequest,
    state: &AppState,
) -> ApiResult<SimulationConfig> {
    let mut config = SimulationConfig::for_variant(variant);

    if let Some(num_trials) = req.num_simulations {
        if num_trials == 0 {
            return Err(ApiError::ValidationError {
                field: "num_simulations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if num_trials > state.max_trials {
            return Err(ApiError::ValidationError {
                field: "num_simulations".to_string(),
                message: format!("cannot exceed {}", state.max_trials),
            });
        }
        config.num_trials = num_trials;
    }

    if let Some(num_years) = req.num_years {
        if num_years == 0 {
            return Err(ApiError::ValidationError {
                field: "num_years".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if num_years > MAX_YEARS {
            return Err(ApiError::ValidationError {
                field: "num_years".to_string(),
                message: format!("cannot exceed {MAX_YEARS}"),
            });
        }
        config.num_years = num_years;
    }

    if let Some(noise_std) = req.noise_std {
        config.noise_std = noise_std;
    }
    if let Some(base_rate) = req.base_rate {
        config.base_rate = base_rate;
    }

    config.seed = req
        .seed
        .or(state.seed)
        .unwrap_or_else(rand::random::<u64>);

    Ok(config)
}
