pub mod simulation_handlers;

pub use simulation_handlers::*;

use std::sync::Arc;

use axum::Json;

use crate::api_types::HealthResponse;
use crate::config::ServerArgs;
use crate::error::ApiResult;

/// Settings shared by every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub max_trials: usize,
    pub seed: Option<u64>,
}

impl AppState {
    pub fn from_args(args: &ServerArgs) -> Self {
        Self {
            max_trials: args.max_trials,
            seed: args.seed,
        }
    }
}

pub type SharedState = Arc<AppState>;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Run a CPU-bound simulation off the async runtime
pub(crate) async fn run_blocking<T, F>(f: F) -> ApiResult<T>
where
    F: FnOnce() -> creditsim_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await??)
}
