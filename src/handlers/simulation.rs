use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::models::{SimulationParams, SimulationResult};
use crate::services::AppState;
use super::{generate, parse_body, simulate_latency, AppError};

const FAILURE: &str = "Failed to run simulation";

pub async fn run_simulation(
    State(state): State<Arc<AppState>>,
    payload: Result<Bytes, BytesRejection>,
) -> Result<Json<SimulationResult>, AppError> {
    let params: SimulationParams = parse_body(payload, FAILURE)?;

    simulate_latency(state.config.simulation_latency).await;

    let planner = Arc::clone(&state.planner);
    let epoch_millis = Utc::now().timestamp_millis();
    let (params, outcome) = generate(FAILURE, move || {
        let outcome = planner.simulate(&params, epoch_millis, &mut rand::thread_rng());
        (params, outcome)
    })
    .await?;
    let result = outcome.map_err(|e| AppError::new(FAILURE, e))?;

    tracing::info!(
        id = %result.id,
        scenario = %params.scenario,
        region = %params.region,
        accuracy = result.accuracy,
        "simulation complete"
    );

    Ok(Json(result))
}
