use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::models::DiseaseData;
use crate::services::disease::generate_disease_data;
use crate::services::AppState;
use super::{generate, simulate_latency, AppError};

const FAILURE: &str = "Failed to generate disease data";

pub async fn get_disease_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DiseaseData>, AppError> {
    simulate_latency(state.config.data_latency).await;

    let today = Utc::now().date_naive();
    let data = generate(FAILURE, move || {
        generate_disease_data(&mut rand::thread_rng(), today)
    })
    .await?;
    tracing::debug!(
        covid_active = data.covid.active_cases,
        flu_active = data.flu.active_cases,
        "generated disease data"
    );

    Ok(Json(data))
}
