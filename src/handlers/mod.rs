pub mod disease;
pub mod health;
pub mod map_status;
pub mod routes;
pub mod simulation;

use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

/// Failure surfaced to the caller as a 500 with a fixed message.
///
/// The underlying cause is logged, never returned.
#[derive(Debug)]
pub struct AppError {
    message: &'static str,
    source: anyhow::Error,
}

impl AppError {
    pub fn new<E>(message: &'static str, source: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self {
            message,
            source: source.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.source, "{}", self.message);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": self.message
            })),
        )
            .into_response()
    }
}

/// Decodes a JSON body whatever its `Content-Type`.
pub(crate) fn parse_body<T>(
    payload: Result<Bytes, BytesRejection>,
    failure: &'static str,
) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    let bytes = payload.map_err(|e| AppError::new(failure, e))?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::new(failure, e))
}

/// Runs a generator off the async workers; a panic inside it becomes `failure`.
pub(crate) async fn generate<T, F>(failure: &'static str, generator: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(generator)
        .await
        .map_err(|e| AppError::new(failure, e))
}

/// Emulated processing time. Has no effect on the generated data.
pub(crate) async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
