use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use std::sync::Arc;

use crate::models::{RouteParams, RoutesResponse};
use crate::services::AppState;
use super::{generate, parse_body, simulate_latency, AppError};

const FAILURE: &str = "Failed to generate routes";

#[derive(Debug, Default, PartialEq)]
pub struct RoutesQuery {
    pub kind: Option<String>,
    pub region: Option<String>,
    pub priority: Option<String>,
}

impl RoutesQuery {
    /// Keeps the first value of a repeated key; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = RoutesQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "type" => &mut query.kind,
                "region" => &mut query.region,
                "priority" => &mut query.priority,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

impl From<RoutesQuery> for RouteParams {
    fn from(query: RoutesQuery) -> Self {
        let defaults = RouteParams::default();
        // Empty query values fall back like missing ones.
        let pick = |value: Option<String>, fallback: String| {
            value.filter(|v| !v.is_empty()).unwrap_or(fallback)
        };
        RouteParams {
            kind: pick(query.kind, defaults.kind),
            region: pick(query.region, defaults.region),
            optimization_priority: pick(query.priority, defaults.optimization_priority),
        }
    }
}

pub async fn list_routes(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<RoutesResponse>, AppError> {
    let query = match query {
        Ok(Query(pairs)) => RoutesQuery::from_pairs(pairs),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable routes query, using defaults");
            RoutesQuery::default()
        }
    };
    Ok(Json(plan(&state, query.into()).await?))
}

pub async fn plan_routes(
    State(state): State<Arc<AppState>>,
    payload: Result<Bytes, BytesRejection>,
) -> Result<Json<RoutesResponse>, AppError> {
    let params: RouteParams = parse_body(payload, FAILURE)?;
    Ok(Json(plan(&state, params).await?))
}

async fn plan(state: &AppState, params: RouteParams) -> Result<RoutesResponse, AppError> {
    simulate_latency(state.config.data_latency).await;

    let planner = Arc::clone(&state.planner);
    let (params, routes) = generate(FAILURE, move || {
        let routes = planner.plan_routes(&params, &mut rand::thread_rng());
        (params, routes)
    })
    .await?;

    tracing::debug!(
        kind = %params.kind,
        region = %params.region,
        count = routes.len(),
        "generated routes"
    );

    Ok(RoutesResponse { routes })
}
