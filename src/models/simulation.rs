use serde::{Deserialize, Serialize};

use super::geo::LatLng;
use super::route::RouteStatus;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    pub scenario: String,
    pub region: String,
    /// 0..=100
    pub population_density: f64,
    /// 0..=30
    pub initial_infection_rate: f64,
    /// 0..=100
    pub vaccination_rate: f64,
    /// 0..=100
    pub resource_constraints: f64,
    pub advanced_mode: bool,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub id: String,
    pub accuracy: f64,
    pub resource_efficiency: f64,
    pub route_optimization: f64,
    pub infection_reduction: f64,
    pub coverage_effectiveness: f64,
    pub optimized_routes: Vec<SampleRoute>,
    pub daily_metrics: Vec<DailyMetric>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SampleRoute {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub region: String,
    pub efficiency: f64,
    pub status: RouteStatus,
    pub path: Vec<LatLng>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetric {
    pub day: u32,
    pub active_cases: u64,
    pub new_cases: u64,
    /// Cumulative since day 1.
    pub recovered_cases: u64,
    pub resource_usage: f64,
}
