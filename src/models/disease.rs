use serde::Serialize;

use super::geo::Region;

/// Statistics for both tracked diseases, regenerated on every request.
#[derive(Clone, Debug, Serialize)]
pub struct DiseaseData {
    pub covid: DiseaseSnapshot,
    pub flu: DiseaseSnapshot,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseSnapshot {
    pub active_cases: u64,
    pub new_cases: u64,
    pub recovered_cases: u64,
    pub total_cases: u64,
    /// Percent, one decimal place.
    pub weekly_trend: f64,
    pub regional_data: Vec<RegionalData>,
    pub daily_data: Vec<DailyData>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalData {
    pub region: Region,
    pub active_cases: u64,
    pub new_cases: u64,
    /// Mean of the member states' rates; `None` for a region without states.
    pub vaccination_rate: Option<f64>,
    pub states: Vec<StateData>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateData {
    pub name: String,
    pub active_cases: u64,
    pub new_cases: u64,
    pub vaccination_rate: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyData {
    /// `YYYY-MM-DD`
    pub date: String,
    pub active_cases: u64,
    pub new_cases: u64,
    pub recovered_cases: u64,
}
