use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::geo::{LatLng, Region};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    Distribution,
    Testing,
    Vaccination,
}

impl RouteKind {
    pub const ALL: [RouteKind; 3] = [
        RouteKind::Distribution,
        RouteKind::Testing,
        RouteKind::Vaccination,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::Distribution => "distribution",
            RouteKind::Testing => "testing",
            RouteKind::Vaccination => "vaccination",
        }
    }

    /// Capitalised form used by the simulation's sample routes.
    pub fn label(&self) -> &'static str {
        match self {
            RouteKind::Distribution => "Distribution",
            RouteKind::Testing => "Testing",
            RouteKind::Vaccination => "Vaccination",
        }
    }

    pub fn id_prefix(&self) -> &'static str {
        match self {
            RouteKind::Distribution => "DR",
            RouteKind::Testing => "TR",
            RouteKind::Vaccination => "VR",
        }
    }

    pub fn subtypes(&self) -> &'static [&'static str] {
        match self {
            RouteKind::Distribution => &[
                "Medical Supplies",
                "PPE",
                "Test Kits",
                "Vaccines",
                "Ventilators",
                "Oxygen Tanks",
            ],
            RouteKind::Testing => &[
                "Drive-through",
                "Walk-in",
                "Mobile",
                "Hospital-based",
                "Community Center",
                "School-based",
            ],
            RouteKind::Vaccination => &[
                "COVID-19",
                "Flu",
                "Combined",
                "Mobile",
                "Pediatric",
                "Senior-focused",
            ],
        }
    }

    pub fn facility(&self) -> &'static str {
        match self {
            RouteKind::Distribution => "Distribution Center",
            RouteKind::Testing => "Testing Center",
            RouteKind::Vaccination => "Vaccination Center",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown route type: {0}")]
pub struct UnknownRouteKind(pub String);

impl FromStr for RouteKind {
    type Err = UnknownRouteKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRouteKind(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteStatus {
    Active,
    Pending,
    Planning,
}

impl RouteStatus {
    pub const ALL: [RouteStatus; 3] = [
        RouteStatus::Active,
        RouteStatus::Pending,
        RouteStatus::Planning,
    ];
}

/// Weighting requested by the caller. Only shifts the base efficiency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationPriority {
    #[default]
    Balanced,
    Speed,
    Coverage,
    Efficiency,
    Cost,
}

impl OptimizationPriority {
    pub fn base_efficiency(&self) -> f64 {
        match self {
            OptimizationPriority::Speed => 85.0,
            OptimizationPriority::Coverage => 82.0,
            OptimizationPriority::Efficiency => 88.0,
            OptimizationPriority::Balanced | OptimizationPriority::Cost => 84.0,
        }
    }

    /// Lenient parse; anything unrecognised is treated as balanced.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "speed" => OptimizationPriority::Speed,
            "coverage" => OptimizationPriority::Coverage,
            "efficiency" => OptimizationPriority::Efficiency,
            "cost" => OptimizationPriority::Cost,
            _ => OptimizationPriority::Balanced,
        }
    }
}

/// Which route types and regions to generate for.
///
/// Kept as raw strings so unknown values can be skipped rather than rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteParams {
    #[serde(rename = "type")]
    pub kind: String,
    pub region: String,
    #[serde(alias = "priority")]
    pub optimization_priority: String,
}

impl Default for RouteParams {
    fn default() -> Self {
        Self {
            kind: "all".to_string(),
            region: "all".to_string(),
            optimization_priority: "balanced".to_string(),
        }
    }
}

impl RouteParams {
    pub fn kinds(&self) -> Vec<RouteKind> {
        if self.kind.eq_ignore_ascii_case("all") {
            return RouteKind::ALL.to_vec();
        }
        self.kind.parse::<RouteKind>().into_iter().collect()
    }

    pub fn regions(&self) -> Vec<Region> {
        if self.region.eq_ignore_ascii_case("all") {
            return Region::ALL.to_vec();
        }
        self.region.parse::<Region>().into_iter().collect()
    }

    pub fn priority(&self) -> OptimizationPriority {
        OptimizationPriority::parse_lenient(&self.optimization_priority)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct Route {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RouteKind,
    pub subtype: String,
    pub region: Region,
    /// Percent, one decimal place.
    pub efficiency: f64,
    pub status: RouteStatus,
    pub path: Vec<LatLng>,
    pub locations: Vec<Location>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<Route>,
}
