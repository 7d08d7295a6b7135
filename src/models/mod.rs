pub mod disease;
pub mod geo;
pub mod map;
pub mod route;
pub mod simulation;

pub use disease::{DailyData, DiseaseData, DiseaseSnapshot, RegionalData, StateData};
pub use geo::{LatLng, Region, StateLocation, STATES};
pub use map::{MapAvailability, MapStatus};
pub use route::{
    Location, OptimizationPriority, Route, RouteKind, RouteParams, RouteStatus, RoutesResponse,
};
pub use simulation::{DailyMetric, SampleRoute, SimulationParams, SimulationResult};
