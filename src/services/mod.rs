pub mod disease;
pub mod map_status;
pub mod planner;
pub mod routes;
pub mod simulation;

use crate::config::Config;
use std::sync::Arc;

pub use planner::{Planner, RandomPlanner};

pub struct AppState {
    pub config: Config,
    pub planner: Arc<dyn Planner>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_planner(config, Arc::new(RandomPlanner))
    }

    pub fn with_planner(config: Config, planner: Arc<dyn Planner>) -> Self {
        Self { config, planner }
    }
}
