use rand::RngCore;

use crate::models::{Route, RouteParams, SimulationParams, SimulationResult};
use super::routes::generate_routes;
use super::simulation::{run_simulation, SimulationError};

/// Source of route plans and scenario outcomes.
///
/// Handlers only talk to this trait, so the randomized stand-in can be
/// replaced by a trained policy without touching the HTTP layer.
pub trait Planner: Send + Sync {
    fn plan_routes(&self, params: &RouteParams, rng: &mut dyn RngCore) -> Vec<Route>;

    fn simulate(
        &self,
        params: &SimulationParams,
        epoch_millis: i64,
        rng: &mut dyn RngCore,
    ) -> Result<SimulationResult, SimulationError>;
}

/// Heuristic ranges plus uniform noise.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPlanner;

impl Planner for RandomPlanner {
    fn plan_routes(&self, params: &RouteParams, mut rng: &mut dyn RngCore) -> Vec<Route> {
        generate_routes(params, &mut rng)
    }

    fn simulate(
        &self,
        params: &SimulationParams,
        epoch_millis: i64,
        mut rng: &mut dyn RngCore,
    ) -> Result<SimulationResult, SimulationError> {
        run_simulation(params, epoch_millis, &mut rng)
    }
}
