//! Synthetic distribution, testing and vaccination routes.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Location, Route, RouteKind, RouteParams, RouteStatus, StateLocation};
use super::disease::round_tenth;

const FIRST_ROUTE_ID: u32 = 1000;
const MAX_EFFICIENCY: f64 = 98.0;
/// Half-width, in degrees, of the offset applied to location markers.
const LOCATION_SPREAD: f64 = 0.25;

pub fn generate_routes(params: &RouteParams, rng: &mut impl Rng) -> Vec<Route> {
    let base_efficiency = params.priority().base_efficiency();
    let regions = params.regions();
    let mut next_id = FIRST_ROUTE_ID;
    let mut routes = Vec::new();

    for kind in params.kinds() {
        for region in &regions {
            let members = region.states();
            if members.is_empty() {
                tracing::debug!(region = %region, "no member states, skipping region");
                continue;
            }

            let count = rng.gen_range(2..=4);
            for _ in 0..count {
                let subtype = kind
                    .subtypes()
                    .choose(rng)
                    .copied()
                    .unwrap_or_default();
                let status = *RouteStatus::ALL.choose(rng).unwrap_or(&RouteStatus::Planning);
                let efficiency = (base_efficiency + rng.gen_range(0.0..10.0)).min(MAX_EFFICIENCY);

                let stops = pick_stops(members, rng.gen_range(3..=6), rng);
                let path = stops.iter().map(|s| s.position()).collect();
                let locations = stops
                    .iter()
                    .map(|s| offset_location(s, kind, rng))
                    .collect();

                routes.push(Route {
                    id: format!("{}-{}", kind.id_prefix(), next_id),
                    kind,
                    subtype: subtype.to_string(),
                    region: *region,
                    efficiency: round_tenth(efficiency),
                    status,
                    path,
                    locations,
                });
                next_id += 1;
            }
        }
    }

    routes
}

/// Shuffles the candidates and keeps the first `count`.
pub fn pick_stops<'a>(
    candidates: &[&'a StateLocation],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<&'a StateLocation> {
    let mut stops = candidates.to_vec();
    stops.shuffle(rng);
    stops.truncate(count);
    stops
}

fn offset_location(state: &StateLocation, kind: RouteKind, rng: &mut impl Rng) -> Location {
    Location {
        lat: state.lat + rng.gen_range(-LOCATION_SPREAD..LOCATION_SPREAD),
        lng: state.lng + rng.gen_range(-LOCATION_SPREAD..LOCATION_SPREAD),
        title: format!("{} {}", state.name, kind.facility()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn params(kind: &str, region: &str, priority: &str) -> RouteParams {
        RouteParams {
            kind: kind.to_string(),
            region: region.to_string(),
            optimization_priority: priority.to_string(),
        }
    }

    #[test]
    fn test_all_regions_cover_every_populated_region() {
        let mut rng = StdRng::seed_from_u64(1);
        let routes = generate_routes(&RouteParams::default(), &mut rng);

        let regions: HashSet<Region> = routes.iter().map(|r| r.region).collect();
        let populated: HashSet<Region> = Region::ALL
            .into_iter()
            .filter(|r| !r.states().is_empty())
            .collect();
        assert_eq!(regions, populated);

        let kinds: HashSet<RouteKind> = routes.iter().map(|r| r.kind).collect();
        assert_eq!(kinds.len(), 3);
    }

    #[test]
    fn test_route_count_per_pair() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let routes = generate_routes(&params("testing", "West", "balanced"), &mut rng);
            assert!((2..=4).contains(&routes.len()));
        }
    }

    #[test]
    fn test_specific_region_stays_inside_region() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let routes = generate_routes(&params("all", "south", "speed"), &mut rng);
            let members = Region::South.states();

            for route in &routes {
                assert_eq!(route.region, Region::South);
                assert!((3..=6).contains(&route.path.len()));
                assert_eq!(route.path.len(), route.locations.len());
                for point in &route.path {
                    assert!(members.iter().any(|s| s.position() == *point));
                }
            }
        }
    }

    #[test]
    fn test_path_has_no_repeated_states() {
        let mut rng = StdRng::seed_from_u64(4);
        for route in generate_routes(&RouteParams::default(), &mut rng) {
            let mut seen = Vec::new();
            for point in &route.path {
                assert!(!seen.contains(point));
                seen.push(*point);
            }
        }
    }

    #[test]
    fn test_locations_are_offset_from_path() {
        let mut rng = StdRng::seed_from_u64(8);
        let routes = generate_routes(&params("vaccination", "north", "coverage"), &mut rng);
        for route in &routes {
            for (point, location) in route.path.iter().zip(&route.locations) {
                assert!((location.lat - point.lat).abs() <= LOCATION_SPREAD);
                assert!((location.lng - point.lng).abs() <= LOCATION_SPREAD);
                assert!(location.title.ends_with("Vaccination Center"));
            }
        }
    }

    #[test]
    fn test_efficiency_follows_priority() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for route in generate_routes(&params("all", "all", "efficiency"), &mut rng) {
                assert!(route.efficiency >= 88.0);
                assert!(route.efficiency <= 98.0);
            }
            for route in generate_routes(&params("all", "all", "coverage"), &mut rng) {
                assert!(route.efficiency >= 82.0);
                assert!(route.efficiency <= 92.0);
            }
        }
    }

    #[test]
    fn test_subtype_comes_from_kind_vocabulary() {
        let mut rng = StdRng::seed_from_u64(13);
        for route in generate_routes(&RouteParams::default(), &mut rng) {
            assert!(route.kind.subtypes().contains(&route.subtype.as_str()));
        }
    }

    #[test]
    fn test_ids_increase_with_type_prefix() {
        let mut rng = StdRng::seed_from_u64(2);
        let routes = generate_routes(&RouteParams::default(), &mut rng);

        let numbers: Vec<u32> = routes
            .iter()
            .map(|r| {
                let (prefix, number) = r.id.split_once('-').unwrap();
                assert_eq!(prefix, r.kind.id_prefix());
                number.parse().unwrap()
            })
            .collect();
        assert_eq!(numbers[0], 1000);
        assert!(numbers.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_empty_or_unknown_region_is_skipped() {
        let mut rng = StdRng::seed_from_u64(6);
        assert!(generate_routes(&params("all", "East", "balanced"), &mut rng).is_empty());
        assert!(generate_routes(&params("all", "Atlantis", "balanced"), &mut rng).is_empty());
        assert!(generate_routes(&params("delivery", "all", "balanced"), &mut rng).is_empty());
    }

    #[test]
    fn test_pick_stops_caps_at_candidates() {
        let mut rng = StdRng::seed_from_u64(0);
        let candidates = Region::North.states();
        assert_eq!(pick_stops(candidates, 4, &mut rng).len(), 4);
        assert_eq!(pick_stops(candidates, 50, &mut rng).len(), candidates.len());
    }
}
