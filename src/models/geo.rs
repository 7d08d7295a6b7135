use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Coarse geographic bucket used to group states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
    Central,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::North,
        Region::South,
        Region::East,
        Region::West,
        Region::Central,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::Central => "Central",
        }
    }

    /// Member states in table order. "East" has none.
    pub fn states(&self) -> &'static [&'static StateLocation] {
        STATES_BY_REGION
            .get(self)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateLocation {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub region: Region,
}

impl StateLocation {
    pub fn position(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

const fn state(name: &'static str, lat: f64, lng: f64, region: Region) -> StateLocation {
    StateLocation {
        name,
        lat,
        lng,
        region,
    }
}

pub static STATES: [StateLocation; 50] = [
    // Northeast
    state("Maine", 45.2538, -69.4455, Region::North),
    state("Vermont", 44.0459, -72.7107, Region::North),
    state("New Hampshire", 43.1939, -71.5724, Region::North),
    state("Massachusetts", 42.4072, -71.3824, Region::North),
    state("Rhode Island", 41.5801, -71.4774, Region::North),
    state("Connecticut", 41.5928, -72.7621, Region::North),
    state("New York", 42.1657, -74.9481, Region::North),
    state("New Jersey", 40.0583, -74.4057, Region::North),
    state("Pennsylvania", 40.5773, -77.264, Region::North),
    state("Delaware", 38.9108, -75.5277, Region::North),
    // South
    state("Maryland", 39.0458, -76.6413, Region::South),
    state("Virginia", 37.768, -78.2057, Region::South),
    state("West Virginia", 38.5976, -80.4549, Region::South),
    state("Kentucky", 37.8393, -84.27, Region::South),
    state("North Carolina", 35.7596, -79.0193, Region::South),
    state("South Carolina", 33.8361, -81.1637, Region::South),
    state("Tennessee", 35.7478, -86.6923, Region::South),
    state("Georgia", 32.9406, -83.376, Region::South),
    state("Florida", 27.6648, -81.5158, Region::South),
    state("Alabama", 32.3182, -86.9023, Region::South),
    // Midwest
    state("Ohio", 40.4173, -82.9071, Region::Central),
    state("Indiana", 39.8647, -86.2604, Region::Central),
    state("Michigan", 43.3266, -84.5361, Region::Central),
    state("Illinois", 40.6331, -89.3985, Region::Central),
    state("Wisconsin", 43.7844, -88.7879, Region::Central),
    state("Minnesota", 45.6945, -93.9002, Region::Central),
    state("Iowa", 41.878, -93.0977, Region::Central),
    state("Missouri", 38.5767, -92.1735, Region::Central),
    state("Kansas", 38.5266, -96.7265, Region::Central),
    state("Nebraska", 41.4925, -99.9018, Region::Central),
    // West
    state("Oklahoma", 35.5653, -96.9289, Region::West),
    state("Texas", 31.9686, -99.9018, Region::West),
    state("New Mexico", 34.5199, -105.8701, Region::West),
    state("Arizona", 33.7298, -111.4312, Region::West),
    state("Colorado", 39.0598, -105.3111, Region::West),
    state("Utah", 39.321, -111.0937, Region::West),
    state("Nevada", 38.8026, -116.4194, Region::West),
    state("California", 36.7783, -119.4179, Region::West),
    state("Oregon", 44.572, -122.0709, Region::West),
    state("Washington", 47.4009, -121.4905, Region::West),
    // Remaining
    state("Idaho", 44.0682, -114.742, Region::West),
    state("Montana", 46.8797, -110.3626, Region::West),
    state("Wyoming", 43.076, -107.2903, Region::West),
    state("North Dakota", 47.5515, -101.002, Region::Central),
    state("South Dakota", 44.3668, -100.3538, Region::Central),
    state("Arkansas", 34.9697, -92.3731, Region::South),
    state("Louisiana", 31.1695, -91.8678, Region::South),
    state("Mississippi", 32.3547, -89.3985, Region::South),
    state("Hawaii", 19.8968, -155.5828, Region::West),
    state("Alaska", 61.385, -152.2683, Region::West),
];

static STATES_BY_REGION: Lazy<HashMap<Region, Vec<&'static StateLocation>>> = Lazy::new(|| {
    let mut index: HashMap<Region, Vec<&'static StateLocation>> = HashMap::new();
    for location in STATES.iter() {
        index.entry(location.region).or_default().push(location);
    }
    index
});

/// All states, or the members of a region when `filter` names one.
///
/// Region names match case-insensitively. An unknown name selects nothing.
pub fn states_matching(filter: &str) -> Vec<&'static StateLocation> {
    if filter.eq_ignore_ascii_case("all") {
        return STATES.iter().collect();
    }
    match filter.parse::<Region>() {
        Ok(region) => region.states().to_vec(),
        Err(_) => Vec::new(),
    }
}
