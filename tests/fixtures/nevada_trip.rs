//! Real Nevada attractions for realistic trip fixtures.
//!
//! Coordinates sourced from OpenStreetMap. All of them are routable with
//! the OSRM Nevada extract, so the same fixtures serve both the pure
//! geometry tests and the docker-backed routing tests.

/// A named place with (longitude, latitude) coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lon: f64,
    pub lat: f64,
}

impl Location {
    pub const fn new(name: &'static str, lon: f64, lat: f64) -> Self {
        Self { name, lon, lat }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }
}

// ============================================================================
// Las Vegas Strip & Downtown
// ============================================================================

pub const STRIP_ATTRACTIONS: &[Location] = &[
    Location::new("Welcome to Las Vegas Sign", -115.1728, 36.0820),
    Location::new("Shark Reef Aquarium", -115.1767, 36.0906),
    Location::new("Bellagio Fountains", -115.1767, 36.1126),
    Location::new("High Roller", -115.1683, 36.1175),
    Location::new("The Strat", -115.1566, 36.1475),
    Location::new("Fremont Street Experience", -115.1443, 36.1699),
    Location::new("Springs Preserve", -115.1901, 36.1733),
];

// ============================================================================
// Day trips around the valley
// ============================================================================

pub const DAY_TRIPS: &[Location] = &[
    Location::new("Red Rock Canyon Visitor Center", -115.4276, 36.1357),
    Location::new("Seven Magic Mountains", -115.2707, 35.8386),
    Location::new("Boulder City", -114.8317, 35.9786),
    Location::new("Hoover Dam", -114.7377, 36.0161),
    Location::new("Lake Las Vegas", -114.9289, 36.1076),
    Location::new("Valley of Fire Visitor Center", -114.5163, 36.4296),
    Location::new("Mount Charleston Lodge", -115.6440, 36.2570),
];

// ============================================================================
// Henderson / east side
// ============================================================================

pub const EAST_SIDE: &[Location] = &[
    Location::new("Ethel M Chocolate Factory", -115.0485, 36.0585),
    Location::new("Green Valley Ranch", -115.0825, 36.0308),
    Location::new("Sunset Station", -115.0631, 36.0614),
];

/// A multi-day road trip: Strip sights, then the dam loop, then the parks.
pub fn road_trip() -> Vec<Location> {
    vec![
        Location::new("Bellagio Fountains", -115.1767, 36.1126),
        Location::new("Fremont Street Experience", -115.1443, 36.1699),
        Location::new("Hoover Dam", -114.7377, 36.0161),
        Location::new("Boulder City", -114.8317, 35.9786),
        Location::new("Valley of Fire Visitor Center", -114.5163, 36.4296),
        Location::new("Red Rock Canyon Visitor Center", -115.4276, 36.1357),
    ]
}

/// Returns all fixture locations combined.
pub fn all_locations() -> Vec<Location> {
    let mut all = Vec::with_capacity(20);
    all.extend_from_slice(STRIP_ATTRACTIONS);
    all.extend_from_slice(DAY_TRIPS);
    all.extend_from_slice(EAST_SIDE);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_in_southern_nevada() {
        for loc in all_locations() {
            assert!(
                loc.lat > 35.5 && loc.lat < 36.6,
                "{} lat out of range: {}",
                loc.name,
                loc.lat
            );
            assert!(
                loc.lon > -115.8 && loc.lon < -114.4,
                "{} lon out of range: {}",
                loc.name,
                loc.lon
            );
        }
    }
}
