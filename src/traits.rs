//! Core domain traits for the itinerary planner.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps should
//! implement them for their own data models.

use std::hash::Hash;

use crate::polyline::Polyline;

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A stop is a single itinerary waypoint.
pub trait Stop {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Display label shown on the map.
    fn label(&self) -> &str;

    /// Location coordinates (lon, lat) in degrees.
    fn location(&self) -> (f64, f64);
}

/// Travel profile for road routing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TravelProfile {
    #[default]
    Driving,
    Walking,
    Cycling,
}

impl TravelProfile {
    /// Profile name as used in routing request URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelProfile::Driving => "driving",
            TravelProfile::Walking => "walking",
            TravelProfile::Cycling => "cycling",
        }
    }
}

/// A road-following route for an ordered list of coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Decoded route geometry.
    pub geometry: Polyline,
    /// Total road distance in meters.
    pub distance_meters: f64,
    /// Total travel time in seconds.
    pub duration_secs: f64,
}

/// Result of the routing service's server-side reordering mode.
///
/// `order` maps tour position to input index: `order[k]` is the index of the
/// input coordinate visited k-th. No optimality is guaranteed.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedTrip {
    pub order: Vec<usize>,
    pub summary: RouteSummary,
}

/// Produces road-following routes for ordered coordinate lists.
///
/// Implementations are expected to support independent, retryable requests;
/// any error is treated by callers as "no usable route".
pub trait RouteProvider {
    type Error;

    /// Route through the coordinates in the exact given order.
    fn route_for(
        &self,
        points: &[(f64, f64)],
        profile: TravelProfile,
    ) -> Result<RouteSummary, Self::Error>;

    /// Let the service reorder the coordinates (first point fixed as start)
    /// and route through them.
    fn optimized_trip(
        &self,
        points: &[(f64, f64)],
        profile: TravelProfile,
    ) -> Result<OptimizedTrip, Self::Error>;
}
