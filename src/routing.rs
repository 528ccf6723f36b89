//! OSRM HTTP adapter for road routing.
//!
//! Builds the road-following polylines the day partitioner consumes. Two
//! modes: route the coordinates in the exact given order, or let the server
//! reorder them (`/trip`, a black-box heuristic with no optimality
//! guarantee).

use std::fmt;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::polyline::Polyline;
use crate::traits::{OptimizedTrip, RouteProvider, RouteSummary, TravelProfile};

#[derive(Debug, Clone)]
pub struct RoutingConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug)]
pub enum RoutingError {
    Http(reqwest::Error),
    /// The service answered with a non-Ok code.
    Api(String),
    /// Well-formed response with no usable route in it.
    NoRoute,
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::Http(err) => write!(f, "routing request failed: {}", err),
            RoutingError::Api(code) => write!(f, "routing service error: {}", code),
            RoutingError::NoRoute => write!(f, "no route found"),
        }
    }
}

impl std::error::Error for RoutingError {}

impl From<reqwest::Error> for RoutingError {
    fn from(err: reqwest::Error) -> Self {
        RoutingError::Http(err)
    }
}

#[derive(Debug, Clone)]
pub struct RoutingClient {
    config: RoutingConfig,
    client: reqwest::blocking::Client,
}

impl RoutingClient {
    pub fn new(config: RoutingConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn get<T>(&self, url: &str) -> Result<T, RoutingError>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!(url, "routing request");
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<T>());
        match response {
            Ok(body) => Ok(body),
            Err(err) => {
                warn!(%err, "routing request failed");
                Err(err.into())
            }
        }
    }
}

impl RouteProvider for RoutingClient {
    type Error = RoutingError;

    fn route_for(
        &self,
        points: &[(f64, f64)],
        profile: TravelProfile,
    ) -> Result<RouteSummary, RoutingError> {
        if points.len() < 2 {
            return Err(RoutingError::NoRoute);
        }

        let url = format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.config.base_url,
            profile.as_str(),
            coordinate_path(points)
        );

        let body: OsrmRouteResponse = self.get(&url)?;
        if body.code != "Ok" {
            return Err(RoutingError::Api(body.code));
        }
        let route = body.routes.into_iter().next().ok_or(RoutingError::NoRoute)?;
        Ok(route.into_summary())
    }

    fn optimized_trip(
        &self,
        points: &[(f64, f64)],
        profile: TravelProfile,
    ) -> Result<OptimizedTrip, RoutingError> {
        if points.len() < 2 {
            return Err(RoutingError::NoRoute);
        }

        let url = format!(
            "{}/trip/v1/{}/{}?roundtrip=false&source=first&overview=full&geometries=geojson",
            self.config.base_url,
            profile.as_str(),
            coordinate_path(points)
        );

        let body: OsrmTripResponse = self.get(&url)?;
        if body.code != "Ok" {
            return Err(RoutingError::Api(body.code));
        }
        let trip = body.trips.into_iter().next().ok_or(RoutingError::NoRoute)?;
        let order = visit_order(&body.waypoints).ok_or(RoutingError::NoRoute)?;

        Ok(OptimizedTrip {
            order,
            summary: trip.into_summary(),
        })
    }
}

/// Formats coordinates as the `lon,lat;lon,lat` URL path segment.
fn coordinate_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(lon, lat)| format!("{:.6},{:.6}", lon, lat))
        .collect::<Vec<_>>()
        .join(";")
}

/// Inverts OSRM's per-waypoint tour positions into a visit order.
///
/// `waypoints[i].waypoint_index` is input point i's position in the tour;
/// the result maps tour position to input index. Returns None if the
/// reported positions are not a permutation.
fn visit_order(waypoints: &[OsrmTripWaypoint]) -> Option<Vec<usize>> {
    let n = waypoints.len();
    let mut order = vec![usize::MAX; n];
    for (input_index, waypoint) in waypoints.iter().enumerate() {
        let slot = order.get_mut(waypoint.waypoint_index)?;
        if *slot != usize::MAX {
            return None;
        }
        *slot = input_index;
    }
    Some(order)
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmTripResponse {
    code: String,
    #[serde(default)]
    trips: Vec<OsrmRoute>,
    #[serde(default)]
    waypoints: Vec<OsrmTripWaypoint>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
    distance: f64,
    duration: f64,
}

impl OsrmRoute {
    fn into_summary(self) -> RouteSummary {
        RouteSummary {
            geometry: Polyline::new(self.geometry.coordinates),
            distance_meters: self.distance,
            duration_secs: self.duration,
        }
    }
}

/// Geojson LineString geometry; coordinates arrive as [lon, lat] pairs.
#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<(f64, f64)>,
}

#[derive(Debug, Deserialize)]
struct OsrmTripWaypoint {
    waypoint_index: usize,
}
