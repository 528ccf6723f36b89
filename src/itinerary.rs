//! Itinerary assembly pipeline.
//!
//! Composes the pieces the way the surrounding application does: establish a
//! stop order, fetch a road-following polyline for it, then partition the
//! polyline into per-day segments. Keeping the composition here means the
//! stop order used for routing and the one used for day coloring can never
//! diverge.

use tracing::debug;

use crate::days::DayPlan;
use crate::polyline::Polyline;
use crate::segment::{self, DaySegment};
use crate::sequence;
use crate::traits::{RouteProvider, Stop, TravelProfile};

/// A fully assembled multi-day itinerary, ready for rendering.
#[derive(Debug, Clone)]
pub struct Itinerary<S> {
    /// Stops in visit order.
    pub stops: Vec<S>,
    /// Road-following path through all stops.
    pub route: Polyline,
    /// Total road distance in meters.
    pub distance_meters: f64,
    /// Total travel time in seconds.
    pub duration_secs: f64,
    /// Per-day colored route pieces, in visit order.
    pub segments: Vec<DaySegment>,
}

impl<S> Itinerary<S> {
    /// An itinerary with nothing to draw. Normal result for fewer than two
    /// stops, not an error.
    fn empty(stops: Vec<S>) -> Self {
        Self {
            stops,
            route: Polyline::empty(),
            distance_meters: 0.0,
            duration_secs: 0.0,
            segments: Vec::new(),
        }
    }
}

/// Orders the stops with the nearest-neighbour heuristic, then routes and
/// partitions them.
pub fn plan<S, P>(
    stops: &[S],
    provider: &P,
    profile: TravelProfile,
    days: &DayPlan,
) -> Result<Itinerary<S>, P::Error>
where
    S: Stop + Clone,
    P: RouteProvider,
{
    let ordered = sequence::order_stops(stops);
    plan_ordered(&ordered, provider, profile, days)
}

/// Routes and partitions the stops in the exact given order (e.g. after the
/// user reordered them by hand).
pub fn plan_ordered<S, P>(
    stops: &[S],
    provider: &P,
    profile: TravelProfile,
    days: &DayPlan,
) -> Result<Itinerary<S>, P::Error>
where
    S: Stop + Clone,
    P: RouteProvider,
{
    if stops.len() < 2 {
        return Ok(Itinerary::empty(stops.to_vec()));
    }

    let locations: Vec<(f64, f64)> = stops.iter().map(Stop::location).collect();
    let summary = provider.route_for(&locations, profile)?;
    let segments = segment::split_by_day(&summary.geometry, stops, days);
    debug!(
        stops = stops.len(),
        vertices = summary.geometry.len(),
        segments = segments.len(),
        "itinerary assembled"
    );

    Ok(Itinerary {
        stops: stops.to_vec(),
        route: summary.geometry,
        distance_meters: summary.distance_meters,
        duration_secs: summary.duration_secs,
        segments,
    })
}

/// Delegates stop ordering to the routing service's optimized mode, then
/// partitions the returned route.
///
/// The service fixes the first stop as the start and reorders the rest. If
/// it reports a malformed visit order, the input order is kept.
pub fn plan_optimized<S, P>(
    stops: &[S],
    provider: &P,
    profile: TravelProfile,
    days: &DayPlan,
) -> Result<Itinerary<S>, P::Error>
where
    S: Stop + Clone,
    P: RouteProvider,
{
    if stops.len() < 2 {
        return Ok(Itinerary::empty(stops.to_vec()));
    }

    let locations: Vec<(f64, f64)> = stops.iter().map(Stop::location).collect();
    let trip = provider.optimized_trip(&locations, profile)?;

    let ordered = apply_order(stops, &trip.order);
    let segments = segment::split_by_day(&trip.summary.geometry, &ordered, days);
    debug!(
        stops = ordered.len(),
        vertices = trip.summary.geometry.len(),
        segments = segments.len(),
        "optimized itinerary assembled"
    );

    Ok(Itinerary {
        stops: ordered,
        route: trip.summary.geometry,
        distance_meters: trip.summary.distance_meters,
        duration_secs: trip.summary.duration_secs,
        segments,
    })
}

/// Applies a visit order to the stops, keeping input order when the reported
/// order is not a usable permutation.
fn apply_order<S: Clone>(stops: &[S], order: &[usize]) -> Vec<S> {
    if order.len() != stops.len() {
        return stops.to_vec();
    }
    let mut ordered = Vec::with_capacity(stops.len());
    for &index in order {
        match stops.get(index) {
            Some(stop) => ordered.push(stop.clone()),
            None => return stops.to_vec(),
        }
    }
    ordered
}
