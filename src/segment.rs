//! Splitting a road polyline into contiguous per-day segments.
//!
//! Each ordered stop is projected onto the nearest polyline vertex, the
//! projected indices are forced forward so segments never run backward or
//! fully overlap, and every consecutive stop pair then yields one inclusive
//! slice of the polyline tagged with a day number for multi-colored
//! rendering.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::days::DayPlan;
use crate::haversine;
use crate::polyline::Polyline;
use crate::traits::Stop;

/// A contiguous piece of the route polyline, drawn in one day's color.
///
/// Always holds at least two points. Produced fresh on every partition call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySegment {
    /// 1-based itinerary day this segment belongs to.
    pub day: u32,
    /// Inclusive sub-sequence of the route polyline.
    pub geometry: Polyline,
}

/// Index of the polyline vertex closest to `point` by great-circle distance.
///
/// Linear scan; the first vertex achieving the minimum wins. Returns 0 for
/// an empty polyline, which callers must treat as undefined.
pub fn closest_vertex(route: &Polyline, point: (f64, f64)) -> usize {
    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;
    for (i, vertex) in route.points().iter().enumerate() {
        let distance = haversine::distance_meters(point, *vertex);
        if distance < best_distance {
            best_distance = distance;
            best_index = i;
        }
    }
    best_index
}

/// Partitions `route` into day-tagged segments aligned to the ordered stops.
///
/// One segment per consecutive stop pair, tagged with the arrival stop's day
/// from `days`. Stops projecting to out-of-order or duplicate vertices are
/// nudged forward, so segment bounds are non-decreasing for any input.
/// Degenerate inputs (fewer than 2 polyline points or fewer than 2 stops)
/// and degenerate pairs (slices of fewer than 2 points) produce no segments
/// rather than an error; an empty result is a normal, renderable state.
pub fn split_by_day<S>(route: &Polyline, stops: &[S], days: &DayPlan) -> Vec<DaySegment>
where
    S: Stop,
{
    let points = route.points();
    if points.len() < 2 || stops.len() < 2 {
        return Vec::new();
    }
    let last = points.len() - 1;

    let mut anchors = anchor_indices(route, stops, last);
    if let Some(final_anchor) = anchors.last_mut() {
        *final_anchor = (*final_anchor).min(last);
    }

    let mut segments = Vec::with_capacity(stops.len() - 1);
    for (i, pair) in anchors.windows(2).enumerate() {
        let (start, end) = (pair[0], pair[1]);
        if end <= start || start > last {
            continue;
        }

        let slice = &points[start..=end];
        if slice.len() < 2 {
            continue;
        }

        segments.push(DaySegment {
            day: days.day_for(i + 1),
            geometry: Polyline::new(slice.to_vec()),
        });
    }

    segments
}

/// Projects every stop onto the polyline and forces the resulting indices
/// forward.
///
/// Single forward pass carrying the previous enforced index: a projection at
/// or before it becomes `min(previous + 1, last)`. Two stops projecting to
/// the same vertex (stops close together) or a later stop projecting behind
/// an earlier one (a detour passing near an earlier stop again) both land on
/// distinct, ordered indices.
fn anchor_indices<S>(route: &Polyline, stops: &[S], last: usize) -> Vec<usize>
where
    S: Stop,
{
    let mut anchors = Vec::with_capacity(stops.len());
    let mut previous: Option<usize> = None;
    for stop in stops {
        let raw = closest_vertex(route, stop.location());
        let enforced = match previous {
            Some(prev) if raw <= prev => {
                let bumped = (prev + 1).min(last);
                debug!(raw, bumped, "projected stop index nudged forward");
                bumped
            }
            _ => raw,
        };
        previous = Some(enforced);
        anchors.push(enforced);
    }
    anchors
}
