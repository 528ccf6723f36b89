//! Greedy nearest-neighbour stop ordering.
//!
//! Turns an unordered set of stops into a travel sequence by always walking
//! to the closest unvisited stop. This is a heuristic, not a tour optimizer:
//! it never backtracks, so certain layouts produce visibly suboptimal
//! zig-zags. That behavior is deliberate and stable; server-side reordering
//! via [`crate::traits::RouteProvider::optimized_trip`] is the alternative.

use crate::haversine;
use crate::traits::Stop;

/// Orders stops into a travel sequence with the first stop as fixed start.
///
/// Returns a permutation of the input. Among equidistant candidates the one
/// with the lowest original index wins, so the ordering is deterministic.
/// Inputs of two or fewer stops come back unchanged. O(n²) distance
/// evaluations; fine at itinerary scale (tens of stops).
pub fn order_stops<S>(stops: &[S]) -> Vec<S>
where
    S: Stop + Clone,
{
    if stops.len() <= 2 {
        return stops.to_vec();
    }

    let mut ordered = Vec::with_capacity(stops.len());
    ordered.push(stops[0].clone());
    let mut current = stops[0].location();

    let mut remaining: Vec<&S> = stops[1..].iter().collect();
    while !remaining.is_empty() {
        let mut best_index = 0;
        let mut best_distance = f64::INFINITY;
        for (i, stop) in remaining.iter().enumerate() {
            let distance = haversine::distance_meters(current, stop.location());
            if distance < best_distance {
                best_distance = distance;
                best_index = i;
            }
        }

        let next = remaining.remove(best_index);
        current = next.location();
        ordered.push(next.clone());
    }

    ordered
}
