//! Road-following route geometry as a decoded coordinate sequence.
//!
//! The routing service returns geometry already decoded to coordinates;
//! any compact wire encoding stays at the API boundary. Coordinates are
//! (longitude, latitude) in degrees, the order the geojson wire format uses.

use serde::{Deserialize, Serialize};

/// A dense, road-following path as an ordered sequence of
/// (longitude, latitude) points.
///
/// Typically hundreds of points for a multi-stop route. Read-only input to
/// the day partitioner; it is never mutated, only sliced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// An empty path. Yields no segments when partitioned.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the polyline and returns the owned points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

impl From<Vec<(f64, f64)>> for Polyline {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points)
    }
}
