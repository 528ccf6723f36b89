//! trip-planner core
//!
//! Route ordering and day segmentation for multi-day trip itineraries:
//! greedy nearest-neighbour stop sequencing, point-to-polyline projection,
//! and partitioning of road-following polylines into per-day colored
//! segments, plus the OSRM adapter that produces those polylines.

pub mod traits;
pub mod haversine;
pub mod polyline;
pub mod sequence;
pub mod days;
pub mod segment;
pub mod routing;
pub mod itinerary;
