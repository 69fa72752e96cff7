//! Tiered delivery route planning.
//!
//! Re-exports the sequencing engine, planner and store trait from
//! `tiered-route-core`. The SQLite store is available with the
//! `store-sqlite` feature.

#![forbid(unsafe_code)]

pub use tiered_route_core::{
    CustomerKey, EARTH_RADIUS_KM, GeoPoint, OrderRecord, PlanError, PriorityPartition, RouteKpis, RoutePlan,
    RoutePlanner, RouteSequence, RouteStore, SequencedStop, Sequencer, Stop, StopId, Tier,
    TieredSequencer, build_route, distance_km,
};

#[cfg(feature = "store-sqlite")]
pub use tiered_route_core::{SqliteRouteStore, SqliteRouteStoreError};
