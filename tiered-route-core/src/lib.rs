//! Core domain types for tiered delivery routing.
//!
//! A route visits every stop of the priority tier (`"BLACK"`) before any
//! other stop. Within each tier bucket, stops are ordered by a greedy
//! nearest-neighbour pass using haversine distance, starting from the depot
//! for the priority bucket and from the last priority stop for the rest.
//!
//! The crate is split into:
//! - [`geo_point`]: coordinates and great-circle distance.
//! - [`Stop`] and its identifiers, and [`OrderRecord`] for full order rows.
//! - [`sequencer`]: the pure sequencing engine.
//! - [`store`]: the read-only data access boundary, with an optional SQLite
//!   implementation.
//! - [`planner`]: glue that loads inputs from a store and sequences them.
//!
//! # Examples
//! ```
//! use tiered_route_core::{GeoPoint, Stop, build_route};
//!
//! let depot = GeoPoint::new(-33.518, -70.71749);
//! let stops = vec![
//!     Stop::new("3", "9.999.999-9", "PRO", GeoPoint::new(-33.49, -70.60)),
//!     Stop::new("1", "11.111.111-1", "BLACK", GeoPoint::new(-33.44, -70.65)),
//! ];
//! let route = build_route(depot, &stops);
//! assert_eq!(route.stops()[0].tier.as_str(), "BLACK");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod geo_point;
pub mod planner;
pub mod sequencer;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

mod order;
mod sequence;
mod stop;

pub use geo_point::{EARTH_RADIUS_KM, GeoPoint, distance_km};
pub use order::OrderRecord;
pub use planner::{PlanError, RoutePlan, RoutePlanner};
pub use sequence::{RouteKpis, RouteSequence, SequencedStop};
pub use sequencer::{PriorityPartition, Sequencer, TieredSequencer, build_route};
pub use stop::{CustomerKey, PRIORITY_TIER, Stop, StopId, Tier};
pub use store::RouteStore;

#[cfg(feature = "store-sqlite")]
pub use store::{SqliteRouteStore, SqliteRouteStoreError};
