//! Tier-aware route sequencing.
//!
//! Stops of the priority tier are ordered first, greedily from the depot.
//! The remaining stops follow, ordered greedily from wherever the priority
//! leg ended, so no ordinary stop is ever visited before a priority one.

mod greedy;

use log::debug;

use crate::{GeoPoint, RouteSequence, SequencedStop, Stop};

use greedy::{order_greedily, path_length_km};

/// Produces an ordered route for a depot and a set of stops.
///
/// Implementations are pure: the output depends only on the arguments, so
/// sequencers must be `Send + Sync` and callable concurrently.
pub trait Sequencer: Send + Sync {
    /// Order `stops` into a route starting at `depot`.
    fn sequence(&self, depot: GeoPoint, stops: &[Stop]) -> RouteSequence;
}

/// The default [`Sequencer`]: priority tier first, greedy nearest neighbour
/// within each tier bucket.
///
/// # Examples
/// ```
/// use tiered_route_core::{GeoPoint, Sequencer, Stop, TieredSequencer};
///
/// let depot = GeoPoint::new(0.0, 0.0);
/// let stops = vec![
///     Stop::new("near", "c1", "REGULAR", GeoPoint::new(0.0, 0.1)),
///     Stop::new("far", "c2", "BLACK", GeoPoint::new(0.0, 1.0)),
/// ];
/// let route = TieredSequencer.sequence(depot, &stops);
/// let order: Vec<_> = route.stops().iter().map(|s| s.stop_id.as_str()).collect();
/// assert_eq!(order, ["far", "near"]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TieredSequencer;

impl Sequencer for TieredSequencer {
    fn sequence(&self, depot: GeoPoint, stops: &[Stop]) -> RouteSequence {
        build_route(depot, stops)
    }
}

/// Stops split into the priority tier and everything else.
///
/// Both halves keep the input order.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityPartition<'a> {
    /// Stops whose tier is the priority tier.
    pub priority: Vec<&'a Stop>,
    /// All remaining stops.
    pub rest: Vec<&'a Stop>,
}

impl<'a> PriorityPartition<'a> {
    /// Partition `stops` by [`Stop::is_priority`].
    #[must_use]
    pub fn split(stops: &'a [Stop]) -> Self {
        let (priority, rest) = stops.iter().partition(|stop| stop.is_priority());
        Self { priority, rest }
    }
}

/// Sequence `stops` from `depot`, visiting every priority stop first.
///
/// Empty input yields an empty sequence with zero distance. The returned
/// distance is full precision; use [`RouteSequence::kpis`] for the rounded
/// figure.
///
/// # Examples
/// ```
/// use tiered_route_core::{GeoPoint, build_route};
///
/// let route = build_route(GeoPoint::new(-33.518, -70.71749), &[]);
/// assert!(route.is_empty());
/// assert_eq!(route.total_distance_km(), 0.0);
/// ```
#[must_use]
pub fn build_route(depot: GeoPoint, stops: &[Stop]) -> RouteSequence {
    let PriorityPartition { priority, rest } = PriorityPartition::split(stops);
    debug!(
        "sequencing {} priority and {} ordinary stops",
        priority.len(),
        rest.len()
    );

    let mut ordered = order_greedily(depot, priority);
    let rest_start = ordered.last().map_or(depot, |stop| stop.location);
    ordered.extend(order_greedily(rest_start, rest));

    let total_distance_km = path_length_km(depot, &ordered);
    debug!(
        "sequenced {} stops over {total_distance_km:.3} km",
        ordered.len()
    );

    let entries = ordered.into_iter().map(SequencedStop::from).collect();
    RouteSequence::new(entries, total_distance_km)
}
