//! Greedy nearest-neighbour ordering.

use crate::{GeoPoint, Stop, distance_km};

/// Order `pool` by repeatedly visiting the closest remaining stop, starting
/// from `start`.
///
/// Ties resolve to the candidate that appears first in the pool. The pool
/// keeps its relative order as stops are removed, so "first" always means
/// first in the caller's iteration order.
pub(crate) fn order_greedily(start: GeoPoint, pool: Vec<&Stop>) -> Vec<&Stop> {
    let mut remaining = pool;
    let mut ordered = Vec::with_capacity(remaining.len());
    let mut current = start;

    while let Some(index) = nearest_index(current, &remaining) {
        let next = remaining.remove(index);
        current = next.location;
        ordered.push(next);
    }

    ordered
}

/// Index of the candidate closest to `from`, or `None` for an empty slice.
///
/// Only a strictly smaller distance replaces the running best, which keeps
/// the first minimum on ties and never lets a NaN distance displace a
/// finite one.
fn nearest_index(from: GeoPoint, candidates: &[&Stop]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let distance = distance_km(from, candidate.location);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}

/// Length of the path from `start` through `path` in order, in kilometres.
#[expect(
    clippy::float_arithmetic,
    reason = "path length accumulates leg distances"
)]
pub(crate) fn path_length_km(start: GeoPoint, path: &[&Stop]) -> f64 {
    let mut current = start;
    let mut total = 0.0;
    for stop in path {
        total += distance_km(current, stop.location);
        current = stop.location;
    }
    total
}
