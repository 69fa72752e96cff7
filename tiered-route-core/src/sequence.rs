//! Ordered route output and its KPI block.

use crate::{CustomerKey, Stop, StopId, Tier};

/// One entry of an ordered route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequencedStop {
    /// Tier label of the stop's customer.
    pub tier: Tier,
    /// Customer the stop belongs to.
    pub customer_key: CustomerKey,
    /// Identifier of the visited stop.
    pub stop_id: StopId,
}

impl From<&Stop> for SequencedStop {
    fn from(stop: &Stop) -> Self {
        Self {
            tier: stop.tier.clone(),
            customer_key: stop.customer_key.clone(),
            stop_id: stop.stop_id.clone(),
        }
    }
}

/// Summary figures reported alongside a route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteKpis {
    /// Total path length from the depot through every stop, rounded to one
    /// decimal place.
    pub total_distance_km: f64,
}

/// The ordered output of a sequencing run.
///
/// Holds the full-precision path length; [`RouteSequence::kpis`] yields the
/// rounded figure intended for display.
///
/// # Examples
/// ```
/// use tiered_route_core::RouteSequence;
///
/// let sequence = RouteSequence::empty();
/// assert!(sequence.is_empty());
/// assert_eq!(sequence.kpis().total_distance_km, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSequence {
    stops: Vec<SequencedStop>,
    total_distance_km: f64,
}

impl RouteSequence {
    /// Construct a sequence from ordered stops and their path length.
    #[must_use]
    pub const fn new(stops: Vec<SequencedStop>, total_distance_km: f64) -> Self {
        Self {
            stops,
            total_distance_km,
        }
    }

    /// A sequence with no stops and zero distance.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), 0.0)
    }

    /// Stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[SequencedStop] {
        &self.stops
    }

    /// Consume the sequence, returning the ordered stops.
    #[must_use]
    pub fn into_stops(self) -> Vec<SequencedStop> {
        self.stops
    }

    /// Number of stops in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the sequence visits no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Full-precision path length in kilometres.
    #[must_use]
    pub const fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// KPI block with the distance rounded to one decimal place.
    #[must_use]
    pub fn kpis(&self) -> RouteKpis {
        RouteKpis {
            total_distance_km: round_to_tenth(self.total_distance_km),
        }
    }
}

/// Round to one decimal place the way a decimal printer does: the exact
/// binary value is rounded, with exact halves going to the even digit.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
