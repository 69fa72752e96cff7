//! Route planning over an injected store.
//!
//! [`RoutePlanner`] resolves the depot and a day's stops through a
//! [`RouteStore`], hands them to a [`Sequencer`] and packages the result as
//! a [`RoutePlan`] ready for serialisation.

use log::info;
use thiserror::Error;

use crate::{
    CustomerKey, GeoPoint, RouteKpis, RouteSequence, RouteStore, SequencedStop, Sequencer, Stop,
    Tier, TieredSequencer,
};

/// Errors returned by [`RoutePlanner`].
#[derive(Debug, Error)]
pub enum PlanError<E>
where
    E: std::error::Error + 'static,
{
    /// The store could not supply the route inputs.
    #[error("failed to load route inputs: {0}")]
    Store(#[source] E),
}

/// A planned route for one day, in presentation order.
///
/// # Examples
/// ```
/// use tiered_route_core::{GeoPoint, RoutePlan, RouteSequence};
///
/// let plan = RoutePlan::new(GeoPoint::new(0.0, 0.0), RouteSequence::empty());
/// assert!(plan.prioritized);
/// assert!(plan.sequence.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePlan {
    /// Start location of the route.
    pub depot: GeoPoint,
    /// Whether priority-tier stops were moved to the front. Always `true`
    /// for plans built here.
    pub prioritized: bool,
    /// Stops in visiting order.
    pub sequence: Vec<SequencedStop>,
    /// Summary figures, rounded for display.
    pub kpis: RouteKpis,
}

impl RoutePlan {
    /// Package a sequenced route starting at `depot`.
    #[must_use]
    pub fn new(depot: GeoPoint, sequence: RouteSequence) -> Self {
        let kpis = sequence.kpis();
        Self {
            depot,
            prioritized: true,
            sequence: sequence.into_stops(),
            kpis,
        }
    }
}

/// Plans routes by combining a [`RouteStore`] with a [`Sequencer`].
///
/// # Examples
/// ```
/// use tiered_route_core::{GeoPoint, RoutePlanner};
/// use tiered_route_core::test_support::{MemoryStore, stop};
///
/// let store = MemoryStore::with_depot(GeoPoint::new(-33.518, -70.71749))
///     .with_stop("2025-09-24", stop("1", "PRO", -33.49, -70.60))
///     .with_stop("2025-09-24", stop("2", "BLACK", -33.45, -70.62));
/// let planner = RoutePlanner::new(store);
///
/// let plan = planner.plan_for_date("2025-09-24")?;
/// assert_eq!(plan.sequence[0].stop_id.as_str(), "2");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct RoutePlanner<S, Q = TieredSequencer>
where
    S: RouteStore,
    Q: Sequencer,
{
    store: S,
    sequencer: Q,
}

impl<S> RoutePlanner<S, TieredSequencer>
where
    S: RouteStore,
{
    /// Construct a planner using the tiered sequencer.
    pub const fn new(store: S) -> Self {
        Self::with_sequencer(store, TieredSequencer)
    }
}

impl<S, Q> RoutePlanner<S, Q>
where
    S: RouteStore,
    Q: Sequencer,
{
    /// Construct a planner with an explicit sequencer.
    pub const fn with_sequencer(store: S, sequencer: Q) -> Self {
        Self { store, sequencer }
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Build the route for every stop scheduled on `date`.
    ///
    /// A date without stops yields an empty plan rather than an error.
    ///
    /// # Errors
    /// Returns [`PlanError::Store`] when the depot or the stops cannot be
    /// loaded.
    pub fn plan_for_date(&self, date: &str) -> Result<RoutePlan, PlanError<S::Error>> {
        let depot = self.store.depot().map_err(PlanError::Store)?;
        let stops = self.stops_for_date(date)?;
        let sequence = self.sequencer.sequence(depot, &stops);
        info!(
            "planned {} stops for {date} covering {:.1} km",
            sequence.len(),
            sequence.kpis().total_distance_km
        );
        Ok(RoutePlan::new(depot, sequence))
    }

    /// The stops scheduled on `date`, in store order.
    ///
    /// # Errors
    /// Returns [`PlanError::Store`] when the store query fails.
    pub fn stops_for_date(&self, date: &str) -> Result<Vec<Stop>, PlanError<S::Error>> {
        self.store.stops_for_date(date).map_err(PlanError::Store)
    }

    /// The tier of `customer_key`, if the customer is known.
    ///
    /// # Errors
    /// Returns [`PlanError::Store`] when the store query fails.
    pub fn tier_for(&self, customer_key: &CustomerKey) -> Result<Option<Tier>, PlanError<S::Error>> {
        self.store.tier_for(customer_key).map_err(PlanError::Store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixedStore, MemoryStore, MemoryStoreError, stop};
    use rstest::{fixture, rstest};

    const DATE: &str = "2025-09-24";

    #[fixture]
    fn store() -> MemoryStore {
        MemoryStore::with_depot(GeoPoint::new(-33.518, -70.71749)).with_stops(
            DATE,
            [
                stop("1", "BLACK", -33.44, -70.65),
                stop("2", "BLACK", -33.45, -70.62),
                stop("3", "PRO", -33.49, -70.60),
                stop("4", "REGULAR", -33.50, -70.67),
            ],
        )
    }

    /// Reverses store order without looking at distances.
    struct ReverseSequencer;

    impl Sequencer for ReverseSequencer {
        fn sequence(&self, _depot: GeoPoint, stops: &[Stop]) -> RouteSequence {
            RouteSequence::new(stops.iter().rev().map(SequencedStop::from).collect(), 1.25)
        }
    }

    #[rstest]
    fn plans_priority_stops_first(store: MemoryStore) {
        let plan = RoutePlanner::new(store).plan_for_date(DATE).expect("plan");
        let ids: Vec<_> = plan.sequence.iter().map(|s| s.stop_id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert!(plan.prioritized);
        assert_eq!(plan.depot, GeoPoint::new(-33.518, -70.71749));
        assert!(plan.kpis.total_distance_km > 0.0);
    }

    #[rstest]
    fn empty_day_is_an_empty_plan(store: MemoryStore) {
        let plan = RoutePlanner::new(store)
            .plan_for_date("2030-01-01")
            .expect("plan");
        assert!(plan.sequence.is_empty());
        assert_eq!(plan.kpis.total_distance_km, 0.0);
    }

    #[rstest]
    fn missing_depot_propagates_store_error() {
        let store = MemoryStore::default().with_stop(DATE, stop("1", "BLACK", 0.0, 0.0));
        let error = RoutePlanner::new(store)
            .plan_for_date(DATE)
            .expect_err("depot is missing");
        assert!(matches!(error, PlanError::Store(MemoryStoreError::MissingDepot)));
        assert_eq!(
            error.to_string(),
            "failed to load route inputs: depot is not configured"
        );
    }

    #[rstest]
    fn custom_sequencer_is_used(store: MemoryStore) {
        let plan = RoutePlanner::with_sequencer(store, ReverseSequencer)
            .plan_for_date(DATE)
            .expect("plan");
        let ids: Vec<_> = plan.sequence.iter().map(|s| s.stop_id.as_str()).collect();
        assert_eq!(ids, ["4", "3", "2", "1"]);
        assert_eq!(plan.kpis.total_distance_km, 1.2);
    }

    #[rstest]
    fn tier_lookup_goes_through_store() {
        let planner = RoutePlanner::new(FixedStore {
            depot: GeoPoint::new(0.0, 0.0),
            stops: vec![stop("9", "PRO", 0.0, 1.0)],
        });
        let tier = planner
            .tier_for(&CustomerKey::new("customer-9"))
            .expect("infallible");
        assert_eq!(tier, Some(Tier::new("PRO")));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn plan_serialises_with_kpi_block(store: MemoryStore) {
        let plan = RoutePlanner::new(store).plan_for_date(DATE).expect("plan");
        let json = serde_json::to_value(&plan).expect("serialise plan");
        assert_eq!(json["prioritized"], serde_json::Value::Bool(true));
        assert_eq!(json["sequence"][0]["tier"], "BLACK");
        assert_eq!(json["sequence"][0]["customer_key"], "customer-1");
        assert_eq!(json["sequence"][0]["stop_id"], "1");
        assert!(json["kpis"]["total_distance_km"].is_f64());
        assert_eq!(json["depot"]["latitude"], -33.518);
    }
}
