//! Data access traits for route inputs.
//!
//! The `RouteStore` trait is the read-only boundary between the sequencing
//! core and whatever persists customers, orders and depot configuration.
//! Sequencing never reaches into storage; callers resolve the depot and the
//! day's stops through a store and hand the values over.

use crate::{CustomerKey, GeoPoint, Stop, Tier};

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{
    DEPOT_LATITUDE_KEY, DEPOT_LONGITUDE_KEY, SqliteRouteStore, SqliteRouteStoreError,
};

/// Read-only access to the inputs of a route-building run.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use tiered_route_core::{CustomerKey, GeoPoint, RouteStore, Stop, Tier};
///
/// struct FixedStore {
///     stops: Vec<Stop>,
/// }
///
/// impl RouteStore for FixedStore {
///     type Error = Infallible;
///
///     fn depot(&self) -> Result<GeoPoint, Self::Error> {
///         Ok(GeoPoint::new(-33.518, -70.71749))
///     }
///
///     fn stops_for_date(&self, _date: &str) -> Result<Vec<Stop>, Self::Error> {
///         Ok(self.stops.clone())
///     }
///
///     fn tier_for(&self, customer_key: &CustomerKey) -> Result<Option<Tier>, Self::Error> {
///         Ok(self
///             .stops
///             .iter()
///             .find(|stop| &stop.customer_key == customer_key)
///             .map(|stop| stop.tier.clone()))
///     }
/// }
///
/// let stop = Stop::new("1", "11.111.111-1", "BLACK", GeoPoint::new(-33.44, -70.65));
/// let store = FixedStore { stops: vec![stop] };
/// let tier = store.tier_for(&CustomerKey::new("11.111.111-1"))?;
/// assert_eq!(tier, Some(Tier::black()));
/// # Ok::<(), Infallible>(())
/// ```
pub trait RouteStore {
    /// Error raised when the backing storage cannot answer a query.
    type Error: std::error::Error + 'static;

    /// The configured depot location.
    fn depot(&self) -> Result<GeoPoint, Self::Error>;

    /// All stops scheduled on `date`, each joined with its customer's tier
    /// and location.
    ///
    /// A date with no orders yields an empty vector, not an error.
    fn stops_for_date(&self, date: &str) -> Result<Vec<Stop>, Self::Error>;

    /// The tier of `customer_key`, or `None` when the customer is unknown.
    fn tier_for(&self, customer_key: &CustomerKey) -> Result<Option<Tier>, Self::Error>;
}
