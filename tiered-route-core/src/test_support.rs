//! Test-only helpers shared by unit, behaviour and property tests.
//!
//! Compiled for this crate's own tests and, for dependants, only with the
//! `test-support` feature.
//!
//! [`MemoryStore`] is an in-memory [`RouteStore`]; [`write_sqlite_database`]
//! lays down the table layout read by the SQLite store.

use std::{collections::BTreeMap, convert::Infallible};

use thiserror::Error;

use crate::{CustomerKey, GeoPoint, RouteStore, Stop, Tier};

/// Construct a stop owned by `customer-{id}`.
///
/// # Examples
/// ```rust
/// use tiered_route_core::test_support::stop;
///
/// let stop = stop("1", "BLACK", -33.44, -70.65);
/// assert_eq!(stop.customer_key.as_str(), "customer-1");
/// assert!(stop.is_priority());
/// ```
#[must_use]
pub fn stop(id: &str, tier: &str, latitude: f64, longitude: f64) -> Stop {
    Stop::new(
        id,
        format!("customer-{id}"),
        tier,
        GeoPoint::new(latitude, longitude),
    )
}

/// Errors from [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryStoreError {
    /// No depot was configured.
    #[error("depot is not configured")]
    MissingDepot,
}

/// In-memory `RouteStore` used in tests.
///
/// Stops are grouped by date and returned in insertion order.
#[derive(Default, Debug, Clone)]
pub struct MemoryStore {
    depot: Option<GeoPoint>,
    stops: BTreeMap<String, Vec<Stop>>,
}

impl MemoryStore {
    /// Create a store with a configured depot and no stops.
    #[must_use]
    pub fn with_depot(depot: GeoPoint) -> Self {
        Self {
            depot: Some(depot),
            stops: BTreeMap::new(),
        }
    }

    /// Add `stop` to the schedule for `date`.
    #[must_use]
    pub fn with_stop(mut self, date: &str, stop: Stop) -> Self {
        self.stops.entry(date.to_owned()).or_default().push(stop);
        self
    }

    /// Add every stop in `stops` to the schedule for `date`.
    #[must_use]
    pub fn with_stops<I>(self, date: &str, stops: I) -> Self
    where
        I: IntoIterator<Item = Stop>,
    {
        stops
            .into_iter()
            .fold(self, |store, next| store.with_stop(date, next))
    }
}

impl RouteStore for MemoryStore {
    type Error = MemoryStoreError;

    fn depot(&self) -> Result<GeoPoint, Self::Error> {
        self.depot.ok_or(MemoryStoreError::MissingDepot)
    }

    fn stops_for_date(&self, date: &str) -> Result<Vec<Stop>, Self::Error> {
        Ok(self.stops.get(date).cloned().unwrap_or_default())
    }

    fn tier_for(&self, customer_key: &CustomerKey) -> Result<Option<Tier>, Self::Error> {
        Ok(self
            .stops
            .values()
            .flatten()
            .find(|stop| &stop.customer_key == customer_key)
            .map(|stop| stop.tier.clone()))
    }
}

/// A `RouteStore` whose queries never fail, wrapping a fixed depot and stop
/// list regardless of date.
#[derive(Debug, Clone)]
pub struct FixedStore {
    /// Depot returned by every call.
    pub depot: GeoPoint,
    /// Stops returned for every date.
    pub stops: Vec<Stop>,
}

impl RouteStore for FixedStore {
    type Error = Infallible;

    fn depot(&self) -> Result<GeoPoint, Self::Error> {
        Ok(self.depot)
    }

    fn stops_for_date(&self, _date: &str) -> Result<Vec<Stop>, Self::Error> {
        Ok(self.stops.clone())
    }

    fn tier_for(&self, customer_key: &CustomerKey) -> Result<Option<Tier>, Self::Error> {
        Ok(self
            .stops
            .iter()
            .find(|stop| &stop.customer_key == customer_key)
            .map(|stop| stop.tier.clone()))
    }
}

#[cfg(feature = "store-sqlite")]
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS customers (
      rut TEXT PRIMARY KEY, name TEXT, tier TEXT, address TEXT, lat REAL, lon REAL
    );
    CREATE TABLE IF NOT EXISTS orders (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      rut TEXT NOT NULL, order_date TEXT NOT NULL,
      window_start TEXT, window_end TEXT, weight REAL, volume REAL,
      status TEXT DEFAULT 'PENDING',
      FOREIGN KEY(rut) REFERENCES customers(rut)
    );
    CREATE TABLE IF NOT EXISTS config (key TEXT PRIMARY KEY, value TEXT);
";

/// Create the route tables at `path` and populate them.
///
/// Each stop becomes a customer row (keyed by its customer key) and an order
/// row dated `date` whose id is the stop id. Stop ids must therefore be
/// integers. The depot, when given, is written to `config` as decimal text.
///
/// # Errors
/// Returns any SQLite error raised while creating or filling the tables.
#[cfg(feature = "store-sqlite")]
pub fn write_sqlite_database(
    path: &std::path::Path,
    depot: Option<GeoPoint>,
    date: &str,
    stops: &[Stop],
) -> rusqlite::Result<()> {
    use rusqlite::{Connection, params};

    use crate::store::{DEPOT_LATITUDE_KEY, DEPOT_LONGITUDE_KEY};

    let mut connection = Connection::open(path)?;
    connection.execute_batch(SCHEMA)?;
    let tx = connection.transaction()?;

    if let Some(point) = depot {
        for (key, value) in [
            (DEPOT_LATITUDE_KEY, point.latitude),
            (DEPOT_LONGITUDE_KEY, point.longitude),
        ] {
            tx.execute(
                "INSERT INTO config(key, value) VALUES(?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value.to_string()],
            )?;
        }
    }

    for entry in stops {
        tx.execute(
            "INSERT INTO customers(rut, name, tier, lat, lon) VALUES(?1, ?1, ?2, ?3, ?4)
             ON CONFLICT(rut) DO UPDATE SET tier = excluded.tier,
               lat = excluded.lat, lon = excluded.lon",
            params![
                entry.customer_key.as_str(),
                entry.tier.as_str(),
                entry.location.latitude,
                entry.location.longitude,
            ],
        )?;
        tx.execute(
            "INSERT INTO orders(id, rut, order_date) VALUES(CAST(?1 AS INTEGER), ?2, ?3)",
            params![entry.stop_id.as_str(), entry.customer_key.as_str(), date],
        )?;
    }

    tx.commit()
}
