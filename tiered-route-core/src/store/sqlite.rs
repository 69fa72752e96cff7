//! SQLite-backed route store.
//!
//! Reads the `customers`, `orders` and `config` tables maintained by the
//! surrounding service. The depot lives in `config` under
//! [`DEPOT_LATITUDE_KEY`] and [`DEPOT_LONGITUDE_KEY`] as decimal text.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use rusqlite::{Connection, OpenFlags, OptionalExtension, types::Value};
use thiserror::Error;

use crate::{CustomerKey, GeoPoint, OrderRecord, Stop, StopId, Tier};

use super::RouteStore;

/// `config` key holding the depot latitude.
pub const DEPOT_LATITUDE_KEY: &str = "depot_lat";
/// `config` key holding the depot longitude.
pub const DEPOT_LONGITUDE_KEY: &str = "depot_lon";

const STOPS_FOR_DATE_QUERY: &str = "SELECT o.id, o.rut, c.tier, c.lat, c.lon
     FROM orders o JOIN customers c USING(rut)
     WHERE o.order_date = ?1
     ORDER BY o.id";

const ORDERS_FOR_DATE_QUERY: &str = "SELECT o.id, o.rut, o.order_date, o.window_start,
       o.window_end, o.weight, o.volume, o.status, c.tier, c.lat, c.lon
     FROM orders o JOIN customers c USING(rut)
     WHERE o.order_date = ?1
     ORDER BY o.id";

/// Error raised when reading route inputs from SQLite.
#[derive(Debug, Error)]
pub enum SqliteRouteStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A depot coordinate was not configured.
    #[error("depot is not configured: missing `{key}` in config")]
    MissingDepot {
        /// The absent configuration key.
        key: &'static str,
    },
    /// A depot coordinate was configured but is not a number.
    #[error("depot coordinate `{key}` is not numeric: {value:?}")]
    InvalidDepot {
        /// The offending configuration key.
        key: &'static str,
        /// The stored value.
        value: String,
    },
    /// Generic SQLite error when reading rows.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Read-only [`RouteStore`] over a SQLite connection.
pub struct SqliteRouteStore {
    connection: Connection,
}

impl fmt::Debug for SqliteRouteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteRouteStore")
            .field("path", &self.connection.path())
            .finish_non_exhaustive()
    }
}

impl SqliteRouteStore {
    /// Open the database at `path` read-only.
    pub fn open<P>(path: P) -> Result<Self, SqliteRouteStoreError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| SqliteRouteStoreError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("opened route store at {}", path.display());
        Ok(Self::from_connection(connection))
    }

    /// Wrap an existing connection, e.g. an in-memory database.
    #[must_use]
    pub const fn from_connection(connection: Connection) -> Self {
        Self { connection }
    }

    fn depot_coordinate(&self, key: &'static str) -> Result<f64, SqliteRouteStoreError> {
        let stored: Option<Value> = self
            .connection
            .query_row("SELECT value FROM config WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;

        match stored {
            None | Some(Value::Null) => Err(SqliteRouteStoreError::MissingDepot { key }),
            Some(Value::Real(number)) => Ok(number),
            Some(Value::Integer(number)) => Ok(integer_degrees(number)),
            Some(Value::Text(text)) => text
                .trim()
                .parse()
                .map_err(|_| SqliteRouteStoreError::InvalidDepot { key, value: text }),
            Some(Value::Blob(bytes)) => Err(SqliteRouteStoreError::InvalidDepot {
                key,
                value: format!("<{} byte blob>", bytes.len()),
            }),
        }
    }

    /// List every order scheduled for `date` with all of its columns.
    ///
    /// Orders whose customer has no coordinates are kept, with `location`
    /// set to `None`.
    ///
    /// # Errors
    /// Returns [`SqliteRouteStoreError::Database`] when the query fails.
    pub fn orders_for_date(&self, date: &str) -> Result<Vec<OrderRecord>, SqliteRouteStoreError> {
        let mut statement = self.connection.prepare(ORDERS_FOR_DATE_QUERY)?;
        let orders = statement
            .query_map([date], |row| {
                let id: i64 = row.get(0)?;
                let customer: String = row.get(1)?;
                let tier: Option<String> = row.get(8)?;
                let latitude: Option<f64> = row.get(9)?;
                let longitude: Option<f64> = row.get(10)?;
                Ok(OrderRecord {
                    id: StopId::from(id),
                    customer_key: CustomerKey::new(customer),
                    order_date: row.get(2)?,
                    window_start: row.get(3)?,
                    window_end: row.get(4)?,
                    weight: row.get(5)?,
                    volume: row.get(6)?,
                    status: row.get(7)?,
                    tier: Tier::new(tier.unwrap_or_default()),
                    location: latitude
                        .zip(longitude)
                        .map(|(lat, lon)| GeoPoint::new(lat, lon)),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        debug!("loaded {} orders for {date}", orders.len());
        Ok(orders)
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "whole-degree coordinates are far below f64's exact integer range"
)]
fn integer_degrees(value: i64) -> f64 {
    value as f64
}

impl RouteStore for SqliteRouteStore {
    type Error = SqliteRouteStoreError;

    fn depot(&self) -> Result<GeoPoint, Self::Error> {
        let latitude = self.depot_coordinate(DEPOT_LATITUDE_KEY)?;
        let longitude = self.depot_coordinate(DEPOT_LONGITUDE_KEY)?;
        Ok(GeoPoint::new(latitude, longitude))
    }

    fn stops_for_date(&self, date: &str) -> Result<Vec<Stop>, Self::Error> {
        let mut statement = self.connection.prepare(STOPS_FOR_DATE_QUERY)?;
        let mut rows = statement.query([date])?;
        let mut stops = Vec::new();

        while let Some(row) = rows.next()? {
            let id: i64 = row.get(0)?;
            let customer: String = row.get(1)?;
            let tier: Option<String> = row.get(2)?;
            let latitude: Option<f64> = row.get(3)?;
            let longitude: Option<f64> = row.get(4)?;

            let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
                warn!("skipping order {id}: customer {customer} has no coordinates");
                continue;
            };

            stops.push(Stop::new(
                StopId::from(id),
                CustomerKey::new(customer),
                Tier::new(tier.unwrap_or_default()),
                GeoPoint::new(latitude, longitude),
            ));
        }

        debug!("loaded {} stops for {date}", stops.len());
        Ok(stops)
    }

    fn tier_for(&self, customer_key: &CustomerKey) -> Result<Option<Tier>, Self::Error> {
        let tier: Option<Option<String>> = self
            .connection
            .query_row(
                "SELECT tier FROM customers WHERE rut = ?1",
                [customer_key.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(tier.map(|label| Tier::new(label.unwrap_or_default())))
    }
}
