//! Delivery stops and the identifiers attached to them.

use std::fmt;

use crate::GeoPoint;

/// Label of the tier whose stops are always visited first.
pub const PRIORITY_TIER: &str = "BLACK";

/// A customer's service tier.
///
/// Tiers form an open set of labels. Only the exact label `"BLACK"` is
/// treated as priority; every other label (including `"black"` or an empty
/// string) is ordinary.
///
/// # Examples
/// ```
/// use tiered_route_core::Tier;
///
/// assert!(Tier::black().is_priority());
/// assert!(!Tier::new("PRO").is_priority());
/// assert!(!Tier::new("black").is_priority());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Tier(String);

impl Tier {
    /// Wrap a tier label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The priority tier, `"BLACK"`.
    #[must_use]
    pub fn black() -> Self {
        Self::new(PRIORITY_TIER)
    }

    /// The raw label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether stops of this tier precede all others.
    #[must_use]
    pub fn is_priority(&self) -> bool {
        self.0 == PRIORITY_TIER
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tier {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Tier {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// Opaque identifier of a stop, typically an order id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StopId(String);

impl StopId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StopId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StopId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for StopId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// Opaque identifier of the customer owning a stop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CustomerKey(String);

impl CustomerKey {
    /// Wrap a customer key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for CustomerKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// One order to be delivered, pre-joined with its customer's tier and
/// location.
///
/// # Examples
/// ```
/// use tiered_route_core::{GeoPoint, Stop, Tier};
///
/// let stop = Stop::new("1", "11.111.111-1", Tier::black(), GeoPoint::new(-33.44, -70.65));
/// assert!(stop.is_priority());
/// assert_eq!(stop.stop_id.as_str(), "1");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Identifier of the order behind this stop.
    pub stop_id: StopId,
    /// Customer the order belongs to.
    pub customer_key: CustomerKey,
    /// Tier of the owning customer.
    pub tier: Tier,
    /// Delivery location.
    pub location: GeoPoint,
}

impl Stop {
    /// Construct a stop.
    pub fn new(
        stop_id: impl Into<StopId>,
        customer_key: impl Into<CustomerKey>,
        tier: impl Into<Tier>,
        location: GeoPoint,
    ) -> Self {
        Self {
            stop_id: stop_id.into(),
            customer_key: customer_key.into(),
            tier: tier.into(),
            location,
        }
    }

    /// Whether this stop belongs to the priority tier.
    #[must_use]
    pub fn is_priority(&self) -> bool {
        self.tier.is_priority()
    }
}
