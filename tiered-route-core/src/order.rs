//! Full order rows as stored, joined with their customer.

use crate::{CustomerKey, GeoPoint, StopId, Tier};

/// One scheduled order with its delivery window, load and status.
///
/// Unlike [`Stop`](crate::Stop), which carries only what sequencing needs,
/// this keeps every order column. Columns left empty in storage are `None`.
///
/// # Examples
/// ```
/// use tiered_route_core::{GeoPoint, OrderRecord};
///
/// let order = OrderRecord::new("1", "11.111.111-1", "2025-09-24", "BLACK")
///     .with_location(GeoPoint::new(-33.44, -70.65));
/// assert!(order.tier.is_priority());
/// assert_eq!(order.window_start, None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderRecord {
    /// Order id.
    pub id: StopId,
    /// Customer who placed the order.
    pub customer_key: CustomerKey,
    /// Delivery date.
    pub order_date: String,
    /// Earliest delivery time, if any.
    pub window_start: Option<String>,
    /// Latest delivery time, if any.
    pub window_end: Option<String>,
    /// Load weight.
    pub weight: Option<f64>,
    /// Load volume.
    pub volume: Option<f64>,
    /// Fulfilment status, e.g. `PENDING`.
    pub status: Option<String>,
    /// Tier of the customer.
    pub tier: Tier,
    /// Customer location, when both coordinates are known.
    pub location: Option<GeoPoint>,
}

impl OrderRecord {
    /// An order with only its identifying columns set.
    #[must_use]
    pub fn new(
        id: impl Into<StopId>,
        customer_key: impl Into<CustomerKey>,
        order_date: impl Into<String>,
        tier: impl Into<Tier>,
    ) -> Self {
        Self {
            id: id.into(),
            customer_key: customer_key.into(),
            order_date: order_date.into(),
            window_start: None,
            window_end: None,
            weight: None,
            volume: None,
            status: None,
            tier: tier.into(),
            location: None,
        }
    }

    /// Set the customer location.
    #[must_use]
    pub const fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }
}
