//! Order Repository Trait
//!
//! Defines the persistence abstraction for orders. The order row and its item
//! rows are written in two steps so the order builder can reproduce the
//! compensating-delete behavior when item insertion fails; stores with real
//! transactions may implement both steps inside one.

use async_trait::async_trait;
use thiserror::Error;

use super::order::{Order, OrderItem};
use super::value_objects::{DeliveryStatus, OrderStatus, TrackingCode};
use crate::domain::fraud::FraudAssessment;
use crate::domain::shared::{Money, OrderId, Phone};

/// Order store error.
#[derive(Debug, Clone, Error)]
pub enum OrderStoreError {
    /// The generated tracking code already exists.
    #[error("Tracking code already exists: {code}")]
    DuplicateTrackingCode {
        /// The colliding code.
        code: String,
    },

    /// No order with the given id.
    #[error("Order not found: {order_id}")]
    NotFound {
        /// The missing order id.
        order_id: String,
    },

    /// Underlying store failed.
    #[error("Order store failed: {message}")]
    QueryFailed {
        /// Adapter-provided detail.
        message: String,
    },
}

/// A prior order, reduced to the fields the fraud engine inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderHistoryEntry {
    /// Status of the prior order.
    pub status: OrderStatus,
    /// Total of the prior order.
    pub total: Money,
}

/// Partial update applied by admin endpoints.
///
/// `None` leaves a field untouched; the inner `Option` on clearable fields
/// distinguishes "set" from "clear".
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    /// New customer-facing status.
    pub status: Option<OrderStatus>,
    /// New courier-facing sub-status.
    pub delivery_status: Option<DeliveryStatus>,
    /// New delivery address.
    pub delivery_address_bn: Option<String>,
    /// New notes, or `Some(None)` to clear them.
    pub notes_bn: Option<Option<String>>,
    /// New delivery partner name, or `Some(None)` to clear it.
    pub delivery_partner_name: Option<Option<String>>,
    /// New delivery partner phone, or `Some(None)` to clear it.
    pub delivery_partner_phone: Option<Option<String>>,
}

impl OrderPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.delivery_status.is_none()
            && self.delivery_address_bn.is_none()
            && self.notes_bn.is_none()
            && self.delivery_partner_name.is_none()
            && self.delivery_partner_phone.is_none()
    }
}

/// Repository trait for order persistence.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert the order row. The aggregate's items are NOT persisted by this
    /// call; a following `insert_items` completes the logical unit.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTrackingCode` on a tracking-code collision.
    async fn insert_order(&self, order: &Order) -> Result<(), OrderStoreError>;

    /// Insert all item rows for an order.
    ///
    /// # Errors
    ///
    /// Returns error if the insert fails; the caller must then delete the
    /// orphaned order row.
    async fn insert_items(
        &self,
        order_id: &OrderId,
        items: &[OrderItem],
    ) -> Result<(), OrderStoreError>;

    /// Delete an order and (cascading) its items.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such order exists.
    async fn delete(&self, id: &OrderId) -> Result<(), OrderStoreError>;

    /// Find an order by id.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderStoreError>;

    /// Find an order matching BOTH tracking code and phone.
    ///
    /// The phone acts as the authorization factor for the public tracking
    /// endpoint; there is deliberately no code-only lookup.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_tracking_and_phone(
        &self,
        code: &TrackingCode,
        phone: &Phone,
    ) -> Result<Option<Order>, OrderStoreError>;

    /// All prior orders for a phone, reduced to fraud-relevant fields.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn history_for_phone(&self, phone: &Phone)
    -> Result<Vec<OrderHistoryEntry>, OrderStoreError>;

    /// Persist a fraud assessment onto an order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such order exists.
    async fn record_fraud(
        &self,
        id: &OrderId,
        assessment: &FraudAssessment,
    ) -> Result<(), OrderStoreError>;

    /// Most recent orders, newest first, up to `limit`.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list_recent(&self, limit: usize) -> Result<Vec<Order>, OrderStoreError>;

    /// Apply an admin patch. Returns `false` if the order does not exist.
    ///
    /// # Errors
    ///
    /// Returns error if the update fails or violates aggregate rules.
    async fn update(&self, id: &OrderId, patch: OrderPatch) -> Result<bool, OrderStoreError>;
}
