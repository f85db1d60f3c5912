//! Order aggregate.
//!
//! An order and its line items are created together at checkout and form one
//! logical unit: an order without items is an integrity failure. Money fields
//! are snapshots; later catalog price changes never touch historical totals.

use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use super::value_objects::{DeliveryStatus, OrderStatus, PaymentMethod, TrackingCode};
use crate::domain::catalog::{Product, Variant};
use crate::domain::fraud::FraudAssessment;
use crate::domain::shared::{Money, OrderId, Phone, ProductId, Timestamp, VariantId};

/// A denormalized order line.
///
/// Copies the product title, variant labels and unit price at order time so
/// the order remains self-describing after catalog edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product the line was created from.
    pub product_id: ProductId,
    /// Variant the line was created from, if one was chosen.
    pub variant_id: Option<VariantId>,
    /// Product title at order time.
    pub title_bn: String,
    /// Variant color label at order time.
    pub color_bn: Option<String>,
    /// Variant size label at order time.
    pub size_bn: Option<String>,
    /// Unit price at order time.
    pub unit_price: Money,
    /// Ordered quantity.
    pub qty: u32,
    /// `unit_price * qty`.
    pub line_total: Money,
}

impl OrderItem {
    /// Snapshot a catalog product (and optional variant) into an order line.
    pub fn snapshot(product: &Product, variant: Option<&Variant>, qty: u32) -> Self {
        let unit_price = variant.map_or(product.price, |v| v.effective_price(product));
        Self {
            product_id: product.id.clone(),
            variant_id: variant.map(|v| v.id.clone()),
            title_bn: product.title_bn.clone(),
            color_bn: variant.and_then(|v| v.color_bn.clone()),
            size_bn: variant.and_then(|v| v.size_bn.clone()),
            unit_price,
            qty,
            line_total: unit_price * qty,
        }
    }
}

/// Command to create an order once pricing has been resolved.
#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    /// Customer display name.
    pub customer_name: String,
    /// Customer phone, the key for history and fraud signals.
    pub customer_phone: Phone,
    /// Delivery address (Bangla).
    pub delivery_address_bn: String,
    /// Optional free-text notes.
    pub notes_bn: Option<String>,
    /// Coupon code applied, if any (already redeemed by the caller).
    pub coupon_code: Option<String>,
    /// Delivery fee charged.
    pub delivery_fee: Money,
    /// Discount granted. Zero when no coupon was applied.
    pub discount: Money,
    /// Resolved order lines.
    pub items: Vec<OrderItem>,
}

/// The order aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    tracking_code: TrackingCode,
    status: OrderStatus,
    delivery_status: DeliveryStatus,
    customer_name: String,
    customer_phone: Phone,
    delivery_address_bn: String,
    notes_bn: Option<String>,
    subtotal: Money,
    delivery_fee: Money,
    discount: Money,
    total: Money,
    payment_method: PaymentMethod,
    coupon_code: Option<String>,
    items: Vec<OrderItem>,
    fraud: Option<FraudAssessment>,
    delivery_partner_name: Option<String>,
    delivery_partner_phone: Option<String>,
    created_at: Timestamp,
}

impl Order {
    /// Create a new confirmed order from resolved lines.
    ///
    /// Computes subtotal from the lines and the final total as
    /// `max(0, subtotal + delivery_fee - discount)`.
    ///
    /// # Errors
    ///
    /// Returns error if the command has no items or a line total that does
    /// not match its unit price and quantity.
    pub fn place(command: PlaceOrderCommand, tracking_code: TrackingCode) -> Result<Self, OrderError> {
        if command.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        for item in &command.items {
            if item.line_total != item.unit_price * item.qty {
                return Err(OrderError::LineTotalMismatch {
                    title_bn: item.title_bn.clone(),
                });
            }
        }

        let subtotal = command
            .items
            .iter()
            .fold(Money::ZERO, |acc, item| acc + item.line_total);
        let total = (subtotal + command.delivery_fee - command.discount).clamp_non_negative();

        Ok(Self {
            id: OrderId::generate(),
            tracking_code,
            status: OrderStatus::Confirmed,
            delivery_status: DeliveryStatus::Pending,
            customer_name: command.customer_name,
            customer_phone: command.customer_phone,
            delivery_address_bn: command.delivery_address_bn,
            notes_bn: command.notes_bn,
            subtotal,
            delivery_fee: command.delivery_fee,
            discount: command.discount,
            total,
            payment_method: PaymentMethod::Cod,
            coupon_code: command.coupon_code,
            items: command.items,
            fraud: None,
            delivery_partner_name: None,
            delivery_partner_phone: None,
            created_at: Timestamp::now(),
        })
    }

    /// Order identifier.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Public tracking code.
    #[must_use]
    pub const fn tracking_code(&self) -> &TrackingCode {
        &self.tracking_code
    }

    /// Customer-facing status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Courier-facing delivery sub-status.
    #[must_use]
    pub const fn delivery_status(&self) -> DeliveryStatus {
        self.delivery_status
    }

    /// Customer name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Customer phone.
    #[must_use]
    pub const fn customer_phone(&self) -> &Phone {
        &self.customer_phone
    }

    /// Delivery address.
    #[must_use]
    pub fn delivery_address_bn(&self) -> &str {
        &self.delivery_address_bn
    }

    /// Free-text notes.
    #[must_use]
    pub fn notes_bn(&self) -> Option<&str> {
        self.notes_bn.as_deref()
    }

    /// Sum of line totals.
    #[must_use]
    pub const fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Delivery fee charged.
    #[must_use]
    pub const fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    /// Discount granted.
    #[must_use]
    pub const fn discount(&self) -> Money {
        self.discount
    }

    /// Final amount to collect.
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }

    /// Payment method.
    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Coupon code applied, if any.
    #[must_use]
    pub fn coupon_code(&self) -> Option<&str> {
        self.coupon_code.as_deref()
    }

    /// Order lines.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Fraud assessment, present once a check has run.
    #[must_use]
    pub const fn fraud(&self) -> Option<&FraudAssessment> {
        self.fraud.as_ref()
    }

    /// Assigned delivery partner name.
    #[must_use]
    pub fn delivery_partner_name(&self) -> Option<&str> {
        self.delivery_partner_name.as_deref()
    }

    /// Assigned delivery partner phone.
    #[must_use]
    pub fn delivery_partner_phone(&self) -> Option<&str> {
        self.delivery_partner_phone.as_deref()
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Admin status update.
    ///
    /// # Errors
    ///
    /// Returns error when moving out of a terminal state.
    pub fn set_status(&mut self, status: OrderStatus) -> Result<(), OrderError> {
        if self.status.is_terminal() && status != self.status {
            return Err(OrderError::TerminalStatus {
                status: self.status,
            });
        }
        self.status = status;
        Ok(())
    }

    /// Admin delivery sub-status update.
    pub const fn set_delivery_status(&mut self, status: DeliveryStatus) {
        self.delivery_status = status;
    }

    /// Replace the delivery address.
    pub fn set_delivery_address(&mut self, address: String) {
        self.delivery_address_bn = address;
    }

    /// Replace or clear the notes.
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes_bn = notes;
    }

    /// Assign or clear the delivery partner.
    pub fn set_delivery_partner(&mut self, name: Option<String>, phone: Option<String>) {
        self.delivery_partner_name = name;
        self.delivery_partner_phone = phone;
    }

    /// Record a fraud assessment onto the order.
    pub fn record_fraud(&mut self, assessment: FraudAssessment) {
        self.fraud = Some(assessment);
    }
}
