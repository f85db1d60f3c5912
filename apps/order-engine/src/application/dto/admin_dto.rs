//! Admin surface DTOs.
//!
//! The back office speaks snake_case and sees everything, including raw
//! fraud data and the customer's contact details.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::fraud::RiskLevel;
use crate::domain::ordering::{DeliveryStatus, Order, OrderStatus};

/// Deserialize a present-but-nullable field into `Some(inner)`, so patch
/// bodies can distinguish "leave alone" (absent) from "clear" (null).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query string for the admin order list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminOrdersQuery {
    /// Single order to fetch, with items.
    #[serde(default)]
    pub id: Option<String>,
    /// Substring filter over tracking code, name and phone.
    #[serde(default)]
    pub q: Option<String>,
    /// Max rows to return; clamped to 1..=500.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query string for the admin customer list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminCustomersQuery {
    /// Single customer to fetch, with order summaries.
    #[serde(default)]
    pub phone: Option<String>,
}

/// An order line as the back office sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOrderItemDto {
    /// Source product.
    pub product_id: String,
    /// Source variant, if any.
    pub variant_id: Option<String>,
    /// Title at order time.
    pub title_bn: String,
    /// Variant color at order time.
    pub color_bn: Option<String>,
    /// Variant size at order time.
    pub size_bn: Option<String>,
    /// Unit price at order time.
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Quantity.
    pub qty: u32,
    /// Line total.
    #[serde(with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
}

/// An order as the back office sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOrderDto {
    /// Order identifier.
    pub id: String,
    /// Public tracking code.
    pub tracking_code: String,
    /// Customer-facing status.
    pub status: OrderStatus,
    /// Courier-facing sub-status.
    pub delivery_status: DeliveryStatus,
    /// Customer name.
    pub customer_name: String,
    /// Customer phone.
    pub customer_phone: String,
    /// Delivery address.
    pub delivery_address_bn: String,
    /// Free-text notes.
    pub notes_bn: Option<String>,
    /// Sum of line totals.
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// Delivery fee charged.
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_fee: Decimal,
    /// Discount granted.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    /// Amount to collect.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Coupon code applied, if any.
    pub coupon_code: Option<String>,
    /// Fraud score, once a check has run.
    pub fraud_score: Option<u8>,
    /// Fraud classification, once a check has run.
    pub fraud_status: Option<RiskLevel>,
    /// Fraud reasons, once a check has run.
    pub fraud_reasons: Option<Vec<String>>,
    /// Assigned delivery partner name.
    pub delivery_partner_name: Option<String>,
    /// Assigned delivery partner phone.
    pub delivery_partner_phone: Option<String>,
    /// Creation time, RFC 3339.
    pub created_at: String,
    /// Order lines; present on detail lookups, omitted from lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<AdminOrderItemDto>>,
}

impl AdminOrderDto {
    /// Build from an order, optionally including its lines.
    #[must_use]
    pub fn from_order(order: &Order, with_items: bool) -> Self {
        let items = with_items.then(|| {
            order
                .items()
                .iter()
                .map(|item| AdminOrderItemDto {
                    product_id: item.product_id.to_string(),
                    variant_id: item.variant_id.as_ref().map(ToString::to_string),
                    title_bn: item.title_bn.clone(),
                    color_bn: item.color_bn.clone(),
                    size_bn: item.size_bn.clone(),
                    unit_price: item.unit_price.amount(),
                    qty: item.qty,
                    line_total: item.line_total.amount(),
                })
                .collect()
        });

        Self {
            id: order.id().to_string(),
            tracking_code: order.tracking_code().to_string(),
            status: order.status(),
            delivery_status: order.delivery_status(),
            customer_name: order.customer_name().to_string(),
            customer_phone: order.customer_phone().to_string(),
            delivery_address_bn: order.delivery_address_bn().to_string(),
            notes_bn: order.notes_bn().map(ToString::to_string),
            subtotal: order.subtotal().amount(),
            delivery_fee: order.delivery_fee().amount(),
            discount: order.discount().amount(),
            total: order.total().amount(),
            coupon_code: order.coupon_code().map(ToString::to_string),
            fraud_score: order.fraud().map(|f| f.score),
            fraud_status: order.fraud().map(|f| f.level),
            fraud_reasons: order.fraud().map(|f| f.reasons.clone()),
            delivery_partner_name: order.delivery_partner_name().map(ToString::to_string),
            delivery_partner_phone: order.delivery_partner_phone().map(ToString::to_string),
            created_at: order.created_at().to_rfc3339(),
            items,
        }
    }
}

/// Admin order patch body. Absent fields are left alone; explicit `null`
/// clears the clearable ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderPatchDto {
    /// Order to patch.
    pub id: String,
    /// New customer-facing status.
    #[serde(default)]
    pub status: Option<OrderStatus>,
    /// New courier-facing sub-status.
    #[serde(default)]
    pub delivery_status: Option<DeliveryStatus>,
    /// New delivery address.
    #[serde(default)]
    pub delivery_address_bn: Option<String>,
    /// New notes, or `null` to clear.
    #[serde(default, deserialize_with = "double_option")]
    pub notes_bn: Option<Option<String>>,
    /// New delivery partner name, or `null` to clear.
    #[serde(default, deserialize_with = "double_option")]
    pub delivery_partner_name: Option<Option<String>>,
    /// New delivery partner phone, or `null` to clear.
    #[serde(default, deserialize_with = "double_option")]
    pub delivery_partner_phone: Option<Option<String>>,
}

/// Admin order delete body.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteOrderRequestDto {
    /// Order to delete, items included.
    pub id: String,
}

/// A customer row on the admin screen, with order aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCustomerDto {
    /// Phone, the primary key.
    pub phone: String,
    /// Display name, if known.
    pub name: Option<String>,
    /// Admin notes.
    pub notes: Option<String>,
    /// Manual block flag.
    pub is_blocked: bool,
    /// Orders this phone has placed.
    pub total_orders: u32,
    /// Sum of this phone's order totals.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
}

/// Admin customer patch body; upserts the profile for `phone`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerPatchDto {
    /// Customer to upsert.
    pub phone: String,
    /// New display name, or `null` to clear.
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    /// New notes, or `null` to clear.
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
    /// New block flag.
    #[serde(default)]
    pub is_blocked: Option<bool>,
}
