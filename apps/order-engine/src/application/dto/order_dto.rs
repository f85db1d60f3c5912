//! Checkout and tracking DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ordering::{DeliveryStatus, Order, OrderStatus};

/// One requested line of a checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequestDto {
    /// Product to order.
    pub product_id: String,
    /// Chosen variant, if the product has any.
    #[serde(default)]
    pub variant_id: Option<String>,
    /// Requested quantity.
    pub qty: u32,
}

/// Checkout request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequestDto {
    /// Customer display name.
    pub customer_name: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Delivery address.
    pub delivery_address_bn: String,
    /// Optional free-text notes.
    #[serde(default)]
    pub notes_bn: Option<String>,
    /// Optional coupon code.
    #[serde(default)]
    pub coupon_code: Option<String>,
    /// Requested lines.
    pub items: Vec<OrderItemRequestDto>,
    /// Delivery fee quoted to the customer.
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_fee: Decimal,
}

/// Order fields echoed back after a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrderDto {
    /// Order identifier.
    pub id: String,
    /// Public tracking code.
    pub tracking_code: String,
    /// Initial status.
    pub status: OrderStatus,
    /// Amount to collect on delivery.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_bdt: Decimal,
    /// Creation time, RFC 3339.
    pub created_at: String,
    /// Customer phone, echoed for the confirmation screen.
    pub customer_phone: String,
}

/// Checkout response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponseDto {
    /// Always `true` on this path.
    pub ok: bool,
    /// The created order.
    pub order: CreatedOrderDto,
}

impl CreateOrderResponseDto {
    /// Build the response from a committed order.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            ok: true,
            order: CreatedOrderDto {
                id: order.id().to_string(),
                tracking_code: order.tracking_code().to_string(),
                status: order.status(),
                total_bdt: order.total().amount(),
                created_at: order.created_at().to_rfc3339(),
                customer_phone: order.customer_phone().to_string(),
            },
        }
    }
}

/// Tracking request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackOrderRequestDto {
    /// Tracking code from the confirmation screen.
    pub tracking_code: String,
    /// Phone the order was placed with.
    pub phone: String,
}

/// Item summary on the tracking screen. Deliberately excludes pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedItemDto {
    /// Product title at order time.
    pub title_bn: String,
    /// Ordered quantity.
    pub qty: u32,
}

/// Order fields shown on the tracking screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedOrderDto {
    /// Public tracking code.
    pub tracking_code: String,
    /// Customer-facing status.
    pub status: OrderStatus,
    /// Courier-facing sub-status.
    pub delivery_status: DeliveryStatus,
    /// Creation time, RFC 3339.
    pub created_at: String,
    /// Item summaries.
    pub items: Vec<TrackedItemDto>,
}

/// Tracking response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackOrderResponseDto {
    /// Always `true` on this path.
    pub ok: bool,
    /// The matched order.
    pub order: TrackedOrderDto,
}

impl TrackOrderResponseDto {
    /// Build the response from a matched order.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            ok: true,
            order: TrackedOrderDto {
                tracking_code: order.tracking_code().to_string(),
                status: order.status(),
                delivery_status: order.delivery_status(),
                created_at: order.created_at().to_rfc3339(),
                items: order
                    .items()
                    .iter()
                    .map(|item| TrackedItemDto {
                        title_bn: item.title_bn.clone(),
                        qty: item.qty,
                    })
                    .collect(),
            },
        }
    }
}
