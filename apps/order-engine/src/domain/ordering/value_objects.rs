//! Order lifecycle value objects.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer-facing order status.
///
/// Progresses confirmed → packed → shipped → delivered; `cancelled` is
/// terminal and can be entered from any non-delivered state by an admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order accepted at checkout.
    Confirmed,
    /// Order packed for handover to the courier.
    Packed,
    /// Order handed to the courier.
    Shipped,
    /// Order delivered to the customer.
    Delivered,
    /// Order cancelled. Terminal.
    Cancelled,
}

impl OrderStatus {
    /// Returns true if the order is in a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed => write!(f, "confirmed"),
            Self::Packed => write!(f, "packed"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Courier-facing delivery sub-status, independent of [`OrderStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// No courier assigned yet.
    Pending,
    /// A delivery partner has been assigned.
    Assigned,
    /// Parcel is out for delivery.
    OutForDelivery,
    /// Parcel delivered.
    Delivered,
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Assigned => write!(f, "assigned"),
            Self::OutForDelivery => write!(f, "out_for_delivery"),
            Self::Delivered => write!(f, "delivered"),
        }
    }
}

/// Payment method. Cash on delivery is the only method in this domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash on delivery.
    #[serde(rename = "COD")]
    Cod,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cod => write!(f, "COD"),
        }
    }
}

/// Alphabet for tracking codes. Excludes 0/O/1/I so codes survive being read
/// aloud or handwritten.
const TRACKING_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of the random portion of a tracking code.
const TRACKING_RANDOM_LEN: usize = 8;

/// Prefix identifying tracking codes of this store.
const TRACKING_PREFIX: &str = "HJ-";

/// A short, human-shareable public order token.
///
/// Paired with the customer phone for lookup authorization; never usable
/// alone. Uniqueness is enforced at insert time, with collision retries in
/// the order builder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingCode(String);

impl TrackingCode {
    /// Wrap an existing code (from storage or a lookup request).
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a fresh random code like `HJ-K7WMP2QX`.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let random: String = (0..TRACKING_RANDOM_LEN)
            .map(|_| {
                let idx = rng.random_range(0..TRACKING_ALPHABET.len());
                TRACKING_ALPHABET[idx] as char
            })
            .collect();
        Self(format!("{TRACKING_PREFIX}{random}"))
    }

    /// Get the code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TrackingCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_terminal() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Confirmed.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn order_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
        let parsed: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, OrderStatus::Cancelled);
    }

    #[test]
    fn delivery_status_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::OutForDelivery).unwrap(),
            "\"out_for_delivery\""
        );
    }

    #[test]
    fn payment_method_display() {
        assert_eq!(format!("{}", PaymentMethod::Cod), "COD");
        assert_eq!(serde_json::to_string(&PaymentMethod::Cod).unwrap(), "\"COD\"");
    }

    #[test]
    fn tracking_code_format() {
        let code = TrackingCode::generate();
        let s = code.as_str();
        assert!(s.starts_with("HJ-"));
        assert_eq!(s.len(), 3 + TRACKING_RANDOM_LEN);
    }

    #[test]
    fn tracking_code_avoids_ambiguous_characters() {
        for _ in 0..50 {
            let code = TrackingCode::generate();
            let random = &code.as_str()[3..];
            for c in random.chars() {
                assert!(!"0O1I".contains(c), "ambiguous char {c} in {code}");
            }
        }
    }

    #[test]
    fn tracking_codes_vary() {
        let a = TrackingCode::generate();
        let b = TrackingCode::generate();
        // 32^8 possibilities; a collision here would be astonishing.
        assert_ne!(a, b);
    }
}
