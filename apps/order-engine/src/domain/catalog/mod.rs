//! Catalog context: products and their variants.
//!
//! Orders snapshot catalog pricing at order time; nothing here is mutated by
//! checkout except that variants expose the stock level checked against the
//! requested quantity.

pub mod repository;

pub use repository::{CatalogError, CatalogRepository};

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, ProductId, VariantId};

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display title (Bangla).
    pub title_bn: String,
    /// Base unit price.
    pub price: Money,
    /// Whether the product can currently be ordered.
    pub is_active: bool,
}

/// A concrete variant of a product (color/size), optionally overriding price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Variant identifier.
    pub id: VariantId,
    /// Owning product.
    pub product_id: ProductId,
    /// Color label (Bangla), if the variant has one.
    pub color_bn: Option<String>,
    /// Size label (Bangla), if the variant has one.
    pub size_bn: Option<String>,
    /// Price override; `None` falls back to the product base price.
    pub price_override: Option<Money>,
    /// Units in stock. Checked (not reserved) at order time.
    pub stock_qty: u32,
    /// Whether the variant can currently be ordered.
    pub is_active: bool,
}

impl Variant {
    /// Effective unit price given the owning product.
    ///
    /// The override wins when present; this value is snapshotted into the
    /// order line and never revisited after a price change.
    #[must_use]
    pub fn effective_price(&self, product: &Product) -> Money {
        self.price_override.unwrap_or(product.price)
    }

    /// Whether the requested quantity can be fulfilled from stock.
    #[must_use]
    pub const fn has_stock_for(&self, qty: u32) -> bool {
        self.stock_qty >= qty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::new("prod-1"),
            title_bn: "পাঞ্জাবি".to_string(),
            price: Money::bdt(1200),
            is_active: true,
        }
    }

    #[test]
    fn effective_price_uses_override() {
        let variant = Variant {
            id: VariantId::new("var-1"),
            product_id: ProductId::new("prod-1"),
            color_bn: Some("নীল".to_string()),
            size_bn: Some("L".to_string()),
            price_override: Some(Money::bdt(1350)),
            stock_qty: 5,
            is_active: true,
        };
        assert_eq!(variant.effective_price(&product()), Money::bdt(1350));
    }

    #[test]
    fn effective_price_falls_back_to_base() {
        let variant = Variant {
            id: VariantId::new("var-2"),
            product_id: ProductId::new("prod-1"),
            color_bn: None,
            size_bn: None,
            price_override: None,
            stock_qty: 5,
            is_active: true,
        };
        assert_eq!(variant.effective_price(&product()), Money::bdt(1200));
    }

    #[test]
    fn has_stock_for_boundary() {
        let variant = Variant {
            id: VariantId::new("var-3"),
            product_id: ProductId::new("prod-1"),
            color_bn: None,
            size_bn: None,
            price_override: None,
            stock_qty: 3,
            is_active: true,
        };
        assert!(variant.has_stock_for(3));
        assert!(!variant.has_stock_for(4));
    }
}
